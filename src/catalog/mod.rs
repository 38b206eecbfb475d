//! Compiled-in product catalog.
//!
//! The catalog is built once at startup and never changes afterwards.
//! Display order always follows construction order.

mod product;

pub use product::Product;

/// Ordered, immutable sequence of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new("Product A", "$100", "This is a great product A."),
            Product::new("Product B", "$150", "This is product B with more features."),
            Product::new("Product C", "$200", "Premium product C."),
        ])
    }

    /// All products in display order. Returns the same slice on every call.
    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Index of the first product equal to `product`.
    pub fn position(&self, product: &Product) -> Option<usize> {
        self.products.iter().position(|p| p == product)
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.position(product).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_products_in_order() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.get_all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Product A", "Product B", "Product C"]);
    }

    #[test]
    fn get_all_is_stable_across_calls() {
        let catalog = Catalog::builtin();
        let first = catalog.get_all().to_vec();
        let second = catalog.get_all().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn position_matches_by_value() {
        let catalog = Catalog::builtin();
        let b = Product::new("Product B", "$150", "This is product B with more features.");
        assert_eq!(catalog.position(&b), Some(1));
        assert!(!catalog.contains(&Product::new("Product D", "$1", "Nope")));
    }

    #[test]
    fn price_label_is_prefixed() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_all()[2].price_label(), "Price: $200");
    }
}
