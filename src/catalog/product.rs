/// A single purchasable item.
///
/// All fields are display strings. `price` is pre-formatted for display
/// (e.g. `"$150"`) rather than a numeric amount. Products have no id; two
/// products are the same product when all their fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Price line as shown in the detail view.
    pub fn price_label(&self) -> String {
        format!("Price: {}", self.price)
    }
}
