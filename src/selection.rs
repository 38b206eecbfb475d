//! Selection state: the product currently shown in the detail view.
//!
//! The store starts empty and is only ever written by [`SelectionStore::select`].
//! There is no way to clear a selection once one has been made.

use crate::catalog::{Catalog, Product};

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Option<&Product>)>;

pub struct SelectionStore {
    catalog: Catalog,
    selected: Option<Product>,
    version: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SelectionStore {
    /// Create an empty selection over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: None,
            version: 0,
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Bumped on every `select`, including re-selecting the same product.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Make `product` the current selection and notify subscribers.
    ///
    /// `product` must come from the catalog this store was built with.
    pub fn select(&mut self, product: Product) {
        debug_assert!(
            self.catalog.contains(&product),
            "selected product {:?} is not in the catalog",
            product.name
        );
        tracing::debug!(product = %product.name, "selection changed");
        self.selected = Some(product);
        self.version = self.version.wrapping_add(1);
        let selected = self.selected.as_ref();
        for (_, listener) in &mut self.listeners {
            listener(selected);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Option<&Product>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected", &self.selected)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
