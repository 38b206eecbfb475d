//! Terminal shopping catalog browser.
//!
//! A fixed catalog, a single selection, and a layout that shows list and
//! detail side by side on wide terminals or as two navigable screens on
//! narrow ones.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod selection;
pub mod shutdown;
pub mod ui;

pub use catalog::{Catalog, Product};
pub use error::AppError;
pub use selection::SelectionStore;
