// Export our modules for use in the binary and tests
pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod store;
pub mod table;

pub use catalog::{EmbeddedCatalog, LocationCatalog};
pub use domain::{Contact, ContactField};
pub use store::ContactStore;
pub use table::{ContactTable, Orientation, TableModel};
