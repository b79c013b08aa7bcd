//! Translation catalog engine.
//!
//! ## Module Structure
//!
//! - `store`: Filesystem access behind the `FileStore` trait
//! - `codec`: Parse and render PHP array-return documents
//! - `data`: `Topic` and the ordered `Translations` tree
//! - `locator`: Document path rules (application and vendor)
//! - `extract`: Translation-key extraction from source text
//! - `catalog`: Discovery, fill, remove, rename, search and sync
//! - `error`: Typed catalog errors

pub mod catalog;
pub mod codec;
pub mod data;
pub mod error;
pub mod extract;
pub mod locator;
pub mod store;

pub use catalog::{FillRequest, TranslationCatalog};
pub use data::{Entry, Topic, Translations};
pub use error::CatalogError;
pub use store::{FileStore, FsStore};
