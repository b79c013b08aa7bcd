//! Core data types shared by the codec, the extractor and the catalog.
//!
//! ## Module Structure
//!
//! - `topic`: Topic names, including vendor-namespaced topics
//! - `translations`: The ordered translation tree (`Translations`, `Entry`)

pub mod topic;
pub mod translations;

pub use topic::{NAMESPACE_SEPARATOR, Topic};
pub use translations::{Entry, Translations};
