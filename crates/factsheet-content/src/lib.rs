//! Content records for the factsheet site.
//!
//! This crate holds the record types, the validated [`ContentStore`] and the
//! built-in content set that the static builder renders.

pub mod builtin;
pub mod record;
pub mod store;

pub use record::{AuxiliaryContentRecord, ContentRecord};
pub use store::{ContentError, ContentStore};
