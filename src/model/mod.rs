//! Data models for the tutorial example.
//!
//! - [`Tutorial`]: the queryable record, owning its author and comments
//! - [`Author`]: embedded in a tutorial
//! - [`Comment`]: embedded in a tutorial, kept in order

mod tutorial;

pub use tutorial::{Author, Comment, Tutorial};
