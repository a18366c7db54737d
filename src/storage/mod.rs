//! In-memory data store.
//!
//! The store is populated once at startup and read-only afterwards.
//!
//! ## Components
//!
//! - [`TutorialRepository`]: ordered, immutable collection with lookup by id
//! - [`sample_tutorials`]: the fixed dataset used by the tutorial example

mod repository;
mod seed;

pub use repository::TutorialRepository;
pub use seed::sample_tutorials;
