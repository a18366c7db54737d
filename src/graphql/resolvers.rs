use std::sync::Arc;

use crate::model::Tutorial;
use crate::storage::TutorialRepository;

use super::definition::Arguments;

/// Computes the value of an entry-point field.
///
/// Resolvers are synchronous and never fail: anything they cannot answer,
/// including malformed arguments, comes back as `None`.
pub trait Resolver: Send + Sync {
    type Output;

    fn resolve(&self, args: &Arguments) -> Option<Self::Output>;
}

pub const GREETING: &str = "World";

pub struct HelloResolver;

impl Resolver for HelloResolver {
    type Output = &'static str;

    fn resolve(&self, _args: &Arguments) -> Option<Self::Output> {
        Some(GREETING)
    }
}

/// Looks up a single tutorial by its `id` argument.
pub struct TutorialResolver {
    repo: Arc<TutorialRepository>,
}

impl TutorialResolver {
    pub fn new(repo: Arc<TutorialRepository>) -> Self {
        Self { repo }
    }
}

impl Resolver for TutorialResolver {
    type Output = Tutorial;

    fn resolve(&self, args: &Arguments) -> Option<Self::Output> {
        let Some(id) = args.i32("id") else {
            tracing::debug!(id = ?args.get("id"), "Missing or non-integer tutorial id");
            return None;
        };
        self.repo.get(id).cloned()
    }
}

/// Returns every tutorial, in store order.
pub struct ListResolver {
    repo: Arc<TutorialRepository>,
}

impl ListResolver {
    pub fn new(repo: Arc<TutorialRepository>) -> Self {
        Self { repo }
    }
}

impl Resolver for ListResolver {
    type Output = Vec<Tutorial>;

    fn resolve(&self, _args: &Arguments) -> Option<Self::Output> {
        Some(self.repo.list().to_vec())
    }
}
