use crate::model::Tutorial;
use std::slice;

/// Read-only, ordered collection of tutorials.
///
/// Populated once through [`TutorialRepository::new`] and never mutated
/// afterwards; resolvers share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TutorialRepository {
    tutorials: Vec<Tutorial>,
}

impl TutorialRepository {
    pub fn new(tutorials: Vec<Tutorial>) -> Self {
        tracing::debug!(count = tutorials.len(), "Populated tutorial repository");
        Self { tutorials }
    }

    /// Repository holding the fixed sample dataset.
    pub fn sample() -> Self {
        Self::new(super::sample_tutorials())
    }

    pub fn list(&self) -> &[Tutorial] {
        &self.tutorials
    }

    pub fn iter(&self) -> slice::Iter<'_, Tutorial> {
        self.tutorials.iter()
    }

    /// First tutorial whose id matches, scanning in insertion order.
    pub fn get(&self, id: i32) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tutorials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutorials.is_empty()
    }
}
