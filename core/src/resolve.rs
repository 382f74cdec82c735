//! Step Resolver
//!
//! Recomputes the effective linear step sequence from the catalog given
//! the current answers. Pure: same catalog + same answers always yield
//! the same sequence, with no hidden state, so it is safe to call on
//! every answer mutation (callers normally re-resolve only before
//! advancing).

use crate::answers::AnswerRecord;
use crate::catalog::Catalog;
use crate::step::Step;

/// The concrete, ordered list of steps currently active.
#[derive(Debug, Clone)]
pub struct ResolvedSequence {
    steps: Vec<Step>,
}

impl ResolvedSequence {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Structural identity: two sequences are the same shape iff their
    /// identifier lists match. Used by the navigation machine to decide
    /// between an in-place move and a re-layout.
    pub fn same_shape(&self, other: &ResolvedSequence) -> bool {
        self.ids() == other.ids()
    }
}

/// Resolve the active sequence: prefix ++ branch-steps-for-discriminator
/// ++ suffix. The branch contribution is empty when the discriminator is
/// unanswered or its value has no registered branch. Suffix steps whose
/// condition does not hold against the answers are excluded.
pub fn resolve(catalog: &Catalog, answers: &AnswerRecord) -> ResolvedSequence {
    let mut steps: Vec<Step> = Vec::new();
    steps.extend_from_slice(catalog.prefix());

    if let Some(role) = answers.scalar(catalog.discriminator()) {
        steps.extend_from_slice(catalog.branch_steps(role));
    }

    steps.extend(
        catalog
            .suffix()
            .iter()
            .filter(|s| s.applies(answers))
            .cloned(),
    );

    ResolvedSequence { steps }
}
