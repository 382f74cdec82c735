//! Step Catalog
//!
//! Static declarative definition of a questionnaire: a fixed prefix
//! sequence, a table of branch sequences keyed by the discriminator
//! answer, and a fixed suffix sequence. The catalog itself never
//! changes at runtime; the [`crate::resolve`] module derives the
//! effective linear sequence from it.

use crate::step::Step;

/// The questionnaire definition.
///
/// Built once with the builder methods, then handed to a
/// [`crate::flow::FlowController`].
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Field key whose answer selects the active branch.
    discriminator: String,
    prefix: Vec<Step>,
    branches: Vec<(String, Vec<Step>)>,
    suffix: Vec<Step>,
}

impl Catalog {
    pub fn new(discriminator: impl Into<String>) -> Self {
        Self {
            discriminator: discriminator.into(),
            prefix: Vec::new(),
            branches: Vec::new(),
            suffix: Vec::new(),
        }
    }

    pub fn prefix_step(mut self, step: Step) -> Self {
        self.prefix.push(step);
        self
    }

    /// Register the steps injected when the discriminator answer equals
    /// `when`. At most one branch is ever active (the discriminator is
    /// single-select).
    pub fn branch(mut self, when: impl Into<String>, steps: Vec<Step>) -> Self {
        self.branches.push((when.into(), steps));
        self
    }

    pub fn suffix_step(mut self, step: Step) -> Self {
        self.suffix.push(step);
        self
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    pub fn prefix(&self) -> &[Step] {
        &self.prefix
    }

    pub fn suffix(&self) -> &[Step] {
        &self.suffix
    }

    /// Branch steps for a discriminator value; empty when the value has
    /// no registered branch.
    pub fn branch_steps(&self, value: &str) -> &[Step] {
        self.branches
            .iter()
            .find(|(when, _)| when == value)
            .map(|(_, steps)| steps.as_slice())
            .unwrap_or(&[])
    }

    pub fn branch_values(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().map(|(when, _)| when.as_str())
    }
}
