//! Validation Gate
//!
//! Pure per-step predicate over the answer record. The caller disables
//! or enables the advance control from the result; nothing here is ever
//! surfaced as an error. A required field blocks the step until its
//! kind-specific non-emptiness rule is met; optional fields never block.

use crate::answers::AnswerRecord;
use crate::field::{Field, FieldKind};
use crate::step::Step;

/// A step is valid iff every required field on it is satisfied.
/// Intro and terminal steps carry no fields and are always valid.
pub fn step_is_valid(step: &Step, answers: &AnswerRecord) -> bool {
    step.fields()
        .iter()
        .filter(|f| f.required)
        .all(|f| field_is_satisfied(f, answers))
}

/// Kind-specific non-emptiness rule for a single field.
pub fn field_is_satisfied(field: &Field, answers: &AnswerRecord) -> bool {
    match &field.kind {
        // Email format is deliberately not checked beyond non-emptiness.
        FieldKind::Text | FieldKind::Email | FieldKind::TextArea => answers
            .scalar(&field.key)
            .is_some_and(|v| !v.trim().is_empty()),
        FieldKind::Choice { .. } => answers.get(&field.key).is_some(),
        FieldKind::MultiChoice { .. } => answers
            .list(&field.key)
            .is_some_and(|items| !items.is_empty()),
        FieldKind::MultiText { .. } => answers
            .list(&field.key)
            .is_some_and(|items| !items.is_empty() && items.iter().any(|v| !v.trim().is_empty())),
    }
}
