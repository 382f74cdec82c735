//! # leadflow-core
//!
//! Pure, synchronous engine for a wizard-style questionnaire flow:
//! a declarative [`catalog::Catalog`] of steps, a pure step
//! [`resolve`]r that derives the active sequence from the answers, a
//! validation gate, and the [`flow::FlowController`] navigation state
//! machine. Persistence and submission live in `leadflow-runtime`.

pub mod answers;
pub mod catalog;
pub mod connect;
pub mod field;
pub mod flow;
pub mod resolve;
pub mod snapshot;
pub mod step;
pub mod validate;

pub use answers::AnswerRecord;
pub use catalog::Catalog;
pub use connect::connect_catalog;
pub use field::{Answer, Field, FieldKind};
pub use flow::{BlockedReason, Cursor, Direction, FlowController, Nav, StepTransition};
pub use resolve::{ResolvedSequence, resolve};
pub use snapshot::Snapshot;
pub use step::{Step, StepBody, StepCondition};
pub use validate::{field_is_satisfied, step_is_valid};

pub mod prelude {
    pub use crate::answers::AnswerRecord;
    pub use crate::catalog::Catalog;
    pub use crate::connect::connect_catalog;
    pub use crate::field::{Answer, Field, FieldKind};
    pub use crate::flow::{BlockedReason, FlowController, Nav, StepTransition};
    pub use crate::snapshot::Snapshot;
    pub use crate::step::{Step, StepBody};
}
