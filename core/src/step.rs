//! Step - One Ordered Unit of the Questionnaire

use crate::answers::AnswerRecord;
use crate::field::Field;

/// Predicate deciding whether a step participates in the resolved
/// sequence for the current answers. The baseline catalog carries none,
/// but backward navigation must skip steps whose predicate no longer
/// holds, so the machinery is kept.
pub type StepCondition = fn(&AnswerRecord) -> bool;

/// Step body variants.
#[derive(Debug, Clone)]
pub enum StepBody {
    /// No fields; a single advance action.
    Intro,
    /// Question text plus an ordered field list.
    Content { question: String, fields: Vec<Field> },
    /// Absorbing end state; no fields, no further navigation.
    Terminal,
}

/// An ordered unit of the questionnaire flow.
#[derive(Debug, Clone)]
pub struct Step {
    pub id: String,
    pub body: StepBody,
    /// Custom advance-button label ("Continue" when absent).
    pub button_label: Option<String>,
    pub condition: Option<StepCondition>,
}

impl Step {
    pub fn intro(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: StepBody::Intro,
            button_label: None,
            condition: None,
        }
    }

    pub fn content(id: impl Into<String>, question: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id: id.into(),
            body: StepBody::Content {
                question: question.into(),
                fields,
            },
            button_label: None,
            condition: None,
        }
    }

    pub fn terminal(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: StepBody::Terminal,
            button_label: None,
            condition: None,
        }
    }

    pub fn with_button(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    pub fn with_condition(mut self, condition: StepCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn is_intro(&self) -> bool {
        matches!(self.body, StepBody::Intro)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.body, StepBody::Terminal)
    }

    /// Ordered field list; empty for intro and terminal steps.
    pub fn fields(&self) -> &[Field] {
        match &self.body {
            StepBody::Content { fields, .. } => fields,
            StepBody::Intro | StepBody::Terminal => &[],
        }
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Whether this step participates in the flow for the given answers.
    /// Steps without a condition always apply.
    pub fn applies(&self, answers: &AnswerRecord) -> bool {
        self.condition.map(|cond| cond(answers)).unwrap_or(true)
    }

    /// Validation gate for this step, see [`crate::validate`].
    pub fn is_valid(&self, answers: &AnswerRecord) -> bool {
        crate::validate::step_is_valid(self, answers)
    }
}
