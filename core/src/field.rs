//! Field - One Answerable Unit
//!
//! A `Field` binds a key in the answer record to a `FieldKind`.
//! The kind is a closed sum type: validation and rendering match on it
//! exhaustively, so adding a kind is a compile-time-checked change
//! rather than a stringly-typed one.

use serde::{Deserialize, Serialize};

/// The closed set of field kinds.
///
/// Scalar-valued: `Text`, `Email`, `TextArea`, `Choice`.
/// List-valued: `MultiChoice`, `MultiText`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Single-line text rendered with an email keyboard/autofill hint.
    /// Format is intentionally NOT validated beyond non-emptiness;
    /// a lead-capture flow must never dead-end on a strict parser.
    Email,
    /// Multi-line free text.
    TextArea,
    /// Pick exactly one of the listed options.
    Choice { options: Vec<String> },
    /// Pick any subset of the listed options.
    MultiChoice { options: Vec<String> },
    /// Repeating text slots that grow as the user types, up to `max_entries`.
    MultiText { max_entries: usize },
}

impl FieldKind {
    /// Whether answers of this kind are list-shaped.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldKind::MultiChoice { .. } | FieldKind::MultiText { .. })
    }
}

/// One answerable unit on a content step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique key into the answer record. Keys may collide across
    /// mutually exclusive branches (only one branch is ever active),
    /// never within a single resolved sequence.
    pub key: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Presentation-only.
    pub label: Option<String>,
    /// Presentation-only.
    pub placeholder: Option<String>,
}

impl Field {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
            required: true,
            label: None,
            placeholder: None,
        }
    }

    pub fn text(key: impl Into<String>) -> Self {
        Self::new(key, FieldKind::Text)
    }

    pub fn email(key: impl Into<String>) -> Self {
        Self::new(key, FieldKind::Email)
    }

    pub fn text_area(key: impl Into<String>) -> Self {
        Self::new(key, FieldKind::TextArea)
    }

    pub fn choice(key: impl Into<String>, options: &[&str]) -> Self {
        Self::new(
            key,
            FieldKind::Choice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    pub fn multi_choice(key: impl Into<String>, options: &[&str]) -> Self {
        Self::new(
            key,
            FieldKind::MultiChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    pub fn multi_text(key: impl Into<String>, max_entries: usize) -> Self {
        Self::new(key, FieldKind::MultiText { max_entries })
    }

    /// Mark the field as non-blocking for the validation gate.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// The value recorded for a field. Shape follows the field kind:
/// scalar for text/email/textarea/single-choice, list for
/// multi-choice and multi-text.
///
/// Serialized untagged, so snapshots and submission payloads carry
/// plain JSON strings and string arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scalar(String),
    List(Vec<String>),
}

impl Answer {
    pub fn scalar(value: impl Into<String>) -> Self {
        Answer::Scalar(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::List(values.into_iter().map(Into::into).collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Answer::Scalar(s) => Some(s),
            Answer::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Answer::Scalar(_) => None,
            Answer::List(items) => Some(items),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Scalar(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Scalar(value)
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Answer::List(values)
    }
}
