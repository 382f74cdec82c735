//! AnswerRecord - Collected Answers
//!
//! A key-ordered map from field key to [`Answer`]. Entries are written
//! as the user interacts with any bound field, regardless of which step
//! is currently displayed, and are never pruned: answers belonging to a
//! branch the user has since left remain as harmless dead data (see the
//! submission payload policy in the runtime crate).

use crate::field::Answer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    entries: BTreeMap<String, Answer>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Answer>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.entries.get(key)
    }

    /// Scalar view of an answer. `None` when absent or list-shaped.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Answer::as_scalar)
    }

    /// List view of an answer. `None` when absent or scalar-shaped.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).and_then(Answer::as_list)
    }

    /// Mutable list access, inserting an empty list when the key is
    /// absent or currently scalar-shaped.
    pub fn list_mut(&mut self, key: &str) -> &mut Vec<String> {
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Answer::List(Vec::new()));
        if let Answer::Scalar(s) = entry {
            // A scalar left behind by an earlier field shape; promote it.
            let promoted = if s.is_empty() { Vec::new() } else { vec![std::mem::take(s)] };
            *entry = Answer::List(promoted);
        }
        match entry {
            Answer::List(items) => items,
            Answer::Scalar(_) => unreachable!("promoted above"),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.entries.iter()
    }
}
