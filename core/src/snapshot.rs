//! Persisted Snapshot
//!
//! Serialized form of the answer record plus the navigation cursor.
//! Written after every answer mutation and every successful navigation,
//! read once at flow initialization, deleted on restart. There is no
//! schema versioning: a snapshot that fails to decode is treated as
//! absent by the stores, never as a crash.

use crate::answers::AnswerRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub answers: AnswerRecord,
    pub current: usize,
    pub high_water_mark: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Answer;

    #[test]
    fn test_round_trip_preserves_list_values() {
        let mut answers = AnswerRecord::new();
        answers.set("name", "Jane");
        answers.set("links", Answer::list(["https://a", "https://b"]));
        answers.set("interests", Answer::list(["Networking", "Grants / Funding"]));

        let snapshot = Snapshot {
            answers,
            current: 4,
            high_water_mark: 5,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
