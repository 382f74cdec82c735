//! Submission Payload
//!
//! Flat JSON record handed to the submission sink: a `timestamp` field
//! (RFC 3339, UTC) plus one field per answered key. List-valued answers
//! pass through as JSON string arrays; the receiving side owns any
//! flattening into its storage columns.
//!
//! The whole answer record is included as-is, so answers filled in for
//! a branch the user later left still travel with the payload. That
//! matches the original behavior and keeps the payload a faithful dump
//! of everything the user typed.

use chrono::{DateTime, SecondsFormat, Utc};
use leadflow_core::AnswerRecord;

/// Assemble the payload with the current wall-clock time.
pub fn assemble(answers: &AnswerRecord) -> serde_json::Value {
    assemble_at(answers, Utc::now())
}

/// Assemble the payload with an explicit timestamp.
pub fn assemble_at(answers: &AnswerRecord, at: DateTime<Utc>) -> serde_json::Value {
    let mut record = serde_json::Map::new();
    record.insert(
        "timestamp".to_string(),
        serde_json::Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    for (key, answer) in answers.iter() {
        // Answer serializes untagged: strings and string arrays.
        let value = serde_json::to_value(answer).unwrap_or(serde_json::Value::Null);
        record.insert(key.clone(), value);
    }
    serde_json::Value::Object(record)
}
