// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Quiz entry data structures.
//!
//! A quiz is a title, a list of project names, and a map of questions.
//! Each question owns a map of answers, and each answer refers to some of
//! the quiz's projects by name. Maps are keyed by integer ids, which are
//! stored as decimal strings in the entry's field values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Text given to every newly added question.
pub const QUESTION_DEFAULT: &str = "What makes a frog a frog?";

/// Key of a question within a quiz, or of an answer within a question.
///
/// Stored keys are parsed as integers, so a non-canonical key such as `"01"`
/// is written back as `"1"` the next time its map is saved.
pub type ItemId = u32;

/// An answer and the projects it counts towards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, alias = "answer", deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub projects: Vec<String>,
}

#[cfg(test)]
impl Answer {
    pub fn new(text: impl Into<String>, projects: Vec<String>) -> Self {
        Self {
            text: text.into(),
            projects,
        }
    }
}

/// A question and its answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, alias = "question", deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_map")]
    pub answers: BTreeMap<ItemId, Answer>,
}

/// A string, with `null` and other non-strings read as empty.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => {
            log::warn!("Expected text, found {}; using empty text", other);
            Ok(String::new())
        }
    }
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(decode_strings(Value::deserialize(deserializer)?))
}

fn lenient_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<ItemId, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(decode_entries(Value::deserialize(deserializer)?))
}

/// Read a list of strings, skipping members that are not strings.
pub fn decode_strings(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    log::warn!("Skipping non-text list member {}", other);
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("Expected a list, found {}", other);
            Vec::new()
        }
    }
}

/// Read an id-keyed map one entry at a time. Entries whose key is not an
/// integer or whose value does not decode are skipped; the rest are kept.
pub fn decode_entries<T: DeserializeOwned>(value: Value) -> BTreeMap<ItemId, T> {
    let entries = match value {
        Value::Object(entries) => entries,
        Value::Null => return BTreeMap::new(),
        other => {
            log::warn!("Expected a map of items, found {}", other);
            return BTreeMap::new();
        }
    };

    let mut decoded = BTreeMap::new();
    for (key, item) in entries {
        let Ok(id) = key.parse::<ItemId>() else {
            log::warn!("Skipping item with non-numeric key {:?}", key);
            continue;
        };
        match serde_json::from_value(item) {
            Ok(item) => {
                decoded.insert(id, item);
            }
            Err(e) => log::warn!("Skipping item {:?}: {}", key, e),
        }
    }
    decoded
}

impl Default for Question {
    fn default() -> Self {
        Self {
            text: QUESTION_DEFAULT.to_string(),
            answers: BTreeMap::new(),
        }
    }
}

/// The whole quiz entry as the form sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    pub title: String,
    pub projects: Vec<String>,
    pub questions: BTreeMap<ItemId, Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_map_uses_string_keys() {
        let mut answers = BTreeMap::new();
        answers.insert(1, Answer::new("green skin", vec![]));
        let mut questions = BTreeMap::new();
        questions.insert(
            1,
            Question {
                text: QUESTION_DEFAULT.to_string(),
                answers,
            },
        );

        let value = serde_json::to_value(&questions).unwrap();
        assert_eq!(
            value,
            json!({
                "1": {
                    "text": "What makes a frog a frog?",
                    "answers": { "1": { "text": "green skin", "projects": [] } }
                }
            })
        );
    }

    #[test]
    fn test_legacy_text_keys() {
        let value = json!({
            "7": {
                "question": "Pick one",
                "answers": { "3": { "answer": "this", "projects": ["A"] } }
            }
        });

        let questions: BTreeMap<ItemId, Question> = serde_json::from_value(value).unwrap();
        let question = &questions[&7];
        assert_eq!(question.text, "Pick one");
        assert_eq!(question.answers[&3], Answer::new("this", vec!["A".to_string()]));
    }

    #[test]
    fn test_missing_members_default_to_empty() {
        let question: Question = serde_json::from_value(json!({})).unwrap();
        assert_eq!(question.text, "");
        assert!(question.answers.is_empty());

        let answer: Answer = serde_json::from_value(json!({ "text": "x" })).unwrap();
        assert!(answer.projects.is_empty());
    }

    #[test]
    fn test_default_question() {
        let question = Question::default();
        assert_eq!(question.text, QUESTION_DEFAULT);
        assert!(question.answers.is_empty());
    }

    #[test]
    fn test_null_members_read_as_empty() {
        let question: Question = serde_json::from_value(json!({
            "text": null,
            "answers": { "1": { "text": null, "projects": null } }
        }))
        .unwrap();
        assert_eq!(question.text, "");
        assert_eq!(question.answers[&1], Answer::default());
    }

    #[test]
    fn test_bad_entries_are_skipped_individually() {
        let questions: BTreeMap<ItemId, Question> = decode_entries(json!({
            "1": { "text": "Good question", "answers": {} },
            "2": { "text": "Mixed", "answers": { "1": { "text": "ok" }, "x": { "text": "bad key" }, "2": 5 } },
            "three": { "text": "bad key" },
            "4": "not a question"
        }));

        assert_eq!(questions.keys().copied().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(questions[&1].text, "Good question");
        assert_eq!(questions[&2].answers.keys().copied().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn test_project_lists_skip_non_text() {
        assert_eq!(decode_strings(json!(["A", null, 3, "B"])), ["A", "B"]);
        assert!(decode_strings(json!("A")).is_empty());
        assert!(decode_strings(Value::Null).is_empty());
    }

    #[test]
    fn test_non_canonical_keys_are_normalised() {
        let questions: BTreeMap<ItemId, Question> =
            decode_entries(json!({ "01": { "text": "a", "answers": {} } }));
        let written = serde_json::to_value(&questions).unwrap();
        assert!(written.get("1").is_some());
        assert!(written.get("01").is_none());
    }
}
