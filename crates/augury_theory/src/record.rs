//! Serializable records of adventures.

use serde::{Deserialize, Serialize};

/// One labeled choice: the question asked and the answer given
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Question text
    #[serde(rename = "first")]
    pub question: String,
    /// Answer as rendered when the choice was made
    #[serde(rename = "second")]
    pub answer: String,
}

impl Choice {
    /// Create a choice
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Immutable snapshot of an adventure's choices and its final answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdventureLog {
    /// Choices in the order they were made
    pub choices: Vec<Choice>,
    /// Final answer
    pub answer: String,
}

impl AdventureLog {
    /// Create a log
    #[must_use]
    pub fn new(choices: Vec<Choice>, answer: impl Into<String>) -> Self {
        Self {
            choices,
            answer: answer.into(),
        }
    }

    /// Number of choices made
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_choice_serializes_as_pair() {
        let choice = Choice::new("Another?", "true");
        let json = serde_json::to_string(&choice).unwrap();
        assert_eq!(json, r#"{"first":"Another?","second":"true"}"#);
    }

    #[test]
    fn test_adventure_log_shape() {
        let log = AdventureLog::new(vec![Choice::new("Who?", "Satsuki")], "Satsuki");
        let json = log.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"choices":[{"first":"Who?","second":"Satsuki"}],"answer":"Satsuki"}"#
        );
        assert_eq!(log.choice_count(), 1);
    }

    #[test]
    fn test_adventure_log_rejects_missing_answer() {
        assert!(AdventureLog::from_json(r#"{"choices":[]}"#).is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_adventure_log_json_roundtrip(
            pairs in proptest::collection::vec((".*", ".*"), 0..8),
            answer in ".*"
        ) {
            let choices = pairs.into_iter().map(|(q, a)| Choice::new(q, a)).collect();
            let log = AdventureLog::new(choices, answer);
            let restored = AdventureLog::from_json(&log.to_json().unwrap()).unwrap();
            prop_assert_eq!(restored, log);
        }
    }
}
