//! Behavior profiles: what a scenario does across a whole fate space.

use crate::adventure::Adventure;
use crate::error::{Interruption, ProfileError, Scene, TheoryResult};
use crate::record::AdventureLog;
use augury_core::Fates;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One adventure log per explored fate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BehaviorProfile {
    /// Logs in fate order
    pub adventures: Vec<AdventureLog>,
}

impl BehaviorProfile {
    /// Create a profile from logs
    #[must_use]
    pub fn new(adventures: Vec<AdventureLog>) -> Self {
        Self { adventures }
    }

    /// Number of adventures profiled
    #[must_use]
    pub fn len(&self) -> usize {
        self.adventures.len()
    }

    /// Whether the profile is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adventures.is_empty()
    }

    /// Final answers in fate order
    #[must_use]
    pub fn answers(&self) -> Vec<&str> {
        self.adventures.iter().map(|log| log.answer.as_str()).collect()
    }

    /// Serialize to pretty-printed JSON, four-space indented
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, ProfileError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(|e| ProfileError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the profile to a file
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| ProfileError::IoError(e.to_string()))
    }

    /// Read a profile from a file
    ///
    /// # Errors
    ///
    /// Returns error if the read or deserialization fails
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let json = std::fs::read_to_string(path).map_err(|e| ProfileError::IoError(e.to_string()))?;
        Self::from_json(&json)
    }
}

/// Profile `scenario` across every fate of `fates`.
///
/// An assumption violation is recorded as the answer
/// `Violated assumption: <reason>` instead of aborting.
///
/// # Errors
///
/// Returns [`crate::TheoryError::Failed`] if the scenario fails
pub fn behavior_profile<F>(
    fates: &F,
    mut scenario: impl FnMut(&mut Adventure) -> Scene<String>,
) -> TheoryResult<BehaviorProfile>
where
    F: Fates + ?Sized,
{
    let mut adventures = Vec::new();
    for fate in fates.all_fates() {
        let mut adventure = Adventure::new(fate);
        let answer = match scenario(&mut adventure) {
            Ok(answer) => answer,
            Err(skip @ Interruption::Skip(_)) => skip.to_string(),
            Err(Interruption::Fail(cause)) => return Err(adventure.into_failure(cause)),
        };
        adventures.push(adventure.extract_log(answer));
    }
    tracing::debug!(adventures = adventures.len(), "behavior profile complete");
    Ok(BehaviorProfile::new(adventures))
}

/// Comparison of two behavior profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileComparison {
    /// Whether the profiles are identical
    pub identical: bool,
    /// Differences found
    pub deltas: Vec<ProfileDelta>,
}

/// A difference between two profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDelta {
    /// Adventure index where the difference occurred
    pub index: usize,
    /// What differed
    pub kind: DeltaKind,
    /// Value in the earlier profile
    pub expected: String,
    /// Value in the later profile
    pub actual: String,
}

/// Kind of profile difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaKind {
    /// Profiles hold different numbers of adventures
    AdventureCount,
    /// Same choices, different answer
    Answer,
    /// Different choices were made
    Choices,
}

impl ProfileComparison {
    /// Compare two profiles adventure by adventure
    #[must_use]
    pub fn compare(before: &BehaviorProfile, after: &BehaviorProfile) -> Self {
        let mut deltas = Vec::new();

        if before.len() != after.len() {
            deltas.push(ProfileDelta {
                index: before.len().min(after.len()),
                kind: DeltaKind::AdventureCount,
                expected: format!("{} adventures", before.len()),
                actual: format!("{} adventures", after.len()),
            });
        }

        for (index, (old, new)) in before.adventures.iter().zip(&after.adventures).enumerate() {
            if old.choices != new.choices {
                deltas.push(ProfileDelta {
                    index,
                    kind: DeltaKind::Choices,
                    expected: render_choices(old),
                    actual: render_choices(new),
                });
            } else if old.answer != new.answer {
                deltas.push(ProfileDelta {
                    index,
                    kind: DeltaKind::Answer,
                    expected: old.answer.clone(),
                    actual: new.answer.clone(),
                });
            }
        }

        Self {
            identical: deltas.is_empty(),
            deltas,
        }
    }

    /// Get delta count
    #[must_use]
    pub fn delta_count(&self) -> usize {
        self.deltas.len()
    }

    /// Get formatted delta report
    #[must_use]
    pub fn report(&self) -> String {
        if self.identical {
            return "Profiles are identical".to_string();
        }

        let mut report = format!("Found {} deltas:\n", self.deltas.len());
        for delta in &self.deltas {
            report.push_str(&format!(
                "  Adventure {}: {:?} - expected '{}', got '{}'\n",
                delta.index, delta.kind, delta.expected, delta.actual
            ));
        }
        report
    }
}

fn render_choices(log: &AdventureLog) -> String {
    log.choices
        .iter()
        .map(|choice| format!("{}={}", choice.question, choice.answer))
        .collect::<Vec<_>>()
        .join(", ")
}
