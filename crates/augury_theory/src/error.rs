//! Error types for theories and scenarios.

use std::fmt;

/// Result type returned by scenario code
pub type Scene<T> = Result<T, Interruption>;

/// Result type for theory entry points
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Why a scenario stopped before producing a value
#[derive(Debug, thiserror::Error)]
pub enum Interruption {
    /// The current branch is out of scope; not a failure
    #[error("Violated assumption: {0}")]
    Skip(String),
    /// The scenario failed
    #[error(transparent)]
    Fail(#[from] anyhow::Error),
}

impl Interruption {
    /// Mark the current branch as inapplicable
    #[must_use]
    pub fn skip(reason: impl Into<String>) -> Self {
        Self::Skip(reason.into())
    }

    /// Fail the scenario with a message
    #[must_use]
    pub fn fail(message: impl fmt::Display + fmt::Debug + Send + Sync + 'static) -> Self {
        Self::Fail(anyhow::Error::msg(message))
    }

    /// Whether this is an assumption violation
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

/// One candidate's outcome under a convergence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResult {
    /// Position of the candidate in the candidate list
    pub index: usize,
    /// Final result string
    pub result: String,
    /// Rendered adventure the candidate went on
    pub adventure: String,
}

impl fmt::Display for CandidateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate {} => {}\n{}", self.index, self.result, self.adventure)
    }
}

/// Errors raised by theory entry points
#[derive(Debug, thiserror::Error)]
pub enum TheoryError {
    /// A scenario failed; the message is the full rendered adventure
    #[error("{adventure}")]
    Failed {
        /// Rendered adventure of the failing replay
        adventure: String,
        /// Original failure
        #[source]
        source: anyhow::Error,
    },
    /// Candidates produced different results for the same fate
    #[error("candidates diverged under {hint}:\n{}", render_candidates(.results))]
    Diverged {
        /// Hint of the fate the candidates disagreed under
        hint: String,
        /// Every candidate's result, in candidate order
        results: Vec<CandidateResult>,
    },
}

fn render_candidates(results: &[CandidateResult]) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors reading or writing behavior profiles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
