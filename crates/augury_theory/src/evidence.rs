//! Evidence: adventures that completed without skipping or failing.

use crate::adventure::Adventure;
use std::fmt;

/// Accumulated successful adventures of a theory run
#[derive(Debug, Default)]
pub struct Evidence {
    adventures: Vec<Adventure>,
}

impl Evidence {
    /// Create empty evidence
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain an adventure that completed normally
    pub fn log_successful_adventure(&mut self, adventure: Adventure) {
        self.adventures.push(adventure);
    }

    /// Whether any retained adventure satisfies `predicate`
    #[must_use]
    pub fn any_adventure(&self, predicate: impl Fn(&Adventure) -> bool) -> bool {
        self.adventures.iter().any(predicate)
    }

    /// Retained adventures, in the order they completed
    #[must_use]
    pub fn adventures(&self) -> &[Adventure] {
        &self.adventures
    }

    /// Number of retained adventures
    #[must_use]
    pub fn len(&self) -> usize {
        self.adventures.len()
    }

    /// Whether nothing was retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adventures.is_empty()
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, adventure) in self.adventures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{adventure}")?;
        }
        Ok(())
    }
}
