//! Theories: run a scenario against every fate of a source.

use crate::adventure::Adventure;
use crate::error::{Interruption, Scene, TheoryResult};
use crate::evidence::Evidence;
use augury_core::{Fate, Fates};

impl Evidence {
    /// Replay `scenario` once under `fate`.
    ///
    /// A completed adventure is retained and its value returned. An
    /// assumption violation discards the adventure and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TheoryError::Failed`] with the rendered adventure if
    /// the scenario fails
    pub fn go_on_adventure<T>(
        &mut self,
        fate: Fate,
        scenario: impl FnOnce(&mut Adventure) -> Scene<T>,
    ) -> TheoryResult<Option<T>> {
        let mut adventure = Adventure::new(fate);
        tracing::debug!(fate = %adventure.hint(), "starting adventure");

        match scenario(&mut adventure) {
            Ok(value) => {
                self.log_successful_adventure(adventure);
                Ok(Some(value))
            }
            Err(Interruption::Skip(reason)) => {
                tracing::debug!(fate = %adventure.hint(), %reason, "adventure skipped");
                Ok(None)
            }
            Err(Interruption::Fail(cause)) => {
                tracing::warn!(fate = %adventure.hint(), error = %cause, "adventure failed");
                Err(adventure.into_failure(cause))
            }
        }
    }
}

/// Run `scenario` against every fate `fates` yields.
///
/// Skipped adventures are dropped and exploration continues; the first
/// failure aborts the run.
///
/// # Errors
///
/// Returns [`crate::TheoryError::Failed`] for the first failing adventure
pub fn run_theory<F>(fates: &F, mut scenario: impl FnMut(&mut Adventure) -> Scene<()>) -> TheoryResult<Evidence>
where
    F: Fates + ?Sized,
{
    let mut evidence = Evidence::new();
    for fate in fates.all_fates() {
        evidence.go_on_adventure(fate, &mut scenario)?;
    }
    tracing::debug!(retained = evidence.len(), "theory complete");
    Ok(evidence)
}

/// Run `scenario` against a single fate
///
/// # Errors
///
/// Returns [`crate::TheoryError::Failed`] if the scenario fails
pub fn theory_from_fate(fate: Fate, scenario: impl FnMut(&mut Adventure) -> Scene<()>) -> TheoryResult<Evidence> {
    run_theory(&fate.as_fates(), scenario)
}
