//! Differential execution: every candidate must agree under every fate.

use crate::adventure::Adventure;
use crate::error::{CandidateResult, Interruption, Scene, TheoryError, TheoryResult};
use crate::evidence::Evidence;
use augury_core::Fates;
use std::collections::BTreeSet;

/// Run `scenario` once per candidate under every fate, requiring identical
/// results.
///
/// Each candidate replays its own fresh copy of the current fate, so all
/// candidates see the same bits in the same order; a candidate that reads a
/// different number of bits generally diverges. An assumption violation is
/// that candidate's result (`Violated assumption: <reason>`), so candidates
/// must also agree on which branches they skip. Completed adventures are
/// retained in the returned evidence.
///
/// # Errors
///
/// Returns [`TheoryError::Diverged`] listing every candidate's result when
/// they disagree, or [`TheoryError::Failed`] if a candidate fails
pub fn converge<F, C>(
    fates: &F,
    candidates: &mut [C],
    mut scenario: impl FnMut(&mut Adventure, &mut C) -> Scene<String>,
) -> TheoryResult<Evidence>
where
    F: Fates + ?Sized,
{
    let mut evidence = Evidence::new();

    for fate in fates.all_fates() {
        let mut results = Vec::with_capacity(candidates.len());

        for (index, candidate) in candidates.iter_mut().enumerate() {
            let mut adventure = Adventure::new(fate.fresh_copy());
            let (result, completed) = match scenario(&mut adventure, candidate) {
                Ok(result) => (result, true),
                Err(Interruption::Skip(reason)) => (Interruption::Skip(reason).to_string(), false),
                Err(Interruption::Fail(cause)) => return Err(adventure.into_failure(cause)),
            };
            results.push(CandidateResult {
                index,
                result,
                adventure: adventure.render(),
            });
            if completed {
                evidence.log_successful_adventure(adventure);
            }
        }

        let distinct: BTreeSet<&str> = results.iter().map(|r| r.result.as_str()).collect();
        if distinct.len() > 1 {
            tracing::warn!(fate = %fate, distinct = distinct.len(), "candidates diverged");
            return Err(TheoryError::Diverged {
                hint: fate.hint(),
                results,
            });
        }
    }

    Ok(evidence)
}
