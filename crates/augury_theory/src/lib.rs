//! AUGURY Theories
//!
//! Runs scenarios against every fate of a [`augury_core::Fates`] source,
//! recording each replay as an [`Adventure`]. Failures carry the full
//! adventure that produced them, so the reproducing choices are visible
//! without re-running anything.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adventure;
pub mod converge;
pub mod error;
pub mod evidence;
pub mod profile;
pub mod record;
pub mod theory;

pub use adventure::Adventure;
pub use converge::converge;
pub use error::{CandidateResult, Interruption, ProfileError, Scene, TheoryError, TheoryResult};
pub use evidence::Evidence;
pub use profile::{BehaviorProfile, DeltaKind, ProfileComparison, ProfileDelta, behavior_profile};
pub use record::{AdventureLog, Choice};
pub use theory::{run_theory, theory_from_fate};
