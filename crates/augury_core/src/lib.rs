//! AUGURY Core
//!
//! The choice-exploration engine underneath every AUGURY theory.
//! A [`Fate`] answers a running scenario one bit at a time; a [`Fates`]
//! source yields the Fates an exploration should replay. Every Fate is
//! deterministic: replaying the same origin yields the same bits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod fate;
pub mod frontier;
pub mod scry;
pub mod source;

// Re-exports
pub use config::ExploreConfig;
pub use fate::{Fate, SeededFate, TreeFate};
pub use frontier::Frontier;
pub use scry::VOCABULARY;
pub use source::{FateIter, Fates, IntFates, SingleFate, TreeExploration, explore_tree_fates, fates_to};
