//! Fate sources: lazy sequences of fates to replay.

use crate::config::ExploreConfig;
use crate::fate::{Fate, TreeFate};
use crate::frontier::Frontier;

/// Boxed iterator of fates
pub type FateIter<'a> = Box<dyn Iterator<Item = Fate> + 'a>;

/// A source of fates.
///
/// Each call to [`Fates::all_fates`] restarts the sequence from scratch.
/// Sequences may be finite or unbounded; the consumer pulls one fate at a
/// time and finishes replaying it before asking for the next.
pub trait Fates {
    /// Every fate this source yields, in order
    fn all_fates(&self) -> FateIter<'_>;
}

/// Breadth-first exploration of every distinguishable bit prefix.
///
/// Terminates once the frontier empties, which `max_bits` guarantees only if
/// the scenario stops reading bits after finitely many zeros. A scenario that
/// keeps reading forever never terminates unless a fate limit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeExploration {
    config: ExploreConfig,
}

impl TreeExploration {
    /// Create an exploration from a config
    #[must_use]
    pub fn new(config: ExploreConfig) -> Self {
        Self { config }
    }

    /// The exploration config
    #[must_use]
    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }
}

impl Fates for TreeExploration {
    fn all_fates(&self) -> FateIter<'_> {
        Box::new(TreeFateIter {
            frontier: Frontier::rooted(),
            max_bits: self.config.max_bits,
            remaining: self.config.limit(),
        })
    }
}

/// Explore every prefix with at most `max_bits` ones
#[must_use]
pub fn explore_tree_fates(max_bits: u32) -> TreeExploration {
    TreeExploration::new(ExploreConfig::new(max_bits))
}

struct TreeFateIter {
    frontier: Frontier,
    max_bits: u32,
    remaining: Option<usize>,
}

impl Iterator for TreeFateIter {
    type Item = Fate;

    fn next(&mut self) -> Option<Fate> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                tracing::debug!(pending = self.frontier.len(), "fate limit reached");
                return None;
            }
            *remaining -= 1;
        }
        let bit_source = self.frontier.pop()?;
        Some(Fate::Tree(TreeFate::new(bit_source, self.max_bits, self.frontier.clone())))
    }
}

/// Integer-seeded fates `0..=upto`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFates {
    upto: u64,
}

impl IntFates {
    /// Create a source yielding seeds `0..=upto`
    #[must_use]
    pub fn new(upto: u64) -> Self {
        Self { upto }
    }
}

impl Fates for IntFates {
    fn all_fates(&self) -> FateIter<'_> {
        Box::new((0..=self.upto).map(Fate::seeded))
    }
}

/// Every integer seed from 0 to `upto` inclusive
#[must_use]
pub fn fates_to(upto: u64) -> IntFates {
    IntFates::new(upto)
}

/// A single fate, replayed fresh on every pass
#[derive(Debug)]
pub struct SingleFate(Fate);

impl Fates for SingleFate {
    fn all_fates(&self) -> FateIter<'_> {
        Box::new(std::iter::once(self.0.fresh_copy()))
    }
}

impl Fate {
    /// Wrap this fate as a one-element source
    #[must_use]
    pub fn as_fates(self) -> SingleFate {
        SingleFate(self)
    }
}
