//! The Fate protocol: deterministic bit sources with identity.

use crate::frontier::Frontier;
use std::fmt;

/// A deterministic source of bits answering a scenario's binary questions.
///
/// Bits are consumed in strict order and never revisited. Two replays of
/// the same origin (seed or tree mask) yield the same bit sequence.
#[derive(Debug)]
pub enum Fate {
    /// Bits taken from an integer seed, least-significant first
    Seeded(SeededFate),
    /// Bits taken from an exploration mask, discovering siblings as it goes
    Tree(TreeFate),
}

impl Fate {
    /// Create an integer-seeded fate
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(SeededFate::new(seed))
    }

    /// Produce the next bit (0 or 1)
    pub fn scry_bit(&mut self) -> u8 {
        match self {
            Self::Seeded(fate) => fate.scry_bit(),
            Self::Tree(fate) => fate.scry_bit(),
        }
    }

    /// Produce an independent copy starting again from this fate's origin.
    ///
    /// A tree fate's copy keeps feeding the same exploration frontier.
    #[must_use]
    pub fn fresh_copy(&self) -> Self {
        match self {
            Self::Seeded(fate) => Self::Seeded(fate.fresh_copy()),
            Self::Tree(fate) => Self::Tree(fate.fresh_copy()),
        }
    }

    /// Short identifier for diagnostics, e.g. `intFate(37)` or `treeFate(5)`
    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            Self::Seeded(fate) => fate.hint(),
            Self::Tree(fate) => fate.hint(),
        }
    }
}

impl fmt::Display for Fate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint())
    }
}

/// Fate replaying the bits of an integer seed.
///
/// Bit `i` is bit `i` of the seed; once the seed is exhausted every further
/// bit is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededFate {
    seed: u64,
    remaining: u64,
}

impl SeededFate {
    /// Create a fate from a seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            remaining: seed,
        }
    }

    /// The seed this fate replays
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Produce the next bit
    pub fn scry_bit(&mut self) -> u8 {
        let bit = (self.remaining & 1) as u8;
        self.remaining >>= 1;
        bit
    }

    /// Restart from the seed, not the current position
    #[must_use]
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.seed)
    }

    /// Diagnostic identifier
    #[must_use]
    pub fn hint(&self) -> String {
        format!("intFate({})", self.seed)
    }
}

/// Fate replaying an exploration mask.
///
/// Position `i` answers 1 iff bit `i` of `bit_source` is set. Each time the
/// scenario reaches a new highest position that answers 0, the sibling mask
/// with that bit set is offered to the shared [`Frontier`], as long as the
/// mask still has fewer than `max_bits` ones.
#[derive(Debug, Clone)]
pub struct TreeFate {
    bit_source: u64,
    max_bits: u32,
    position: u32,
    frontier: Frontier,
}

impl TreeFate {
    /// Create a tree fate for a mask, feeding discoveries into `frontier`
    #[must_use]
    pub fn new(bit_source: u64, max_bits: u32, frontier: Frontier) -> Self {
        Self {
            bit_source,
            max_bits,
            position: 0,
            frontier,
        }
    }

    /// The mask this fate replays
    #[must_use]
    pub fn bit_source(&self) -> u64 {
        self.bit_source
    }

    /// The frontier this fate reports discoveries to
    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Produce the next bit, offering the sibling branch when one exists.
    ///
    /// Masks are 64 bits wide; positions past the last bit answer 0 and
    /// discover nothing.
    pub fn scry_bit(&mut self) -> u8 {
        let Some(mask) = 1u64.checked_shl(self.position) else {
            return 0;
        };
        self.position += 1;

        let bit = u8::from(self.bit_source & mask != 0);
        if bit == 0 && mask > self.bit_source && self.bit_source.count_ones() < self.max_bits {
            let sibling = self.bit_source | mask;
            if self.frontier.offer(sibling) {
                tracing::trace!(from = self.bit_source, sibling, "discovered tree branch");
            }
        }
        bit
    }

    /// Restart from the same mask, sharing the same frontier
    #[must_use]
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.bit_source, self.max_bits, self.frontier.clone())
    }

    /// Diagnostic identifier
    #[must_use]
    pub fn hint(&self) -> String {
        format!("treeFate({})", self.bit_source)
    }
}
