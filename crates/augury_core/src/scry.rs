//! Choice encodings built on [`Fate::scry_bit`].
//!
//! The bit layout of each encoding is part of the replay contract: a seed
//! that produced a value once must produce it again in every later version.

use crate::fate::Fate;

/// Fixed vocabulary used by [`Fate::scry_string`]
pub const VOCABULARY: [&str; 4] = ["Satsuki", "Mei", "Totoro", ""];

impl Fate {
    /// Choose an integer in `0..n` by recursive halving.
    ///
    /// The first bit read is the low-order bit of the result; the remaining
    /// bits choose among `ceil((n - low_bit) / 2)` values. Bounds of 0 and 1
    /// return 0 without consuming a bit.
    pub fn scry_int_less_than(&mut self, n: usize) -> usize {
        let mut bound = n;
        let mut value = 0;
        let mut shift = 0;
        while bound > 1 {
            let low_bit = usize::from(self.scry_bit());
            value |= low_bit << shift;
            shift += 1;
            // (bound + 1 - low_bit) / 2 without overflowing at usize::MAX
            bound = bound / 2 + (bound % 2) * (1 - low_bit);
        }
        value
    }

    /// Choose a boolean: one draw from `0..2`
    pub fn scry_boolean(&mut self) -> bool {
        self.scry_int_less_than(2) == 1
    }

    /// Choose a small natural number in unary: count 1-bits up to the first 0
    pub fn scry_small_natural(&mut self) -> usize {
        let mut count = 0;
        while self.scry_bit() == 1 {
            count += 1;
        }
        count
    }

    /// Choose one of `options`; `None` if there are no options
    pub fn scry_path<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        if options.is_empty() {
            return None;
        }
        options.get(self.scry_int_less_than(options.len()))
    }

    /// Choose a string from [`VOCABULARY`]
    pub fn scry_string(&mut self) -> &'static str {
        let index = self.scry_int_less_than(VOCABULARY.len());
        VOCABULARY[index]
    }
}
