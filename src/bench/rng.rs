//! Seeded 48-bit linear congruential generator.
//!
//! Uses the `java.util.Random` constants:
//! `state = (state * 0x5DEECE66D + 0xB) mod 2^48`, with the seed scrambled by
//! XOR against the multiplier. Output is reproducible for a given seed within
//! this crate; other generators will produce different arrays.

/// Deterministic PRNG used to build the base array.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    const MULTIPLIER: u64 = 0x5DEECE66D;
    const ADDEND: u64 = 0xB;
    const MASK: u64 = (1 << 48) - 1;

    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ Self::MULTIPLIER) & Self::MASK,
        }
    }

    /// Advance the state and return its top `bits` bits.
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::ADDEND)
            & Self::MASK;
        (self.state >> (48 - bits)) as u32
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Panics if `bound <= 0`.
    pub fn next_below(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");
        let bound = bound as u32;

        if bound.is_power_of_two() {
            return ((bound as u64 * self.next_bits(31) as u64) >> 31) as i32;
        }

        // Reject draws from the truncated top bucket so every residue is equally likely.
        loop {
            let bits = self.next_bits(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) < (1 << 31) {
                return val as i32;
            }
        }
    }
}
