//! PCG pseudo-random number generator.

use crate::base::*;

/// 1 - epsilon, the largest `Float` less than 1.
pub const ONE_MINUS_EPSILON: Float = hexf32!("0x1.fffffep-1");

const PCG32_DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;
const PCG32_MULT: u64 = 0x5851_f42d_4c95_7f2d;

/// Implements the PCG pseudo-random number generator.
#[derive(Clone)]
pub struct Rng {
    /// The RNG state.
    state: u64,

    /// Selects the output sequence.
    inc: u64,
}

impl Rng {
    /// Creates a new generator for a given sequence.
    ///
    /// * `seq_index` - The sequence index.
    pub fn new(seq_index: u64) -> Self {
        let mut rng = Self {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        };
        rng.set_sequence(seq_index);
        rng
    }

    /// Resets the generator to the start of a sequence.
    ///
    /// * `seq_index` - The sequence index.
    pub fn set_sequence(&mut self, seq_index: u64) {
        self.state = 0;
        self.inc = (seq_index << 1) | 1;
        self.uniform_u32();
        let (state, _) = self.state.overflowing_add(PCG32_DEFAULT_STATE);
        self.state = state;
        self.uniform_u32();
    }

    /// Returns a uniformly distributed `u32`.
    pub fn uniform_u32(&mut self) -> u32 {
        let old_state = self.state;

        let (mul, _) = old_state.overflowing_mul(PCG32_MULT);
        let (add, _) = mul.overflowing_add(self.inc);
        self.state = add;

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        (xor_shifted >> rot) | (xor_shifted << ((!rot).wrapping_add(1) & 31))
    }

    /// Returns a uniformly distributed `Float` in [0, 1).
    pub fn uniform_float(&mut self) -> Float {
        min(
            ONE_MINUS_EPSILON,
            self.uniform_u32() as Float * 2.328_306_4e-10,
        )
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
}
