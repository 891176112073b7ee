//! C library `rand()` generator - Rust port
//!
//! Bit-exact with glibc `srand`/`rand` (the TYPE_3 additive feedback
//! generator), so a seed produces the same dataset a C driver would.

use crate::ValueSource;

/// Largest value `rand()` can return.
pub const RAND_MAX: i32 = 0x7fff_ffff;

/// Degree of the feedback polynomial (x^31 + x^3 + 1)
const DEG: usize = 31;
/// Separation between the front and rear taps
const SEP: usize = 3;
/// Outputs thrown away after seeding (`10 * DEG`)
const WARMUP: usize = DEG * 10;

/// glibc-compatible `rand()` state.
#[derive(Debug, Clone)]
pub struct GlibcRand {
    state: [i32; DEG],
    front: usize,
    rear: usize,
    seed: u32,
    calls: u64,
}

impl GlibcRand {
    /// Seed the generator (matches `srand(seed)`).
    ///
    /// A seed of 0 is treated as 1, like the C library does.
    pub fn new(seed: u32) -> Self {
        let effective = if seed == 0 { 1 } else { seed };

        let mut state = [0i32; DEG];
        state[0] = effective as i32;

        // state[i] = 16807 * state[i - 1] % (2^31 - 1), Schrage's method
        let mut word = state[0] as i64;
        for slot in state.iter_mut().skip(1) {
            let hi = word / 127_773;
            let lo = word % 127_773;
            word = 16_807 * lo - 2_836 * hi;
            if word < 0 {
                word += 2_147_483_647;
            }
            *slot = word as i32;
        }

        let mut rng = Self {
            state,
            front: SEP,
            rear: 0,
            seed,
            calls: 0,
        };
        for _ in 0..WARMUP {
            rng.step();
        }
        rng.calls = 0;
        rng
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next value in `[0, RAND_MAX]` (matches `rand()`).
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.calls += 1;
        self.step()
    }

    fn step(&mut self) -> i32 {
        let sum = (self.state[self.front] as u32).wrapping_add(self.state[self.rear] as u32);
        self.state[self.front] = sum as i32;

        self.front += 1;
        if self.front >= DEG {
            self.front = 0;
            self.rear += 1;
        } else {
            self.rear += 1;
            if self.rear >= DEG {
                self.rear = 0;
            }
        }

        (sum >> 1) as i32
    }
}

impl ValueSource for GlibcRand {
    fn next_value(&mut self) -> i32 {
        self.next_i32()
    }

    fn calls(&self) -> u64 {
        self.calls
    }
}
