use std::sync::atomic::{AtomicU64, Ordering};

/// Candidate-order randomness for the search.
///
/// A small PCG-style generator seeded through `getrandom`, which keeps the
/// engine off the `rand` crate and portable to WASM targets. Use
/// [`Rng::with_seed`] when a run has to be reproducible.
#[derive(Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        let mut bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            // No OS entropy on this target; fall back to a process-local
            // counter so successive generators still diverge.
            Err(_) => {
                static FALLBACK: AtomicU64 = AtomicU64::new(0x5eed);
                FALLBACK.fetch_add(0x9e37_79b9_7f4a_7c15, Ordering::Relaxed)
            }
        };
        Self::with_seed(seed)
    }

    /// A generator with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// PCG-XSH-RR step with the reference multiplier and increment.
    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        u64::from(xorshifted.rotate_right(rot))
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }

    /// The digits 1-9 in fresh random order.
    pub fn digit_permutation(&mut self) -> [u8; 9] {
        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut digits);
        digits
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}
