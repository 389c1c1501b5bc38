//! Random source for probabilistic combat triggers.
//!
//! This module provides a trait-based RNG capability that the fighter model
//! and the duel engine consume for double-damage rolls, evasion rolls and the
//! opening coin toss.
//!
//! # Determinism
//!
//! Every implementation here is deterministic: given the same seed (or the same
//! script), it produces the same sequence. Duels can be replayed and tested
//! without a process-wide generator.

/// Uniform integer source consumed by the duel rules.
///
/// The contract is stateless (`[min, max)` uniform draws), while implementations
/// are free to keep state between calls.
pub trait RandomSource {
    /// Draws an integer uniformly distributed in `[min, max)`.
    ///
    /// Returns `min` when the range is empty.
    fn next_int(&mut self, min: i32, max: i32) -> i32;

    /// Percent trial: `next_int(1, 100) < percent`.
    ///
    /// With `percent = 50` this succeeds for 49 of the 99 possible rolls.
    fn chance(&mut self, percent: i32) -> bool {
        self.next_int(1, 100) < percent
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_int(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32-bit output.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed. Equal seeds yield equal sequences.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// Advances the LCG state: `state' = state * multiplier + increment`.
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output permutation over the pre-step state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generates the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

impl RandomSource for PcgRandom {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min)) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// Replays a fixed script of values, cycling when it runs out.
///
/// Each scripted value is clamped into the requested range, so a script of
/// `[99]` means "every percent trial fails" and `[1]` means "every trial
/// succeeds".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A script that always yields `value`.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Every percent trial fails (no specials, no evasion).
    pub fn never() -> Self {
        Self::constant(99)
    }

    /// Every percent trial succeeds.
    pub fn always() -> Self {
        Self::constant(1)
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max || self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRandom::new(42);
        let mut b = PcgRandom::new(42);
        let mut c = PcgRandom::new(43);

        let seq_a: Vec<i32> = (0..16).map(|_| a.next_int(1, 100)).collect();
        let seq_b: Vec<i32> = (0..16).map(|_| b.next_int(1, 100)).collect();
        let seq_c: Vec<i32> = (0..16).map(|_| c.next_int(1, 100)).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn pcg_stays_in_half_open_range() {
        let mut rng = PcgRandom::new(7);
        for _ in 0..1_000 {
            let value = rng.next_int(1, 3);
            assert!((1..3).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = PcgRandom::new(1);
        assert_eq!(rng.next_int(5, 5), 5);
        assert_eq!(rng.next_int(9, 2), 9);
    }

    #[test]
    fn scripted_values_cycle_and_clamp() {
        let mut rng = ScriptedRandom::new(vec![10, 250, -4]);
        assert_eq!(rng.next_int(1, 100), 10);
        assert_eq!(rng.next_int(1, 100), 99);
        assert_eq!(rng.next_int(1, 100), 1);
        assert_eq!(rng.next_int(1, 100), 10);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn chance_threshold_is_strictly_less_than() {
        assert!(ScriptedRandom::constant(49).chance(50));
        assert!(!ScriptedRandom::constant(50).chance(50));
        assert!(ScriptedRandom::always().chance(50));
        assert!(!ScriptedRandom::never().chance(50));
    }

    #[test]
    fn mutable_reference_forwards_draws() {
        fn draw(mut source: impl RandomSource) -> i32 {
            source.next_int(0, 10)
        }

        let mut rng = ScriptedRandom::new(vec![3, 4]);
        assert_eq!(draw(&mut rng), 3);
        assert_eq!(draw(&mut rng), 4);
        assert_eq!(rng.draws(), 2);
    }
}
