//! Randomness behind the simulated outcomes

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform draws and random bytes
pub trait RandomSource: Send {
    /// Uniform draw in [0, 1)
    fn next_unit(&mut self) -> f64;

    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// True when `draw` lands in the success band of a `success_probability` roll.
///
/// Low draws fail, so a draw below `1 - p` is the failure branch.
pub fn roll(draw: f64, success_probability: f64) -> bool {
    draw >= 1.0 - success_probability
}

/// `StdRng`-backed source, reproducible when seeded
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

/// Replays a fixed list of draws, then repeats `fallback`
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
    byte: u8,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.5,
            byte: 0,
        }
    }

    /// Every draw returns `value`
    pub fn constant(value: f64) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: value,
            byte: 0,
        }
    }

    pub fn push(&mut self, draw: f64) {
        self.draws.push_back(draw);
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // Counting bytes keep successive hashes distinct
        for b in dest.iter_mut() {
            *b = self.byte;
            self.byte = self.byte.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_thresholds() {
        assert!(!roll(0.19, 0.8));
        assert!(roll(0.2, 0.8));
        assert!(!roll(0.05, 0.9));
        assert!(roll(0.1, 0.9));
        assert!(roll(0.0, 1.0));
        assert!(!roll(0.999, 0.0));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..10 {
            let x = a.next_unit();
            assert_eq!(x, b.next_unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_scripted_replays_then_falls_back() {
        let mut r = ScriptedRandom::new([0.1, 0.9]);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.next_unit(), 0.9);
        assert_eq!(r.next_unit(), 0.5);

        let mut bytes = [0u8; 4];
        r.fill_bytes(&mut bytes);
        assert_eq!(bytes, [0, 1, 2, 3]);
    }
}
