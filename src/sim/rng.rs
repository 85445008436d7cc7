//! Seeded random source for level generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic stream of floats in `[0, 1)` derived from a 32-bit seed
///
/// Re-seeding (building a new `SeededRng` with the same seed) restarts the
/// stream from the beginning.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u32,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(u64::from(seed)),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next value in `[0, 1)`
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Next value in `[min, max)`
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_f32().to_bits(), b.next_f32().to_bits());
        }
    }

    #[test]
    fn test_different_seed_diverges() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let same = (0..16).filter(|_| a.next_f32() == b.next_f32()).count();
        assert!(same < 16);
    }

    #[test]
    fn test_round_seed_stream_is_pinned() {
        // Layouts are only reproducible while these stay fixed
        let mut rng = SeededRng::new(20_260_212);
        let expected = [0x3f6b_ab98_u32, 0x3f07_f5de, 0x3f1e_2fa2, 0x3f6b_a9a3];
        for bits in expected {
            assert_eq!(rng.next_f32().to_bits(), bits);
        }
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = SeededRng::new(20_260_212);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
