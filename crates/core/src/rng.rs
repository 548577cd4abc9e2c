//! RNG module - seeded uniform draws for the fire simulation
//!
//! The simulation consumes independent uniform samples in `[0, 1)`. Drawing
//! them through a small trait keeps the engine deterministic under a fixed
//! seed and lets tests script exact sequences.

/// Source of independent uniform samples in `[0, 1)`.
pub trait UniformSource {
    /// Draw the next sample. Must lie in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock, for interactive runs.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state, usable as a seed to replay from here.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for SimpleRng {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits: the low bits of an LCG are weak, and 24 bits fit an f32
        // mantissa exactly so the result never rounds up to 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Useful for forcing specific wind offsets or flare outcomes.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "ScriptedRng needs at least one value");
        Self { values, pos: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl UniformSource for ScriptedRng {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_unit(), rng2.next_unit());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_unit_samples_stay_in_half_open_range() {
        let mut rng = SimpleRng::new(7);
        let mut lo = 1.0f32;
        let mut hi = 0.0f32;
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "sample out of range: {}", v);
            lo = lo.min(v);
            hi = hi.max(v);
        }
        // Crude spread check: a healthy generator covers most of the interval.
        assert!(lo < 0.01);
        assert!(hi > 0.99);
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
    }
}
