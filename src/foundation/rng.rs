use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform unit samples.
///
/// Every procedural parameter in the scene is drawn through this trait so generation can be
/// replayed from a seed or scripted outright.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// `a + u * (b - a)`. Reversed ranges (`b < a`) are allowed and sample `(b, a]`.
    fn uniform(&mut self, a: f64, b: f64) -> f64 {
        a + self.next_unit() * (b - a)
    }

    /// `floor(uniform(a, b))`, for integer-valued parameters such as petal counts.
    fn uniform_int(&mut self, a: u32, b: u32) -> u32 {
        let v = self.uniform(f64::from(a), f64::from(b)).floor();
        // A unit sample is strictly below 1, but guard the upper bound against rounding.
        (v as u32).min(b.saturating_sub(1).max(a))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seedable generator backed by [`StdRng`].
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    /// Deterministic generator for a given seed.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Replays a fixed list of unit samples, wrapping around at the end.
///
/// Values are clamped into `[0, 1)` on construction. An empty list yields `0.0` forever.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// Build from explicit samples.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Single value repeated forever.
    pub fn constant(v: f64) -> Self {
        Self::new([v])
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
