use crate::foundation::math::lerp;

/// Seeded pseudo-random stream driving every choice in a generated scene.
///
/// Mulberry32: 32-bit integer state advanced by a Weyl increment and finalized with
/// xor-shift/multiply mixing. The output is a pure function of the seed and the number of prior
/// draws, so each scene owns its stream. Not `Clone`: one live stream per scene.
#[derive(Debug)]
pub struct SceneRng {
    state: u32,
}

impl SceneRng {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Create a stream from a seed. Every `u32` is a valid seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the next 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform `f64` between `lo` and `hi` (one draw).
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lerp(lo, hi, self.next_f64())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/rng.rs"]
mod tests;
