/// Xorshift32 generator: small, fast and reproducible from a seed.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// A zero seed would lock the generator at zero, so it is remapped.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 12345 } else { seed } }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in `[0, 1)`
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Uniform in `[min, max)`; returns `min` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.next_f32() * (max - min)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift32::new(42);
        let mut b = XorShift32::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = XorShift32::new(7);
        for _ in 0..10_000 {
            let v = rng.uniform(-4.0, 4.0);
            assert!((-4.0..4.0).contains(&v));
        }
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
