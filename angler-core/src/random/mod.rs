pub mod legacy_rand;

pub use legacy_rand::LegacyRand;

/// A deterministic, seedable random source.
///
/// Gameplay code takes `&mut impl RandomImpl` so tests can drive it with a
/// fixed seed and assert exact outcomes.
pub trait RandomImpl {
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    fn next_i32(&mut self) -> i32;

    fn next_bounded_i32(&mut self, bound: i32) -> i32;

    fn next_inbetween_i32(&mut self, min: i32, max: i32) -> i32 {
        self.next_bounded_i32(max - min + 1) + min
    }

    fn next_i64(&mut self) -> i64;

    fn next_bool(&mut self) -> bool;

    fn next_f32(&mut self) -> f32;

    fn next_f64(&mut self) -> f64;

    fn skip(&mut self, count: i32) {
        for _ in 0..count {
            self.next_i64();
        }
    }
}
