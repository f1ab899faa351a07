//! Locking helpers for sharing a randomness source between games.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "std")]
pub(crate) struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) use spin::Mutex;

/// A randomness source that several games can draw from.
///
/// Games take `&mut R` for every randomized operation and never serialize
/// access themselves. Wrapping one generator in a `SharedRng` and passing
/// `&mut &shared` lets callers on different threads draw from it in turn.
///
/// # Example
///
/// ```
/// use bingors::SharedRng;
/// use rand::Rng;
///
/// let shared = SharedRng::seeded(7);
/// let mut handle = &shared;
/// let roll: u8 = handle.random_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
pub struct SharedRng<R> {
    rng: Mutex<R>,
}

impl<R: RngCore> SharedRng<R> {
    /// Wraps a generator.
    pub const fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut *self.rng.lock())
    }
}

impl SharedRng<ChaCha8Rng> {
    /// Creates a shared `ChaCha8` generator from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RngCore for &SharedRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.lock().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.lock().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.lock().fill_bytes(dest);
    }
}
