//! Randomness providers for catalog selection.
//!
//! The catalog never reaches for a global generator. It is handed a
//! [`RandomSource`] at construction so production code can use a seeded
//! [`SeededRandom`] while tests plug in a [`FixedSequence`].

use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A port that supplies uniformly distributed indices.
///
/// Implementations are shared by every in-flight request, so they must be
/// safe for concurrent use.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is always greater than zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// A [`RandomSource`] backed by a single mutex-guarded [`StdRng`].
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Seeds the generator once from the current wall-clock time.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    /// Seeds the generator with a fixed value; identical seeds replay
    /// identical picks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..len)
    }
}

/// A deterministic [`RandomSource`] that cycles through a fixed list.
///
/// Each value is reduced modulo `len`, so the same sequence works for any
/// catalog size.
#[derive(Debug)]
pub struct FixedSequence {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl FixedSequence {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for FixedSequence {
    fn pick_index(&self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[i] % len
    }
}
