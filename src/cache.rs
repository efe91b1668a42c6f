//! # Value Cache
//!
//! Precomputed value sequences reused across trials of the same size.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────┐
//!   │                        ValuePool<T>                               │
//!   │                                                                   │
//!   │   ┌──────────────────────────┐   ┌──────────────────────────────┐ │
//!   │   │ ascending: ValueCache<T> │   │ shuffled: ValueCache<T>      │ │
//!   │   │  [0, 1, 2, ..., n-1]     │   │  permutation of [0, n)       │ │
//!   │   │  (backup setups)         │   │  (random fills)              │ │
//!   │   └──────────────────────────┘   └──────────────────────────────┘ │
//!   └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two arrangements never share storage: a setup that needs ordered
//! values and one that needs a permutation must not observe each other's
//! regeneration.
//!
//! ## Reuse Rule
//!
//! | Consumer kind         | Stored length == size | Result        |
//! |-----------------------|-----------------------|---------------|
//! | has native size       | yes                   | reuse         |
//! | has native size       | no                    | regenerate    |
//! | no native size        | either                | regenerate    |
//!
//! Regeneration rebuilds `0..size` through [`push_value`] on the cache
//! vector and, for the shuffled arrangement, shuffles it with a freshly
//! seeded [`StdRng`], so every regeneration of the same size yields the same
//! permutation.
//!
//! `clean()` releases the storage: both length and capacity return to zero.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::element::{Element, type_label};
use crate::traits::{SequenceContainer, push_value};

/// Default shuffle seed (the default seed of the Mersenne Twister).
pub const DEFAULT_SEED: u64 = 5489;

/// How a cache lays out `0..size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    Ascending,
    Shuffled { seed: u64 },
}

/// Counters describing how a cache was used.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub requests: u64,
    pub reuses: u64,
    pub regenerations: u64,
    pub cleans: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

/// An ordered run of values that survives across trials.
#[derive(Debug)]
pub struct ValueCache<T> {
    values: Vec<T>,
    arrangement: Arrangement,
    requests: u64,
    reuses: u64,
    regenerations: u64,
    cleans: u64,
}

impl<T: Element> ValueCache<T> {
    /// Creates an empty cache that generates `0..size` in order.
    pub fn ascending() -> Self {
        Self::with_arrangement(Arrangement::Ascending)
    }

    /// Creates an empty cache that generates a seeded permutation of `0..size`.
    pub fn shuffled(seed: u64) -> Self {
        Self::with_arrangement(Arrangement::Shuffled { seed })
    }

    fn with_arrangement(arrangement: Arrangement) -> Self {
        Self {
            values: Vec::new(),
            arrangement,
            requests: 0,
            reuses: 0,
            regenerations: 0,
            cleans: 0,
        }
    }

    /// Returns the values for `size`, regenerating them when stale for `C`.
    pub fn make<C>(&mut self, size: usize) -> &[T]
    where
        C: SequenceContainer<Item = T>,
    {
        self.requests += 1;
        let stale = !C::CAPS.has_native_size || self.values.len() != size;
        if stale {
            self.regenerate(size);
        } else {
            self.reuses += 1;
        }
        &self.values
    }

    fn regenerate(&mut self, size: usize) {
        self.regenerations += 1;
        self.values.clear();
        self.values.reserve(size);
        for key in 0..size {
            push_value(&mut self.values, T::from_key(key));
        }
        if let Arrangement::Shuffled { seed } = self.arrangement {
            let mut rng = StdRng::seed_from_u64(seed);
            self.values.shuffle(&mut rng);
        }
        let element = type_label::<T>();
        debug!(
            event = "cache_regenerate",
            element = %element,
            arrangement = ?self.arrangement,
            size,
        );
    }

    /// Current contents, without any staleness check.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    /// Releases the storage.
    pub fn clean(&mut self) {
        self.cleans += 1;
        self.values = Vec::new();
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            requests: self.requests,
            reuses: self.reuses,
            regenerations: self.regenerations,
            cleans: self.cleans,
            len: self.values.len(),
            capacity: self.values.capacity(),
        }
    }
}

/// The two caches owned per element type.
#[derive(Debug)]
pub struct ValuePool<T> {
    ascending: ValueCache<T>,
    shuffled: ValueCache<T>,
}

impl<T: Element> ValuePool<T> {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a pool whose shuffled cache uses `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            ascending: ValueCache::ascending(),
            shuffled: ValueCache::shuffled(seed),
        }
    }

    #[inline]
    pub fn ascending(&self) -> &ValueCache<T> {
        &self.ascending
    }

    #[inline]
    pub fn ascending_mut(&mut self) -> &mut ValueCache<T> {
        &mut self.ascending
    }

    #[inline]
    pub fn shuffled(&self) -> &ValueCache<T> {
        &self.shuffled
    }

    #[inline]
    pub fn shuffled_mut(&mut self) -> &mut ValueCache<T> {
        &mut self.shuffled
    }

    /// Releases both caches.
    pub fn clean(&mut self) {
        self.ascending.clean();
        self.shuffled.clean();
    }
}

impl<T: Element> Default for ValuePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
