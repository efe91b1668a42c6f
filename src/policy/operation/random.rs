//! Randomized policies.
//!
//! Each policy owns its generator. The generator is seeded once when the
//! policy is built and keeps advancing across every trial the policy runs,
//! so consecutive sizes of one benchmark see different draws while two runs
//! of the whole benchmark see identical ones.
//!
//! ## RandomErase thresholds
//!
//! The erase probability is stored in units of 1/10 000. Each element draws
//! uniformly from `0..10_000` and is erased when the draw falls below the
//! threshold.
//!
//! | Constructor       | Threshold | Probability |
//! |-------------------|-----------|-------------|
//! | `one_percent()`   | 100       | 0.01        |
//! | `ten_percent()`   | 1 000     | 0.10        |
//! | `quarter()`       | 2 500     | 0.25        |
//! | `half()`          | 5 000     | 0.50        |
//! | `try_new(p)`      | ⌊p·10⁴⌉   | p           |

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cache::{DEFAULT_SEED, ValuePool};
use crate::element::Element;
use crate::error::ConfigError;
use crate::traits::{Outcome, SequenceContainer};

use super::Operation;

const SCALE: u32 = 10_000;

/// Inserts `size` random keys, each before the first element whose key is
/// not smaller, keeping an initially sorted container sorted.
pub struct RandomSortedInsert {
    rng: StdRng,
}

impl RandomSortedInsert {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSortedInsert {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomSortedInsert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSortedInsert").finish_non_exhaustive()
    }
}

impl<C: SequenceContainer> Operation<C, C::Item> for RandomSortedInsert {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_random_insert
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_random_insert {
            return Outcome::NotApplicable;
        }
        for _ in 0..size {
            let key = self.rng.random_range(0..usize::MAX);
            let index = container
                .iter()
                .position(|value| value.key() >= key)
                .unwrap_or_else(|| container.len());
            let _ = container.insert_at(index, C::Item::from_key(key));
        }
        Outcome::Applied
    }
}

/// Single pass that erases each element independently with a fixed
/// probability.
pub struct RandomErase {
    erase_per_10k: u32,
    rng: StdRng,
}

impl RandomErase {
    fn with_threshold(erase_per_10k: u32) -> Self {
        Self {
            erase_per_10k,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
        }
    }

    pub fn one_percent() -> Self {
        Self::with_threshold(100)
    }

    pub fn ten_percent() -> Self {
        Self::with_threshold(1_000)
    }

    pub fn quarter() -> Self {
        Self::with_threshold(2_500)
    }

    pub fn half() -> Self {
        Self::with_threshold(5_000)
    }

    /// Builds a policy erasing with probability `probability`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProbability`] when `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn try_new(probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability(probability));
        }
        let threshold = (probability * f64::from(SCALE)).round() as u32;
        Ok(Self::with_threshold(threshold))
    }

    /// Reseeds the generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Per-element erase probability.
    pub fn probability(&self) -> f64 {
        f64::from(self.erase_per_10k) / f64::from(SCALE)
    }
}

impl fmt::Debug for RandomErase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomErase")
            .field("probability", &self.probability())
            .finish_non_exhaustive()
    }
}

impl<C: SequenceContainer> Operation<C, C::Item> for RandomErase {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        let threshold = self.erase_per_10k;
        let rng = &mut self.rng;
        container.erase_each(|_| rng.random_range(0..SCALE) < threshold);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;
    use crate::container::keys;
    use crate::ds::ForwardList;
    use crate::element::TrivialSmall;
    use crate::policy::setup::{FilledSequential, Setup};

    type Pool = ValuePool<TrivialSmall>;

    fn sequential<C: SequenceContainer<Item = TrivialSmall>>(size: usize, pool: &mut Pool) -> C {
        Setup::<C>::make(&mut FilledSequential, size, pool)
    }

    // ==============================================
    // RandomSortedInsert
    // ==============================================

    mod sorted_insert {
        use super::*;

        fn is_sorted(keys: &[usize]) -> bool {
            keys.windows(2).all(|w| w[0] <= w[1])
        }

        #[test]
        fn keeps_container_sorted() {
            let pool = Pool::new();
            let mut values: Vec<TrivialSmall> = Vec::new();
            let mut list: LinkedList<TrivialSmall> = LinkedList::new();
            let mut policy = RandomSortedInsert::new();
            assert!(policy.run(&mut values, 200, &pool).is_applied());
            assert!(policy.run(&mut list, 200, &pool).is_applied());
            assert_eq!(values.len(), 200);
            assert!(is_sorted(&keys(&values)));
            assert!(is_sorted(&keys(&list)));
        }

        #[test]
        fn same_seed_same_draws() {
            let pool = Pool::new();
            let mut a: VecDeque<TrivialSmall> = VecDeque::new();
            let mut b: VecDeque<TrivialSmall> = VecDeque::new();
            assert!(RandomSortedInsert::with_seed(9).run(&mut a, 50, &pool).is_applied());
            assert!(RandomSortedInsert::with_seed(9).run(&mut b, 50, &pool).is_applied());
            assert_eq!(keys(&a), keys(&b));
        }

        #[test]
        fn generator_advances_across_runs() {
            let pool = Pool::new();
            let mut policy = RandomSortedInsert::new();
            let mut first: Vec<TrivialSmall> = Vec::new();
            let mut second: Vec<TrivialSmall> = Vec::new();
            assert!(policy.run(&mut first, 20, &pool).is_applied());
            assert!(policy.run(&mut second, 20, &pool).is_applied());
            assert_ne!(keys(&first), keys(&second));
        }

        #[test]
        fn not_applicable_on_singly_linked() {
            let pool = Pool::new();
            let mut list: ForwardList<TrivialSmall> = ForwardList::new();
            assert_eq!(
                RandomSortedInsert::new().run(&mut list, 10, &pool),
                Outcome::NotApplicable
            );
            assert!(list.is_empty());
        }
    }

    // ==============================================
    // RandomErase
    // ==============================================

    mod erase {
        use super::*;

        #[test]
        fn named_constructors_map_to_probabilities() {
            assert_eq!(RandomErase::one_percent().probability(), 0.01);
            assert_eq!(RandomErase::ten_percent().probability(), 0.1);
            assert_eq!(RandomErase::quarter().probability(), 0.25);
            assert_eq!(RandomErase::half().probability(), 0.5);
        }

        #[test]
        fn try_new_rejects_out_of_range() {
            assert!(RandomErase::try_new(0.0).is_ok());
            assert!(RandomErase::try_new(1.0).is_ok());
            assert_eq!(
                RandomErase::try_new(-0.1).err(),
                Some(ConfigError::InvalidProbability(-0.1))
            );
            assert!(matches!(
                RandomErase::try_new(f64::NAN),
                Err(ConfigError::InvalidProbability(_))
            ));
        }

        #[test]
        fn zero_and_one_are_exact() {
            let mut pool = Pool::new();
            let mut keep: Vec<TrivialSmall> = sequential(500, &mut pool);
            let mut drop_all: ForwardList<TrivialSmall> = sequential(500, &mut pool);
            let mut none = RandomErase::try_new(0.0).unwrap();
            let mut all = RandomErase::try_new(1.0).unwrap();
            assert!(none.run(&mut keep, 500, &pool).is_applied());
            assert!(all.run(&mut drop_all, 500, &pool).is_applied());
            assert_eq!(keep.len(), 500);
            assert!(drop_all.is_empty());
        }

        #[test]
        fn survivors_keep_relative_order() {
            let mut pool = Pool::new();
            let mut list: LinkedList<TrivialSmall> = sequential(1000, &mut pool);
            assert!(RandomErase::half().run(&mut list, 1000, &pool).is_applied());
            let survivors = keys(&list);
            assert!(survivors.windows(2).all(|w| w[0] < w[1]));
        }

        /// Mean retained fraction over `TRIALS` runs at each size, using one
        /// policy so the generator advances between trials.
        fn mean_retained(mut policy: RandomErase) -> f64 {
            const TRIALS: usize = 5;
            const SIZES: [usize; 3] = [1_000, 2_000, 4_000];
            let mut pool = Pool::new();
            let mut total = 0.0;
            for size in SIZES {
                for _ in 0..TRIALS {
                    let mut values: Vec<TrivialSmall> = sequential(size, &mut pool);
                    assert!(policy.run(&mut values, size, &pool).is_applied());
                    total += values.len() as f64 / size as f64;
                }
            }
            total / (TRIALS * SIZES.len()) as f64
        }

        #[test]
        fn retained_fraction_averages_to_one_minus_probability() {
            // 35 000 draws per policy; sigma of the mean is at most 0.0027
            for policy in [
                RandomErase::one_percent(),
                RandomErase::ten_percent(),
                RandomErase::quarter(),
                RandomErase::half(),
            ] {
                let expected = 1.0 - policy.probability();
                let retained = mean_retained(policy);
                assert!(
                    (retained - expected).abs() < 0.0125,
                    "retained {retained}, expected {expected}"
                );
            }
        }

        #[test]
        fn deque_erases_near_probability() {
            let mut pool = Pool::new();
            let mut deque: VecDeque<TrivialSmall> = sequential(8_000, &mut pool);
            assert!(RandomErase::quarter().run(&mut deque, 8_000, &pool).is_applied());
            let erased = 8_000 - deque.len();
            // expected 2000, sigma ~39
            assert!((1_800..=2_200).contains(&erased), "erased {erased}");
        }
    }
}
