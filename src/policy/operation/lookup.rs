//! Scanning policies: linear search, keyed insertion, and traversal.
//!
//! Every value a scan produces goes through [`black_box`] so the timed loop
//! cannot be proven dead and removed.

use std::hint::black_box;

use crate::cache::ValuePool;
use crate::element::Element;
use crate::traits::{Outcome, SequenceContainer};

use super::{KEYED_LOOKUPS, Operation};

fn position_of_key<C: SequenceContainer>(container: &C, key: usize) -> Option<usize> {
    container.iter().position(|value| value.key() == key)
}

/// `size` linear scans, one per key in `0..size`. Quadratic overall.
#[derive(Debug, Clone, Copy, Default)]
pub struct Find;

impl<C: SequenceContainer> Operation<C, C::Item> for Find {
    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        for key in 0..size {
            black_box(position_of_key(container, key));
        }
        Outcome::Applied
    }
}

/// Inserts a default value before each of the keys `0..1000`, located by
/// linear scan; appends when a key is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

impl<C: SequenceContainer> Operation<C, C::Item> for Insert {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_random_insert
    }

    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_random_insert {
            return Outcome::NotApplicable;
        }
        for key in 0..KEYED_LOOKUPS {
            let index = position_of_key(container, key).unwrap_or_else(|| container.len());
            let _ = container.insert_at(index, C::Item::default());
        }
        Outcome::Applied
    }
}

/// Increments every key in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Write;

impl<C: SequenceContainer> Operation<C, C::Item> for Write {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        for value in container.iter_mut() {
            let key = value.key_mut();
            *key = key.wrapping_add(1);
        }
        Outcome::Applied
    }
}

/// Reads every element once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterate;

impl<C: SequenceContainer> Operation<C, C::Item> for Iterate {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        for value in container.iter() {
            black_box(value);
        }
        Outcome::Applied
    }
}

/// [`Iterate`], then drop every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterateAndClear;

impl<C: SequenceContainer> Operation<C, C::Item> for IterateAndClear {
    fn run(&mut self, container: &mut C, size: usize, pool: &ValuePool<C::Item>) -> Outcome {
        let outcome = Iterate.run(container, size, pool);
        container.clear();
        outcome
    }
}
