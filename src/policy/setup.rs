//! Setup policies: build the container a timed operation starts from.
//!
//! | Policy               | Output            | Cache primed | Contents                                 |
//! |----------------------|-------------------|--------------|------------------------------------------|
//! | [`Empty`]            | `C`               | none         | nothing                                  |
//! | [`Filled`]           | `C`               | none         | `size` default elements                  |
//! | [`FilledSequential`] | `C`               | none         | keys `0..size`, ascending on every kind  |
//! | [`FilledRandom`]     | `C`               | shuffled     | a permutation of `0..size`               |
//! | [`FilledRandomInsert`] | `C`             | shuffled     | same, via positional insert; empty on kinds without it |
//! | [`EmptyPrepareBackup`] | `C`             | ascending    | nothing (backup ready for `*Backup` ops) |
//! | [`BackupSmartFilled`]  | `Option<Box<C>>`| ascending    | keys `0..size` from the backup           |
//! | [`SmartFilled`]      | `Option<Box<C>>`  | none         | `size` default elements                  |
//!
//! `clean()` releases whichever cache the policy primed.

use crate::cache::ValuePool;
use crate::element::Element;
use crate::traits::{SequenceContainer, push_value};

/// Builds the initial state of a benchmark trial.
pub trait Setup<C: SequenceContainer> {
    /// What the timed operations receive.
    type Output;

    /// Produces the state for a trial of `size`.
    fn make(&mut self, size: usize, pool: &mut ValuePool<C::Item>) -> Self::Output;

    /// Releases anything `make` left in the pool.
    fn clean(&mut self, pool: &mut ValuePool<C::Item>) {
        let _ = pool;
    }
}

/// Empty container; `size` is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<C: SequenceContainer> Setup<C> for Empty {
    type Output = C;

    fn make(&mut self, _size: usize, _pool: &mut ValuePool<C::Item>) -> C {
        C::default()
    }
}

/// `size` default-constructed elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filled;

impl<C: SequenceContainer> Setup<C> for Filled {
    type Output = C;

    fn make(&mut self, size: usize, _pool: &mut ValuePool<C::Item>) -> C {
        C::with_default_len(size)
    }
}

/// Keys `0..size`; traversal is ascending on every kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilledSequential;

impl<C: SequenceContainer> Setup<C> for FilledSequential {
    type Output = C;

    fn make(&mut self, size: usize, _pool: &mut ValuePool<C::Item>) -> C {
        let mut container = C::default();
        if C::CAPS.is_singly_linked {
            // front insertion reverses, so feed keys high to low
            for key in (0..size).rev() {
                container.push_front(C::Item::from_key(key));
            }
        } else {
            for key in 0..size {
                push_value(&mut container, C::Item::from_key(key));
            }
        }
        container
    }
}

/// The shuffled cache, pushed in cache order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilledRandom;

impl<C: SequenceContainer> Setup<C> for FilledRandom {
    type Output = C;

    fn make(&mut self, size: usize, pool: &mut ValuePool<C::Item>) -> C {
        let mut container = C::default();
        for value in pool.shuffled_mut().make::<C>(size) {
            push_value(&mut container, value.clone());
        }
        container
    }

    fn clean(&mut self, pool: &mut ValuePool<C::Item>) {
        pool.shuffled_mut().clean();
    }
}

/// The shuffled cache, appended through positional insertion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilledRandomInsert;

impl<C: SequenceContainer> Setup<C> for FilledRandomInsert {
    type Output = C;

    fn make(&mut self, size: usize, pool: &mut ValuePool<C::Item>) -> C {
        let mut container = C::default();
        if !C::CAPS.supports_random_insert {
            return container;
        }
        for value in pool.shuffled_mut().make::<C>(size) {
            let end = container.len();
            let _ = container.insert_at(end, value.clone());
        }
        container
    }

    fn clean(&mut self, pool: &mut ValuePool<C::Item>) {
        pool.shuffled_mut().clean();
    }
}

/// Primes the ascending backup and returns an empty container.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPrepareBackup;

impl<C: SequenceContainer> Setup<C> for EmptyPrepareBackup {
    type Output = C;

    fn make(&mut self, size: usize, pool: &mut ValuePool<C::Item>) -> C {
        pool.ascending_mut().make::<C>(size);
        C::default()
    }

    fn clean(&mut self, pool: &mut ValuePool<C::Item>) {
        pool.ascending_mut().clean();
    }
}

/// Heap-owned container filled from the ascending backup.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackupSmartFilled;

impl<C: SequenceContainer> Setup<C> for BackupSmartFilled {
    type Output = Option<Box<C>>;

    fn make(&mut self, size: usize, pool: &mut ValuePool<C::Item>) -> Option<Box<C>> {
        let mut container = Box::new(C::default());
        for value in pool.ascending_mut().make::<C>(size) {
            push_value(container.as_mut(), value.clone());
        }
        Some(container)
    }

    fn clean(&mut self, pool: &mut ValuePool<C::Item>) {
        pool.ascending_mut().clean();
    }
}

/// Heap-owned container of `size` default elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartFilled;

impl<C: SequenceContainer> Setup<C> for SmartFilled {
    type Output = Option<Box<C>>;

    fn make(&mut self, size: usize, _pool: &mut ValuePool<C::Item>) -> Option<Box<C>> {
        Some(Box::new(C::with_default_len(size)))
    }
}
