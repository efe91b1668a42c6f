//! Filling policies: grow a container by `size` elements.
//!
//! | Policy                  | Path                                   | Value                 |
//! |-------------------------|----------------------------------------|-----------------------|
//! | `FillBack`              | `push_back`                            | clone of a default    |
//! | `InsertSimple`          | `insert_at(len)`                       | clone of a default    |
//! | `EmplaceBack`           | `push_back`                            | fresh default         |
//! | `FillBackInserter`      | `Extend` with `repeat_n`               | clones of a default   |
//! | `FastestAddition`       | front on node kinds, back otherwise    | clone of a default    |
//! | `FillFront`             | `push_front` (insert at 0 on `Vec`)    | clone of a default    |
//! | `EmplaceFront`          | `push_front`                           | fresh default         |
//! | `FillBackBackup`        | `push_back`                            | ascending backup      |
//! | `FastestAdditionBackup` | fastest path                           | ascending backup      |
//!
//! The `Backup` variants read the first `size` values of the ascending cache
//! primed by `EmptyPrepareBackup`; a short backup makes them not applicable.

use std::iter;

use crate::cache::ValuePool;
use crate::traits::{Outcome, SequenceContainer, push_value, push_value_fastest};

use super::Operation;

/// Does nothing; measures harness overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOp;

impl<C: SequenceContainer> Operation<C, C::Item> for NoOp {
    fn run(&mut self, _container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        Outcome::Applied
    }
}

/// Reserves capacity for `size` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReserveSize;

impl<C: SequenceContainer> Operation<C, C::Item> for ReserveSize {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_reserve
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_reserve {
            return Outcome::NotApplicable;
        }
        container.reserve_total(size)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FillBack;

impl<C: SequenceContainer> Operation<C, C::Item> for FillBack {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_push_back
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_push_back {
            return Outcome::NotApplicable;
        }
        let value = C::Item::default();
        for _ in 0..size {
            push_value(container, value.clone());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertSimple;

impl<C: SequenceContainer> Operation<C, C::Item> for InsertSimple {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_random_insert
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_random_insert {
            return Outcome::NotApplicable;
        }
        let value = C::Item::default();
        for _ in 0..size {
            let end = container.len();
            let _ = container.insert_at(end, value.clone());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmplaceBack;

impl<C: SequenceContainer> Operation<C, C::Item> for EmplaceBack {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_push_back
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_push_back {
            return Outcome::NotApplicable;
        }
        for _ in 0..size {
            let _ = container.push_back(C::Item::default());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FillBackInserter;

impl<C: SequenceContainer> Operation<C, C::Item> for FillBackInserter {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_push_back
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_push_back {
            return Outcome::NotApplicable;
        }
        container.extend_back(iter::repeat_n(C::Item::default(), size))
    }
}

/// Adds `size` elements through the cheapest end of the kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestAddition;

impl<C: SequenceContainer> Operation<C, C::Item> for FastestAddition {
    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        let value = C::Item::default();
        for _ in 0..size {
            push_value_fastest(container, value.clone());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FillFront;

impl<C: SequenceContainer> Operation<C, C::Item> for FillFront {
    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        let value = C::Item::default();
        for _ in 0..size {
            container.push_front(value.clone());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmplaceFront;

impl<C: SequenceContainer> Operation<C, C::Item> for EmplaceFront {
    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        for _ in 0..size {
            container.push_front(C::Item::default());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FillBackBackup;

impl<C: SequenceContainer> Operation<C, C::Item> for FillBackBackup {
    fn check(&self, _container: &C, size: usize, pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_push_back && pool.ascending().len() >= size
    }

    fn run(&mut self, container: &mut C, size: usize, pool: &ValuePool<C::Item>) -> Outcome {
        let backup = pool.ascending().values();
        if !C::CAPS.supports_push_back || backup.len() < size {
            return Outcome::NotApplicable;
        }
        for value in &backup[..size] {
            push_value(container, value.clone());
        }
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FastestAdditionBackup;

impl<C: SequenceContainer> Operation<C, C::Item> for FastestAdditionBackup {
    fn check(&self, _container: &C, size: usize, pool: &ValuePool<C::Item>) -> bool {
        pool.ascending().len() >= size
    }

    fn run(&mut self, container: &mut C, size: usize, pool: &ValuePool<C::Item>) -> Outcome {
        let backup = pool.ascending().values();
        if backup.len() < size {
            return Outcome::NotApplicable;
        }
        for value in &backup[..size] {
            push_value_fastest(container, value.clone());
        }
        Outcome::Applied
    }
}
