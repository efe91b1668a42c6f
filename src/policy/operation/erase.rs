//! Erasing policies.
//!
//! Positional erasure on a singly linked kind walks to the link before the
//! target (erase-after). Swap erasure needs O(1) back access and is gated on
//! it: the target trades places with the last element, which is then popped.
//!
//! ```text
//!   EraseMiddleSwap, size = 5
//!
//!   [a][b][c][d][e]      swap(c, e)      [a][b][e][d][c]      pop_back      [a][b][e][d]
//! ```

use std::hint::black_box;

use crate::cache::ValuePool;
use crate::element::Element;
use crate::traits::{Outcome, SequenceContainer};

use super::{KEYED_LOOKUPS, Operation};

/// Removes the keys `0..1000` one at a time.
///
/// Singly linked kinds use their native filtering removal per key; other
/// kinds locate the key by linear scan and erase at that position. Missing
/// keys are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Erase;

impl<C: SequenceContainer> Operation<C, C::Item> for Erase {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        for key in 0..KEYED_LOOKUPS {
            if C::CAPS.is_singly_linked {
                container.remove_if(|value| value.key() == key);
                continue;
            }
            let found = container.iter().position(|value| value.key() == key);
            if let Some(index) = found {
                black_box(container.remove_at(index));
            }
        }
        Outcome::Applied
    }
}

/// One filtering pass removing every key below 1000.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveErase;

impl<C: SequenceContainer> Operation<C, C::Item> for RemoveErase {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        container.remove_if(|value| value.key() < KEYED_LOOKUPS);
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EraseFront;

impl<C: SequenceContainer> Operation<C, C::Item> for EraseFront {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        black_box(container.pop_front());
        Outcome::Applied
    }
}

/// Erases the element `size / 2` steps from the head.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraseMiddle;

impl<C: SequenceContainer> Operation<C, C::Item> for EraseMiddle {
    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        black_box(container.remove_at(size / 2));
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EraseBack;

impl<C: SequenceContainer> Operation<C, C::Item> for EraseBack {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        black_box(container.pop_back());
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EraseFrontSwap;

impl<C: SequenceContainer> Operation<C, C::Item> for EraseFrontSwap {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.has_back_access()
    }

    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.has_back_access() {
            return Outcome::NotApplicable;
        }
        black_box(container.swap_remove_at(0));
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EraseMiddleSwap;

impl<C: SequenceContainer> Operation<C, C::Item> for EraseMiddleSwap {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.has_back_access()
    }

    fn run(&mut self, container: &mut C, size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.has_back_access() {
            return Outcome::NotApplicable;
        }
        black_box(container.swap_remove_at(size / 2));
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EraseBackSwap;

impl<C: SequenceContainer> Operation<C, C::Item> for EraseBackSwap {
    fn check(&self, _container: &C, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.has_back_access()
    }

    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.has_back_access() {
            return Outcome::NotApplicable;
        }
        if let Some(last) = container.len().checked_sub(1) {
            black_box(container.swap_remove_at(last));
        }
        Outcome::Applied
    }
}

/// Erases every element through the iterator-erase pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullErase;

impl<C: SequenceContainer> Operation<C, C::Item> for FullErase {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        black_box(container.erase_each(|_| true));
        Outcome::Applied
    }
}

/// Drops a heap-owned container handed out by a smart setup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartDelete;

impl<C: SequenceContainer> Operation<Option<Box<C>>, C::Item> for SmartDelete {
    fn check(&self, target: &Option<Box<C>>, _size: usize, _pool: &ValuePool<C::Item>) -> bool {
        target.is_some()
    }

    fn run(
        &mut self,
        target: &mut Option<Box<C>>,
        _size: usize,
        _pool: &ValuePool<C::Item>,
    ) -> Outcome {
        match target.take() {
            Some(container) => {
                drop(container);
                Outcome::Applied
            },
            None => Outcome::NotApplicable,
        }
    }
}
