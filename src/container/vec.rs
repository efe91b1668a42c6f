//! `Contiguous` kind: `Vec<T>`.
//!
//! Positional inserts and removals shift the tail. `erase_each` removes one
//! element at a time while walking by index, which is quadratic on purpose:
//! it is the iterator-erase pattern being measured. `remove_if` is the
//! single-pass `retain`.

use crate::element::Element;
use crate::traits::{ContainerKind, Outcome, SequenceContainer};

impl<T: Element> SequenceContainer for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T>;
    type IterMut<'a> = std::slice::IterMut<'a, T>;

    const KIND: ContainerKind = ContainerKind::Contiguous;

    fn with_default_len(len: usize) -> Self {
        let mut values = Vec::new();
        values.resize_with(len, T::default);
        values
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_front(&mut self, value: T) {
        Vec::insert(self, 0, value);
    }

    fn push_back(&mut self, value: T) -> Outcome {
        Vec::push(self, value);
        Outcome::Applied
    }

    fn extend_back<I>(&mut self, values: I) -> Outcome
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, values);
        Outcome::Applied
    }

    fn pop_front(&mut self) -> Option<T> {
        if Vec::is_empty(self) {
            None
        } else {
            Some(Vec::remove(self, 0))
        }
    }

    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn insert_at(&mut self, index: usize, value: T) -> Outcome {
        if index > Vec::len(self) {
            return Outcome::NotApplicable;
        }
        Vec::insert(self, index, value);
        Outcome::Applied
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    fn swap_remove_at(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::swap_remove(self, index))
    }

    fn erase_each<F>(&mut self, mut erase: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut erased = 0;
        let mut index = 0;
        while index < Vec::len(self) {
            if erase(&self[index]) {
                Vec::remove(self, index);
                erased += 1;
            } else {
                index += 1;
            }
        }
        erased
    }

    fn remove_if<F>(&mut self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        Vec::retain(self, |value| !pred(value));
    }

    fn sort(&mut self) {
        self.as_mut_slice().sort_unstable();
    }

    fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    fn reserve_total(&mut self, capacity: usize) -> Outcome {
        Vec::reserve(self, capacity.saturating_sub(Vec::len(self)));
        Outcome::Applied
    }

    fn shrink_to_fit(&mut self) -> Outcome {
        Vec::shrink_to_fit(self);
        Outcome::Applied
    }

    fn capacity(&self) -> Option<usize> {
        Some(Vec::capacity(self))
    }
}
