//! `Segmented` kind: `VecDeque<T>`.
//!
//! O(1) at both ends; positional operations shift the shorter side. Sort and
//! reverse first make the ring contiguous.

use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::element::Element;
use crate::traits::{ContainerKind, Outcome, SequenceContainer};

impl<T: Element> SequenceContainer for VecDeque<T> {
    type Item = T;
    type Iter<'a> = vec_deque::Iter<'a, T>;
    type IterMut<'a> = vec_deque::IterMut<'a, T>;

    const KIND: ContainerKind = ContainerKind::Segmented;

    fn with_default_len(len: usize) -> Self {
        let mut values = VecDeque::new();
        values.resize_with(len, T::default);
        values
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    fn push_back(&mut self, value: T) -> Outcome {
        VecDeque::push_back(self, value);
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
        VecDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn insert_at(&mut self, index: usize, value: T) -> Outcome {
        if index > VecDeque::len(self) {
            return Outcome::NotApplicable;
        }
        VecDeque::insert(self, index, value);
        Outcome::Applied
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    fn swap_remove_at(&mut self, index: usize) -> Option<T> {
        VecDeque::swap_remove_back(self, index)
    }

    fn erase_each<F>(&mut self, mut erase: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut erased = 0;
        let mut index = 0;
        while index < VecDeque::len(self) {
            if erase(&self[index]) {
                VecDeque::remove(self, index);
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
        VecDeque::retain(self, |value| !pred(value));
    }

    fn sort(&mut self) {
        self.make_contiguous().sort_unstable();
    }

    fn reverse(&mut self) {
        self.make_contiguous().reverse();
    }

    fn reserve_total(&mut self, capacity: usize) -> Outcome {
        VecDeque::reserve(self, capacity.saturating_sub(VecDeque::len(self)));
        Outcome::Applied
    }

    fn shrink_to_fit(&mut self) -> Outcome {
        VecDeque::shrink_to_fit(self);
        Outcome::Applied
    }

    fn capacity(&self) -> Option<usize> {
        Some(VecDeque::capacity(self))
    }
}
