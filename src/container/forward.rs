//! `SinglyLinked` kind: [`ForwardList<T>`].
//!
//! Everything that needs the back or an O(1) length is either a walk
//! (`len`, `pop_back`) or not applicable (`push_back`, `insert_at`,
//! `extend_back`, `swap_remove_at`). Both filtering entry points use the
//! list's native one-pass `remove_if`.

use crate::ds::ForwardList;
use crate::ds::forward_list;
use crate::element::Element;
use crate::traits::{ContainerKind, Outcome, SequenceContainer};

impl<T: Element> SequenceContainer for ForwardList<T> {
    type Item = T;
    type Iter<'a> = forward_list::Iter<'a, T>;
    type IterMut<'a> = forward_list::IterMut<'a, T>;

    const KIND: ContainerKind = ContainerKind::SinglyLinked;

    fn with_default_len(len: usize) -> Self {
        std::iter::repeat_with(T::default).take(len).collect()
    }

    fn len(&self) -> usize {
        ForwardList::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        ForwardList::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ForwardList::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        ForwardList::iter_mut(self)
    }

    fn clear(&mut self) {
        ForwardList::clear(self);
    }

    fn push_front(&mut self, value: T) {
        ForwardList::push_front(self, value);
    }

    fn push_back(&mut self, _value: T) -> Outcome {
        Outcome::NotApplicable
    }

    fn extend_back<I>(&mut self, _values: I) -> Outcome
    where
        I: IntoIterator<Item = T>,
    {
        Outcome::NotApplicable
    }

    fn pop_front(&mut self) -> Option<T> {
        ForwardList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        ForwardList::pop_back(self)
    }

    fn insert_at(&mut self, _index: usize, _value: T) -> Outcome {
        Outcome::NotApplicable
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        ForwardList::remove_at(self, index)
    }

    fn swap_remove_at(&mut self, _index: usize) -> Option<T> {
        None
    }

    fn erase_each<F>(&mut self, erase: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        ForwardList::remove_if(self, erase)
    }

    fn remove_if<F>(&mut self, pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        ForwardList::remove_if(self, pred);
    }

    fn sort(&mut self) {
        ForwardList::sort(self);
    }

    fn reverse(&mut self) {
        ForwardList::reverse(self);
    }

    fn reserve_total(&mut self, _capacity: usize) -> Outcome {
        Outcome::NotApplicable
    }

    fn shrink_to_fit(&mut self) -> Outcome {
        Outcome::NotApplicable
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}
