//! `DoublyLinked` kind: `LinkedList<T>`.
//!
//! Positional work and filtering relink existing nodes instead of moving
//! values. Stable `LinkedList` has no cursors, so a single node is detached
//! with `split_off(1)` (O(1) at the front) and re-attached with `append`
//! (O(1)). No node is freed or allocated except the ones being erased or
//! inserted.
//!
//! ```text
//!   list:  [a] ◄──► [b] ◄──► [c]
//!
//!   split_off(1)      head = [a]          rest = [b] ◄──► [c]
//!   keep(a)?          kept.append(head)   (O(1) relink)
//!   erase(a)?         drop(head)          (frees one node)
//! ```

use std::collections::LinkedList;
use std::collections::linked_list;
use std::mem;

use crate::element::Element;
use crate::traits::{ContainerKind, Outcome, SequenceContainer};

/// Detaches the front node as a one-element list.
fn detach_front<T>(list: &mut LinkedList<T>) -> LinkedList<T> {
    let rest = list.split_off(1);
    mem::replace(list, rest)
}

/// Walks the list once, relinking survivors and dropping erased nodes.
fn filter_relink<T, F>(list: &mut LinkedList<T>, mut erase: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut kept = LinkedList::new();
    let mut erased = 0;
    while !list.is_empty() {
        let mut node = detach_front(list);
        if node.front().is_some_and(|value| erase(value)) {
            erased += 1;
        } else {
            kept.append(&mut node);
        }
    }
    *list = kept;
    erased
}

/// Stable merge sort over detached nodes.
fn merge_sort_relink<T: Ord>(list: &mut LinkedList<T>) {
    let len = list.len();
    if len < 2 {
        return;
    }
    let mut right = list.split_off(len / 2);
    merge_sort_relink(list);
    merge_sort_relink(&mut right);

    let mut left = mem::take(list);
    while !left.is_empty() && !right.is_empty() {
        let take_right = matches!((left.front(), right.front()), (Some(l), Some(r)) if r < l);
        let source = if take_right { &mut right } else { &mut left };
        let mut node = detach_front(source);
        list.append(&mut node);
    }
    list.append(&mut left);
    list.append(&mut right);
}

impl<T: Element> SequenceContainer for LinkedList<T> {
    type Item = T;
    type Iter<'a> = linked_list::Iter<'a, T>;
    type IterMut<'a> = linked_list::IterMut<'a, T>;

    const KIND: ContainerKind = ContainerKind::DoublyLinked;

    fn with_default_len(len: usize) -> Self {
        std::iter::repeat_with(T::default).take(len).collect()
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        LinkedList::iter_mut(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    fn push_back(&mut self, value: T) -> Outcome {
        LinkedList::push_back(self, value);
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
        LinkedList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }

    fn insert_at(&mut self, index: usize, value: T) -> Outcome {
        if index > LinkedList::len(self) {
            return Outcome::NotApplicable;
        }
        let mut tail = self.split_off(index);
        LinkedList::push_back(self, value);
        self.append(&mut tail);
        Outcome::Applied
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= LinkedList::len(self) {
            return None;
        }
        let mut tail = self.split_off(index);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed
    }

    fn swap_remove_at(&mut self, index: usize) -> Option<T> {
        if index >= LinkedList::len(self) {
            return None;
        }
        let last = LinkedList::pop_back(self)?;
        if index == LinkedList::len(self) {
            return Some(last);
        }
        LinkedList::iter_mut(self)
            .nth(index)
            .map(|slot| mem::replace(slot, last))
    }

    fn erase_each<F>(&mut self, erase: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        filter_relink(self, erase)
    }

    fn remove_if<F>(&mut self, pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        filter_relink(self, pred);
    }

    fn sort(&mut self) {
        merge_sort_relink(self);
    }

    fn reverse(&mut self) {
        let mut reversed = LinkedList::new();
        while !LinkedList::is_empty(self) {
            let mut head = detach_front(self);
            head.append(&mut reversed);
            reversed = head;
        }
        *self = reversed;
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
