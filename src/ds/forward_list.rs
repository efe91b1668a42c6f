//! Singly linked list with owned, boxed nodes.
//!
//! The standard library ships no singly linked sequence, so this list is the
//! `SinglyLinked` container kind. It offers only what a singly linked list
//! can do cheaply: front access, forward traversal, and erase-after style
//! splicing. Anything that needs the back is an O(n) walk.
//!
//! ## Architecture
//!
//! ```text
//!   head
//!    │
//!    ▼
//!   ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//!   │ Node         │    │ Node         │    │ Node         │
//!   │  value: A    │    │  value: B    │    │  value: C    │
//!   │  next ───────┼───►│  next ───────┼───►│  next: None  │
//!   └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Every node owns its successor (`Option<Box<Node<T>>>`). Removal works on
//! the link that points at a node: take the link, splice the successor into
//! it, drop the detached node.
//!
//! ## Operations
//!
//! | Operation       | Cost     | Notes                                   |
//! |-----------------|----------|-----------------------------------------|
//! | `push_front`    | O(1)     |                                         |
//! | `pop_front`     | O(1)     |                                         |
//! | `len`           | O(n)     | no stored length                        |
//! | `pop_back`      | O(n)     | walks to the last link                  |
//! | `remove_at`     | O(i)     | walks to link `i`                       |
//! | `remove_if`     | O(n)     | single pass, no reallocation            |
//! | `sort`          | O(n log n) | stable merge sort, relinks nodes      |
//! | `reverse`       | O(n)     | relinks nodes                           |
//!
//! `Drop` unlinks iteratively so very long lists never recurse.
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list with O(1) front operations.
pub struct ForwardList<T> {
    head: Link<T>,
}

impl<T> ForwardList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Prepends `value`.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            node.value
        })
    }

    /// Removes and returns the last element, walking the whole list.
    pub fn pop_back(&mut self) -> Option<T> {
        let mut link = &mut self.head;
        while link.as_ref()?.next.is_some() {
            link = &mut link.as_mut()?.next;
        }
        link.take().map(|node| node.value)
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        let mut node = link.take()?;
        *link = node.next.take();
        Some(node.value)
    }

    /// Unlinks every element matching `pred` in one pass.
    ///
    /// Returns the number of removed elements.
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut link = &mut self.head;
        while let Some(mut node) = link.take() {
            if pred(&node.value) {
                *link = node.next.take();
                removed += 1;
            } else {
                link = &mut link.insert(node).next;
            }
        }
        removed
    }

    /// Reverses the list by relinking nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut walked = 0usize;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            walked += 1;
            current = node.next.as_deref();
        }
        assert_eq!(walked, self.iter().count());
        assert_eq!(walked == 0, self.is_empty());
        assert_eq!(walked == 0, self.front().is_none());
    }
}

impl<T: Ord> ForwardList<T> {
    /// Stable merge sort that relinks nodes instead of moving values.
    pub fn sort(&mut self) {
        let len = self.len();
        self.head = merge_sort(self.head.take(), len);
    }
}

fn merge_sort<T: Ord>(mut head: Link<T>, len: usize) -> Link<T> {
    if len < 2 {
        return head;
    }
    let mid = len / 2;
    let right = split_off_link(&mut head, mid);
    let left = merge_sort(head, mid);
    let right = merge_sort(right, len - mid);
    merge(left, right)
}

/// Detaches everything after the first `at` nodes.
fn split_off_link<T>(head: &mut Link<T>, at: usize) -> Link<T> {
    let mut link = head;
    for _ in 0..at {
        link = &mut link.as_mut()?.next;
    }
    link.take()
}

/// Merges two sorted chains. Ties go to `left`.
fn merge<T: Ord>(mut left: Link<T>, mut right: Link<T>) -> Link<T> {
    let mut head: Link<T> = None;
    let mut tail = &mut head;
    loop {
        let take_right = match (&left, &right) {
            (Some(l), Some(r)) => r.value < l.value,
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = if left.is_some() { left } else { right };
    head
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Builds a list in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
        }
        list
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Borrowing front-to-back iterator.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable front-to-back iterator.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator.
pub struct IntoIter<T>(ForwardList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
