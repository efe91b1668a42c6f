//! # Capability Trait Layer
//!
//! Classifies every container kind by a fixed predicate set and exposes the
//! adapter trait through which all setup and operation policies talk to a
//! container.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        ContainerKind (enum)                          │
//!   │   Contiguous │ Segmented │ DoublyLinked │ SinglyLinked               │
//!   └───────────────────────────────┬──────────────────────────────────────┘
//!                                   │ const fn capabilities()
//!                                   ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         Capabilities                                 │
//!   │   supports_random_insert  has_native_size  supports_push_back        │
//!   │   is_singly_linked        supports_reserve supports_shrink           │
//!   └───────────────────────────────┬──────────────────────────────────────┘
//!                                   │ SequenceContainer::CAPS (associated const)
//!                                   ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                   SequenceContainer (adapter)                        │
//!   │                                                                      │
//!   │   Vec<T>          VecDeque<T>        LinkedList<T>    ForwardList<T> │
//!   │   (Contiguous)    (Segmented)        (DoublyLinked)   (SinglyLinked) │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Policies branch on `C::CAPS` and the branch folds away at monomorphization
//! time. Operations a kind cannot express return [`Outcome::NotApplicable`]
//! and leave the container untouched, so one generic driver loop can be
//! instantiated for every kind.
//!
//! ## Capability Matrix
//!
//! | Kind           | random insert | native size | push back | singly linked | reserve | shrink |
//! |----------------|---------------|-------------|-----------|---------------|---------|--------|
//! | `Contiguous`   | ✅            | ✅          | ✅        | ❌            | ✅      | ✅     |
//! | `Segmented`    | ✅            | ✅          | ✅        | ❌            | ✅      | ✅     |
//! | `DoublyLinked` | ✅            | ✅          | ✅        | ❌            | ❌      | ❌     |
//! | `SinglyLinked` | ❌            | ❌          | ❌        | ✅            | ❌      | ❌     |
//!
//! ## Insertion Helpers
//!
//! - [`push_value`]: push-front on singly linked kinds, push-back otherwise.
//!   Correctness first: every kind ends up holding the value.
//! - [`push_value_fastest`]: push-front on every node-based kind, push-back
//!   otherwise. Each branch is the O(1) path of its kind.

use crate::element::Element;

/// Structural family of a sequence container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// One contiguous buffer (`Vec`).
    Contiguous,
    /// Ring buffer / segmented storage (`VecDeque`).
    Segmented,
    /// Doubly linked nodes (`LinkedList`).
    DoublyLinked,
    /// Singly linked nodes (`ForwardList`).
    SinglyLinked,
}

impl ContainerKind {
    /// Resolves the capability set of this kind.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            ContainerKind::Contiguous | ContainerKind::Segmented => Capabilities {
                supports_random_insert: true,
                has_native_size: true,
                supports_push_back: true,
                is_singly_linked: false,
                supports_reserve: true,
                supports_shrink: true,
            },
            ContainerKind::DoublyLinked => Capabilities {
                supports_random_insert: true,
                has_native_size: true,
                supports_push_back: true,
                is_singly_linked: false,
                supports_reserve: false,
                supports_shrink: false,
            },
            ContainerKind::SinglyLinked => Capabilities {
                supports_random_insert: false,
                has_native_size: false,
                supports_push_back: false,
                is_singly_linked: true,
                supports_reserve: false,
                supports_shrink: false,
            },
        }
    }

    /// Returns `true` for kinds whose elements live in individual nodes.
    pub const fn is_node_based(self) -> bool {
        matches!(self, ContainerKind::DoublyLinked | ContainerKind::SinglyLinked)
    }

    /// Series label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            ContainerKind::Contiguous => "vector",
            ContainerKind::Segmented => "deque",
            ContainerKind::DoublyLinked => "list",
            ContainerKind::SinglyLinked => "forward_list",
        }
    }
}

/// Boolean facts about a container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Positional insertion and erasure at an arbitrary position.
    pub supports_random_insert: bool,
    /// Length is known in O(1).
    pub has_native_size: bool,
    /// Appending at the back is available.
    pub supports_push_back: bool,
    /// No reverse traversal, no O(1) back access.
    pub is_singly_linked: bool,
    /// Capacity can be reserved ahead of insertion.
    pub supports_reserve: bool,
    /// Capacity can be compacted to the current length.
    pub supports_shrink: bool,
}

impl Capabilities {
    /// Returns `true` when the back element is reachable in O(1).
    #[inline]
    pub const fn has_back_access(self) -> bool {
        !self.is_singly_linked
    }
}

/// Result of running a policy step against a container.
///
/// `NotApplicable` is not a failure: it means the kind cannot express the
/// step and the container was left unchanged.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Applied,
    NotApplicable,
}

impl Outcome {
    /// Returns `true` if the step ran.
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Uniform adapter over the sequence containers under test.
///
/// Each implementation expresses the operation vocabulary in the native idiom
/// of its kind (positional insert on arrays, relinking on lists, erase-after
/// on singly linked lists). Methods the kind cannot express are documented
/// no-ops that report [`Outcome::NotApplicable`] or return `None`.
pub trait SequenceContainer: Default {
    /// Stored element type.
    type Item: Element;

    /// Front-to-back iterator.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Front-to-back mutable iterator.
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    /// Structural family of this container.
    const KIND: ContainerKind;

    /// Capability set, resolved once per kind.
    const CAPS: Capabilities = Self::KIND.capabilities();

    /// Creates a container holding `len` default elements.
    fn with_default_len(len: usize) -> Self;

    /// Number of elements. O(n) on kinds without native size.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Drops every element.
    fn clear(&mut self);

    /// Prepends `value`. Positional insert at index 0 on contiguous storage.
    fn push_front(&mut self, value: Self::Item);

    /// Appends `value`. Not applicable on singly linked kinds.
    fn push_back(&mut self, value: Self::Item) -> Outcome;

    /// Appends every value through the kind's generic `Extend` path.
    fn extend_back<I>(&mut self, values: I) -> Outcome
    where
        I: IntoIterator<Item = Self::Item>;

    fn pop_front(&mut self) -> Option<Self::Item>;

    /// Removes the last element. Walks the whole list on singly linked kinds.
    fn pop_back(&mut self) -> Option<Self::Item>;

    /// Inserts `value` before position `index` (`index == len` appends).
    fn insert_at(&mut self, index: usize, value: Self::Item) -> Outcome;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;

    /// Swaps the element at `index` with the last one and pops the back.
    ///
    /// Returns `None` without touching the container on kinds without O(1)
    /// back access.
    fn swap_remove_at(&mut self, index: usize) -> Option<Self::Item>;

    /// Single front-to-back pass that erases, one element at a time through
    /// the kind's iterator-erase idiom, every element for which `erase`
    /// returns `true`. Returns the number of erased elements.
    fn erase_each<F>(&mut self, erase: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool;

    /// Bulk filtering removal of every element matching `pred`, through the
    /// kind's native filtering idiom.
    fn remove_if<F>(&mut self, pred: F)
    where
        F: FnMut(&Self::Item) -> bool;

    /// Sorts ascending: relinking sort on node-based kinds, comparison sort
    /// otherwise.
    fn sort(&mut self);

    /// Reverses the order: relinking on node-based kinds, swaps otherwise.
    fn reverse(&mut self);

    /// Ensures room for at least `capacity` elements in total.
    fn reserve_total(&mut self, capacity: usize) -> Outcome;

    /// Compacts capacity to the current length.
    fn shrink_to_fit(&mut self) -> Outcome;

    /// Allocated capacity, for kinds that have one.
    fn capacity(&self) -> Option<usize>;
}

/// Pushes `value` through the path that is valid on every kind.
///
/// Singly linked kinds push to the front, everything else to the back.
#[inline]
pub fn push_value<C: SequenceContainer>(container: &mut C, value: C::Item) {
    if C::CAPS.is_singly_linked {
        container.push_front(value);
    } else {
        let _ = container.push_back(value);
    }
}

/// Pushes `value` through the cheapest path of the kind.
///
/// Node-based kinds push to the front, array-based kinds to the back.
#[inline]
pub fn push_value_fastest<C: SequenceContainer>(container: &mut C, value: C::Item) {
    if C::KIND.is_node_based() {
        container.push_front(value);
    } else {
        let _ = container.push_back(value);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;
    use crate::ds::ForwardList;
    use crate::element::TrivialSmall;

    fn keys<C: SequenceContainer>(container: &C) -> Vec<usize> {
        container.iter().map(|v| v.key()).collect()
    }

    // ==============================================
    // Capability Resolution
    // ==============================================

    mod capabilities {
        use super::*;

        #[test]
        fn singly_linked_lacks_back_operations() {
            let caps = ContainerKind::SinglyLinked.capabilities();
            assert!(caps.is_singly_linked);
            assert!(!caps.supports_push_back);
            assert!(!caps.supports_random_insert);
            assert!(!caps.has_native_size);
            assert!(!caps.has_back_access());
        }

        #[test]
        fn array_kinds_support_capacity_management() {
            for kind in [ContainerKind::Contiguous, ContainerKind::Segmented] {
                let caps = kind.capabilities();
                assert!(caps.supports_reserve);
                assert!(caps.supports_shrink);
                assert!(!kind.is_node_based());
            }
        }

        #[test]
        fn associated_caps_match_kind() {
            assert_eq!(
                <Vec<TrivialSmall> as SequenceContainer>::CAPS,
                ContainerKind::Contiguous.capabilities()
            );
            assert_eq!(
                <LinkedList<TrivialSmall> as SequenceContainer>::KIND,
                ContainerKind::DoublyLinked
            );
            assert!(<ForwardList<TrivialSmall> as SequenceContainer>::CAPS.is_singly_linked);
        }

        #[test]
        fn labels_are_distinct() {
            let labels = [
                <Vec<TrivialSmall> as SequenceContainer>::KIND.label(),
                <LinkedList<TrivialSmall> as SequenceContainer>::KIND.label(),
                <ForwardList<TrivialSmall> as SequenceContainer>::KIND.label(),
                <VecDeque<TrivialSmall> as SequenceContainer>::KIND.label(),
            ];
            assert_eq!(labels, ["vector", "list", "forward_list", "deque"]);
        }
    }

    // ==============================================
    // Outcome
    // ==============================================

    mod outcome {
        use super::*;

        #[test]
        fn only_applied_is_applied() {
            assert!(Outcome::Applied.is_applied());
            assert!(!Outcome::NotApplicable.is_applied());
        }
    }

    // ==============================================
    // Insertion Helpers
    // ==============================================

    mod helpers {
        use super::*;

        #[test]
        fn push_value_appends_on_back_capable_kinds() {
            let mut vec: Vec<TrivialSmall> = Vec::new();
            let mut list: LinkedList<TrivialSmall> = LinkedList::new();
            for i in 0..3 {
                push_value(&mut vec, TrivialSmall::from_key(i));
                push_value(&mut list, TrivialSmall::from_key(i));
            }
            assert_eq!(keys(&vec), vec![0, 1, 2]);
            assert_eq!(keys(&list), vec![0, 1, 2]);
        }

        #[test]
        fn push_value_prepends_on_singly_linked() {
            let mut list: ForwardList<TrivialSmall> = ForwardList::new();
            for i in 0..3 {
                push_value(&mut list, TrivialSmall::from_key(i));
            }
            assert_eq!(keys(&list), vec![2, 1, 0]);
        }

        #[test]
        fn push_value_fastest_prepends_on_node_kinds() {
            let mut list: LinkedList<TrivialSmall> = LinkedList::new();
            let mut deque: VecDeque<TrivialSmall> = VecDeque::new();
            for i in 0..3 {
                push_value_fastest(&mut list, TrivialSmall::from_key(i));
                push_value_fastest(&mut deque, TrivialSmall::from_key(i));
            }
            assert_eq!(keys(&list), vec![2, 1, 0]);
            assert_eq!(keys(&deque), vec![0, 1, 2]);
        }
    }
}
