//! Reordering policies.

use crate::cache::ValuePool;
use crate::traits::{Outcome, SequenceContainer};

use super::Operation;

/// Sorts ascending by key. Node-based kinds relink; array kinds swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort;

impl<C: SequenceContainer> Operation<C, C::Item> for Sort {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        container.sort();
        Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl<C: SequenceContainer> Operation<C, C::Item> for Reverse {
    fn run(&mut self, container: &mut C, _size: usize, _pool: &ValuePool<C::Item>) -> Outcome {
        container.reverse();
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;
    use crate::container::keys;
    use crate::ds::ForwardList;
    use crate::element::{Element, TrivialLarge};
    use crate::policy::setup::{FilledRandom, Setup};

    type Pool = ValuePool<TrivialLarge>;

    fn check_sort<C: SequenceContainer<Item = TrivialLarge>>() {
        let mut pool = Pool::new();
        let mut container = Setup::<C>::make(&mut FilledRandom, 257, &mut pool);
        assert!(Sort.run(&mut container, 257, &pool).is_applied());
        assert_eq!(keys(&container), (0..257).collect::<Vec<_>>());
    }

    #[test]
    fn sort_orders_every_kind() {
        check_sort::<Vec<TrivialLarge>>();
        check_sort::<VecDeque<TrivialLarge>>();
        check_sort::<LinkedList<TrivialLarge>>();
        check_sort::<ForwardList<TrivialLarge>>();
    }

    #[test]
    fn reverse_twice_restores_order() {
        let pool = Pool::new();
        let mut list: ForwardList<TrivialLarge> = (0..9).map(TrivialLarge::from_key).collect();
        assert!(Reverse.run(&mut list, 9, &pool).is_applied());
        assert_eq!(keys(&list), (0..9).rev().collect::<Vec<_>>());
        assert!(Reverse.run(&mut list, 9, &pool).is_applied());
        assert_eq!(keys(&list), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn sort_on_empty_is_applied() {
        let pool = Pool::new();
        let mut deque: VecDeque<TrivialLarge> = VecDeque::new();
        assert!(Sort.run(&mut deque, 0, &pool).is_applied());
        assert!(deque.is_empty());
    }
}
