// ==============================================
// CROSS-KIND INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify policies behave the same way across all four container
// kinds, and that capability gating never mutates a container. These span
// multiple modules and belong here rather than in any single source file.

use std::collections::{LinkedList, VecDeque};

use seqbench::prelude::*;

fn keys<C: SequenceContainer>(container: &C) -> Vec<usize> {
    SequenceContainer::iter(container).map(Element::key).collect()
}

fn sequential<C: SequenceContainer<Item = TrivialSmall>>(size: usize) -> C {
    let mut pool = ValuePool::new();
    Setup::<C>::make(&mut FilledSequential, size, &mut pool)
}

macro_rules! for_each_kind {
    (|$c:ident| $body:block) => {{
        {
            type $c = Vec<TrivialSmall>;
            $body
        }
        {
            type $c = LinkedList<TrivialSmall>;
            $body
        }
        {
            type $c = ForwardList<TrivialSmall>;
            $body
        }
        {
            type $c = VecDeque<TrivialSmall>;
            $body
        }
    }};
}

// ==============================================
// Positional Erasure
// ==============================================
//
// Positions count from the head on every kind, including the singly linked
// one, which has to walk there.

mod positional {
    use super::*;

    #[test]
    fn erase_middle_removes_the_same_element_everywhere() {
        for_each_kind!(|C| {
            let pool = ValuePool::new();
            let mut container: C = sequential(5);
            assert!(EraseMiddle.run(&mut container, 5, &pool).is_applied());
            assert_eq!(keys(&container), vec![0, 1, 3, 4], "{:?}", C::KIND);
        });
    }

    #[test]
    fn erase_front_and_back() {
        for_each_kind!(|C| {
            let pool = ValuePool::new();
            let mut container: C = sequential(4);
            assert!(EraseFront.run(&mut container, 4, &pool).is_applied());
            assert!(EraseBack.run(&mut container, 4, &pool).is_applied());
            assert_eq!(keys(&container), vec![1, 2], "{:?}", C::KIND);
        });
    }

    #[test]
    fn swap_erase_is_gated_on_back_access() {
        for_each_kind!(|C| {
            let pool = ValuePool::new();
            let mut container: C = sequential(5);
            let outcome = EraseMiddleSwap.run(&mut container, 5, &pool);
            if C::CAPS.has_back_access() {
                assert!(outcome.is_applied());
                assert_eq!(container.len(), 4);
            } else {
                assert_eq!(outcome, Outcome::NotApplicable);
                assert_eq!(keys(&container), vec![0, 1, 2, 3, 4]);
            }
        });
    }
}

// ==============================================
// Capability Gating
// ==============================================
//
// A NotApplicable outcome must leave the container exactly as it was.

mod gating {
    use super::*;

    #[test]
    fn inapplicable_operations_do_not_mutate() {
        let pool = ValuePool::new();
        let mut list: ForwardList<TrivialSmall> = sequential(6);
        let before = keys(&list);

        assert_eq!(FillBack.run(&mut list, 3, &pool), Outcome::NotApplicable);
        assert_eq!(EmplaceBack.run(&mut list, 3, &pool), Outcome::NotApplicable);
        assert_eq!(Insert.run(&mut list, 6, &pool), Outcome::NotApplicable);
        assert_eq!(
            RandomSortedInsert::with_seed(1).run(&mut list, 3, &pool),
            Outcome::NotApplicable
        );
        assert_eq!(EraseBackSwap.run(&mut list, 6, &pool), Outcome::NotApplicable);

        assert_eq!(keys(&list), before);
    }

    #[test]
    fn shrink_on_lists_does_not_run_inner() {
        let pool = ValuePool::new();
        let mut list: LinkedList<TrivialSmall> = sequential(4);
        let mut op = shrink::<LinkedList<TrivialSmall>, _>(EraseFront);
        assert_eq!(op.run(&mut list, 4, &pool), Outcome::NotApplicable);
        assert_eq!(keys(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn tuple_with_inapplicable_member_does_not_run() {
        let pool = ValuePool::new();
        let mut list: LinkedList<TrivialSmall> = LinkedList::new();
        assert_eq!(
            (ReserveSize, FastestAddition).run(&mut list, 10, &pool),
            Outcome::NotApplicable
        );
        assert!(list.is_empty());
    }

    /// `check` predicts `run`, and a refused `run` changes nothing.
    fn check_predicts_run<C, O>(mut op: O)
    where
        C: SequenceContainer<Item = TrivialSmall>,
        O: Operation<C, TrivialSmall>,
    {
        let pool = ValuePool::new();
        let mut container: C = sequential(6);
        let predicted = op.check(&container, 6, &pool);
        let outcome = op.run(&mut container, 6, &pool);
        assert_eq!(predicted, outcome.is_applied(), "{:?}", C::KIND);
        if !predicted {
            assert_eq!(keys(&container), vec![0, 1, 2, 3, 4, 5], "{:?}", C::KIND);
        }
    }

    #[test]
    fn check_agrees_with_run_everywhere() {
        for_each_kind!(|C| {
            check_predicts_run::<C, _>(FillBack);
            check_predicts_run::<C, _>(EmplaceBack);
            check_predicts_run::<C, _>(ReserveSize);
            check_predicts_run::<C, _>(Insert);
            check_predicts_run::<C, _>(RandomSortedInsert::with_seed(2));
            check_predicts_run::<C, _>(EraseFrontSwap);
            check_predicts_run::<C, _>(EraseBackSwap);
            check_predicts_run::<C, _>(shrink::<C, _>(EraseMiddle));
            check_predicts_run::<C, _>((ReserveSize, FillBack));
            check_predicts_run::<C, _>(FillBackBackup);
            check_predicts_run::<C, _>(Sort);
        });
    }

    #[test]
    fn fastest_addition_applies_everywhere() {
        for_each_kind!(|C| {
            let pool = ValuePool::new();
            let mut container = C::default();
            assert!(FastestAddition.run(&mut container, 16, &pool).is_applied());
            assert_eq!(container.len(), 16, "{:?}", C::KIND);
        });
    }

    #[test]
    fn filled_random_insert_is_empty_without_positional_insert() {
        let mut pool = ValuePool::<TrivialSmall>::new();
        let list: ForwardList<TrivialSmall> =
            Setup::<ForwardList<TrivialSmall>>::make(&mut FilledRandomInsert, 10, &mut pool);
        assert!(list.is_empty());

        let deque: VecDeque<TrivialSmall> =
            Setup::<VecDeque<TrivialSmall>>::make(&mut FilledRandomInsert, 10, &mut pool);
        assert_eq!(deque.len(), 10);
    }
}

// ==============================================
// Whole-Container Operations
// ==============================================

mod whole {
    use super::*;

    #[test]
    fn sort_after_filled_random_ascends_everywhere() {
        for_each_kind!(|C| {
            let mut pool = ValuePool::new();
            let mut container: C = Setup::<C>::make(&mut FilledRandom, 300, &mut pool);
            assert!(Sort.run(&mut container, 300, &pool).is_applied());
            assert_eq!(keys(&container), (0..300).collect::<Vec<_>>(), "{:?}", C::KIND);
        });
    }

    #[test]
    fn erase_and_remove_erase_agree() {
        for_each_kind!(|C| {
            let mut pool = ValuePool::new();
            let mut erased: C = Setup::<C>::make(&mut FilledRandom, 1_500, &mut pool);
            let mut removed: C = Setup::<C>::make(&mut FilledRandom, 1_500, &mut pool);
            assert!(Erase.run(&mut erased, 1_500, &pool).is_applied());
            assert!(RemoveErase.run(&mut removed, 1_500, &pool).is_applied());
            assert_eq!(keys(&erased), keys(&removed), "{:?}", C::KIND);
            assert_eq!(erased.len(), 500);
            assert!(keys(&erased).iter().all(|&k| k >= 1_000));
        });
    }

    #[test]
    fn full_erase_and_iterate_and_clear_empty_everything() {
        for_each_kind!(|C| {
            let mut pool = ValuePool::new();
            let mut a: C = Setup::<C>::make(&mut FilledRandom, 64, &mut pool);
            let mut b: C = Setup::<C>::make(&mut FilledRandom, 64, &mut pool);
            assert!(FullErase.run(&mut a, 64, &pool).is_applied());
            assert!(IterateAndClear.run(&mut b, 64, &pool).is_applied());
            assert!(a.is_empty() && b.is_empty(), "{:?}", C::KIND);
        });
    }

    #[test]
    fn random_sorted_insert_keeps_order() {
        let pool = ValuePool::new();
        let mut vector: Vec<TrivialSmall> = Vec::new();
        let mut op = RandomSortedInsert::with_seed(DEFAULT_SEED);
        assert!(op.run(&mut vector, 200, &pool).is_applied());
        assert_eq!(vector.len(), 200);
        assert!(vector.windows(2).all(|w| w[0].key() <= w[1].key()));
    }

    #[test]
    fn smart_delete_consumes_the_container() {
        let mut pool = ValuePool::<TrivialSmall>::new();
        let mut target = Setup::<LinkedList<TrivialSmall>>::make(&mut SmartFilled, 10, &mut pool);
        assert!(target.is_some());
        let mut op = SmartDelete;
        assert!(Operation::<_, TrivialSmall>::run(&mut op, &mut target, 10, &pool).is_applied());
        assert!(target.is_none());
        assert_eq!(
            Operation::<_, TrivialSmall>::run(&mut op, &mut target, 10, &pool),
            Outcome::NotApplicable
        );
    }
}

// ==============================================
// Value Cache Reuse
// ==============================================
//
// Kinds with an O(1) length reuse cached values of the same size; the singly
// linked kind regenerates on every request.

mod cache_reuse {
    use super::*;

    #[test]
    fn native_size_kinds_reuse_values() {
        let mut pool = ValuePool::<TrivialSmall>::new();
        for _ in 0..3 {
            let _: Vec<TrivialSmall> = Setup::<Vec<TrivialSmall>>::make(&mut FilledRandom, 50, &mut pool);
        }
        let metrics = pool.shuffled().metrics();
        assert_eq!(metrics.requests, 3);
        assert_eq!(metrics.regenerations, 1);
        assert_eq!(metrics.reuses, 2);
    }

    #[test]
    fn singly_linked_regenerates() {
        let mut pool = ValuePool::<TrivialSmall>::new();
        for _ in 0..3 {
            let _: ForwardList<TrivialSmall> =
                Setup::<ForwardList<TrivialSmall>>::make(&mut FilledRandom, 50, &mut pool);
        }
        let metrics = pool.shuffled().metrics();
        assert_eq!(metrics.regenerations, 3);
        assert_eq!(metrics.reuses, 0);
    }

    #[test]
    fn same_seed_same_permutation() {
        let mut a = ValuePool::<TrivialSmall>::with_seed(7);
        let mut b = ValuePool::<TrivialSmall>::with_seed(7);
        let va: Vec<TrivialSmall> = Setup::<Vec<TrivialSmall>>::make(&mut FilledRandom, 100, &mut a);
        let vb: Vec<TrivialSmall> = Setup::<Vec<TrivialSmall>>::make(&mut FilledRandom, 100, &mut b);
        assert_eq!(keys(&va), keys(&vb));
    }

    #[test]
    fn clean_releases_storage() {
        let mut pool = ValuePool::<TrivialSmall>::new();
        let mut setup = FilledRandom;
        let _: Vec<TrivialSmall> = Setup::<Vec<TrivialSmall>>::make(&mut setup, 100, &mut pool);
        Setup::<Vec<TrivialSmall>>::clean(&mut setup, &mut pool);
        let metrics = pool.shuffled().metrics();
        assert_eq!(metrics.len, 0);
        assert_eq!(metrics.capacity, 0);
        assert_eq!(metrics.cleans, 1);
    }
}
