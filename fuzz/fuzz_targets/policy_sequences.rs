#![no_main]

use std::collections::{LinkedList, VecDeque};

use libfuzzer_sys::fuzz_target;
use seqbench::prelude::*;

// Fuzz order-preserving policy sequences across all four container kinds
//
// Every kind starts from the same ascending contents; after each step the
// kinds must still hold the same keys in the same order.
fn keys<C: SequenceContainer<Item = TrivialSmall>>(container: &C) -> Vec<usize> {
    SequenceContainer::iter(container).map(Element::key).collect()
}

struct Kinds {
    vector: Vec<TrivialSmall>,
    list: LinkedList<TrivialSmall>,
    forward: ForwardList<TrivialSmall>,
    deque: VecDeque<TrivialSmall>,
    pool: ValuePool<TrivialSmall>,
}

impl Kinds {
    fn new(size: usize) -> Self {
        let mut pool = ValuePool::new();
        Self {
            vector: Setup::<Vec<_>>::make(&mut FilledSequential, size, &mut pool),
            list: Setup::<LinkedList<_>>::make(&mut FilledSequential, size, &mut pool),
            forward: Setup::<ForwardList<_>>::make(&mut FilledSequential, size, &mut pool),
            deque: Setup::<VecDeque<_>>::make(&mut FilledSequential, size, &mut pool),
            pool,
        }
    }

    fn apply<O>(&mut self, mut op: O, size: usize)
    where
        O: Operation<Vec<TrivialSmall>, TrivialSmall>
            + Operation<LinkedList<TrivialSmall>, TrivialSmall>
            + Operation<ForwardList<TrivialSmall>, TrivialSmall>
            + Operation<VecDeque<TrivialSmall>, TrivialSmall>,
    {
        let outcomes = [
            Operation::<Vec<_>, _>::run(&mut op, &mut self.vector, size, &self.pool),
            Operation::<LinkedList<_>, _>::run(&mut op, &mut self.list, size, &self.pool),
            Operation::<ForwardList<_>, _>::run(&mut op, &mut self.forward, size, &self.pool),
            Operation::<VecDeque<_>, _>::run(&mut op, &mut self.deque, size, &self.pool),
        ];
        assert!(outcomes.iter().all(|o| o.is_applied()));
    }

    fn check(&self) {
        let expected = keys(&self.vector);
        assert_eq!(keys(&self.list), expected);
        assert_eq!(keys(&self.forward), expected);
        assert_eq!(keys(&self.deque), expected);
        self.forward.debug_validate_invariants();
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, steps)) = data.split_first() else {
        return;
    };

    let mut kinds = Kinds::new(usize::from(first) * 8);
    kinds.check();

    for &step in steps {
        let size = kinds.vector.len();
        match step % 9 {
            0 => kinds.apply(EraseFront, size),
            1 => kinds.apply(EraseMiddle, size),
            2 => kinds.apply(EraseBack, size),
            3 => kinds.apply(Reverse, size),
            4 => kinds.apply(Sort, size),
            5 => kinds.apply(RemoveErase, size),
            6 => kinds.apply(Erase, size),
            7 => kinds.apply(Write, size),
            8 => kinds.apply(FullErase, size),
            _ => unreachable!(),
        }
        kinds.check();
    }
});
