#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use seqbench::ds::ForwardList;

// Fuzz arbitrary operation sequences on ForwardList against a VecDeque model
//
// Tests random sequences of push_front, pop_front, pop_back, remove_at,
// remove_if, reverse, sort, clear operations.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: ForwardList<u8> = ForwardList::new();
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = data[idx + 1];

        match op {
            0 => {
                list.push_front(value);
                model.push_front(value);
                assert_eq!(list.front(), Some(&value));
            }
            1 => {
                assert_eq!(list.pop_front(), model.pop_front());
            }
            2 => {
                assert_eq!(list.pop_back(), model.pop_back());
            }
            3 => {
                // remove_at, sometimes out of range
                let index = usize::from(value) % (model.len() + 2);
                assert_eq!(list.remove_at(index), model.remove(index));
            }
            4 => {
                // remove_if on a threshold
                let before = model.len();
                model.retain(|&v| v >= value);
                assert_eq!(list.remove_if(|&v| v < value), before - model.len());
            }
            5 => {
                list.reverse();
                model.make_contiguous().reverse();
            }
            6 => {
                list.sort();
                model.make_contiguous().sort();
            }
            7 => {
                if value % 16 == 0 {
                    list.clear();
                    model.clear();
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
        list.debug_validate_invariants();

        idx += 2;
    }
});
