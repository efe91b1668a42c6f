//! DHAT heap profiler for seqbench.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::collections::{LinkedList, VecDeque};

use seqbench::prelude::*;

const SIZE: usize = 100_000;

fn heap_now() -> (usize, usize) {
    let stats = dhat::HeapStats::get();
    (stats.curr_bytes, stats.max_bytes)
}

/// Fill, churn, and tear down one container kind.
fn profile_kind<C: SequenceContainer<Item = TrivialMedium>>(pool: &mut ValuePool<TrivialMedium>) {
    println!("=== Profiling {} ===", C::KIND.label());

    let mut container = Setup::<C>::make(&mut FilledRandom, SIZE, pool);
    let (curr, _) = heap_now();
    println!("  Filled {SIZE} elements: {curr} bytes live");

    let _ = Sort.run(&mut container, SIZE, pool);
    let _ = RandomErase::quarter().run(&mut container, SIZE, pool);
    let _ = container.shrink_to_fit();
    let (curr, _) = heap_now();
    println!("  After sort + 25% erase: {curr} bytes live");

    drop(container);
    Setup::<C>::clean(&mut FilledRandom, pool);
}

fn profile_cache_lifecycle(pool: &mut ValuePool<TrivialMedium>) {
    println!("=== Profiling value cache ===");
    let (before, _) = heap_now();

    let _ = pool.ascending_mut().make::<Vec<TrivialMedium>>(SIZE);
    let _ = pool.shuffled_mut().make::<Vec<TrivialMedium>>(SIZE);
    let (primed, _) = heap_now();
    println!("  Primed both arrangements: {} bytes", primed.saturating_sub(before));

    pool.clean();
    let (after, _) = heap_now();
    println!("  After clean: {} bytes retained", after.saturating_sub(before));
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("seqbench DHAT Heap Profiling");
    println!("============================\n");

    let mut pool = ValuePool::<TrivialMedium>::new();
    profile_kind::<Vec<TrivialMedium>>(&mut pool);
    profile_kind::<VecDeque<TrivialMedium>>(&mut pool);
    profile_kind::<LinkedList<TrivialMedium>>(&mut pool);
    profile_kind::<ForwardList<TrivialMedium>>(&mut pool);
    profile_cache_lifecycle(&mut pool);

    let (_, peak) = heap_now();
    println!("\n  Peak heap: {peak} bytes");
    println!("\n============================");
    println!("Profile written to dhat-heap.json");
}
