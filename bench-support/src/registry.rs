//! Central registry for benchmark families and element types.
//!
//! This is the single source of truth for:
//! - Family definitions (name, unit, size ladder, body)
//! - Element types (report name, type)
//! - Suite composition (fast suite, full suite)
//!
//! To add a family, add a [`Family`] variant, list it in [`Family::FAST`] or
//! the full suite, and give it a body in [`run_family`].
//!
//! ## Families
//!
//! | Family                | Setup        | Operation            | Ladder | Unit | Extra series                     |
//! |-----------------------|--------------|----------------------|--------|------|----------------------------------|
//! | `fastest_insertion`   | Empty        | FastestAddition      | large  | us   | vector reserve                   |
//! | `fill_back`           | Empty        | FillBack             | large  | us   | vector reserve                   |
//! | `emplace_back`        | Empty        | EmplaceBack          | large  | us   | vector reserve                   |
//! | `fill_front`          | Empty        | FillFront            | medium | us   | vector only for 8-byte elements  |
//! | `emplace_front`       | Empty        | EmplaceFront         | medium | us   | vector only for 8-byte elements  |
//! | `linear_search`       | FilledRandom | Find                 | small  | us   |                                  |
//! | `traversal`           | FilledRandom | Iterate              | medium | us   |                                  |
//! | `traversal_and_clear` | FilledRandom | IterateAndClear      | medium | us   | shrink                           |
//! | `write`               | FilledRandom | Write                | medium | us   |                                  |
//! | `random_insert`       | FilledRandom | Insert               | medium | ms   |                                  |
//! | `random_remove`       | FilledRandom | Erase                | medium | us   | shrink, rem, rem shrink          |
//! | `erase_front`         | FilledRandom | EraseFront           | medium | us   | shrink                           |
//! | `erase_middle`        | FilledRandom | EraseMiddle          | medium | us   | shrink                           |
//! | `erase_back`          | FilledRandom | EraseBack            | medium | us   | shrink                           |
//! | `destruction`         | SmartFilled  | SmartDelete          | large  | us   |                                  |
//! | `erase1`              | FilledRandom | RandomErase 1%       | medium | us   | shrink                           |
//! | `erase10`             | FilledRandom | RandomErase 10%      | medium | us   | shrink                           |
//! | `erase25`             | FilledRandom | RandomErase 25%      | medium | us   |                                  |
//! | `erase50`             | FilledRandom | RandomErase 50%      | medium | us   |                                  |
//! | `erase_full`          | FilledRandom | FullErase            | medium | us   | shrink                           |
//! | `sort`                | FilledRandom | Sort                 | large  | ms   | full suite only                  |
//! | `find`                | FilledRandom | Find                 | medium | us   | full suite only                  |
//! | `number_crunching`    | Empty        | RandomSortedInsert   | medium | ms   | full suite only                  |
//!
//! Every family runs every container kind. Kinds that cannot express an
//! operation report it as not applicable and get no series.

use seqbench::element::{
    Element, NonTrivialArrayMedium, NonTrivialString, TrivialHuge, TrivialLarge, TrivialMedium,
    TrivialMonster, TrivialSmall,
};
use seqbench::policy::operation::{
    EmplaceBack, EmplaceFront, Erase, EraseBack, EraseFront, EraseMiddle, FastestAddition,
    FillBack, FillFront, Find, FullErase, Insert, Iterate, IterateAndClear, RandomErase,
    RandomSortedInsert, RemoveErase, ReserveSize, SmartDelete, Sort, Write,
};
use seqbench::policy::setup::{Empty, FilledRandom, SmartFilled};
use seqbench::policy::shrink;
use seqbench::traits::SequenceContainer;
use tracing::info;

use crate::config::RunConfig;
use crate::driver::Campaign;
use crate::report::{Report, TimeUnit};

// ============================================================================
// Element Registry
// ============================================================================

/// An element type with the name used in graph titles and `BENCH_TYPES`.
pub trait BenchElement: Element {
    const NAME: &'static str;
}

macro_rules! bench_element {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(impl BenchElement for $ty {
            const NAME: &'static str = $name;
        })+
    };
}

bench_element! {
    TrivialSmall => "TrivialSmall",
    TrivialMedium => "TrivialMedium",
    TrivialLarge => "TrivialLarge",
    TrivialHuge => "TrivialHuge",
    TrivialMonster => "TrivialMonster",
    NonTrivialString => "NonTrivialString",
    NonTrivialArrayMedium => "NonTrivialArray",
}

/// Executes monomorphic code for each registered element type.
///
/// # Usage
///
/// ```ignore
/// for_each_element! {
///     with |Elem| {
///         run_fast::<Elem>(&mut report, &config);
///     }
/// }
/// ```
///
/// The body is expanded once per type with `Elem` bound as a type alias.
#[macro_export]
macro_rules! for_each_element {
    (with |$ty:ident| $body:block) => {{
        {
            type $ty = seqbench::element::TrivialSmall;
            $body
        }
        {
            type $ty = seqbench::element::TrivialMedium;
            $body
        }
        {
            type $ty = seqbench::element::TrivialLarge;
            $body
        }
        {
            type $ty = seqbench::element::TrivialHuge;
            $body
        }
        {
            type $ty = seqbench::element::TrivialMonster;
            $body
        }
        {
            type $ty = seqbench::element::NonTrivialString;
            $body
        }
        {
            type $ty = seqbench::element::NonTrivialArrayMedium;
            $body
        }
    }};
}

// ============================================================================
// Size Ladders
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    /// 1 000 to 10 000.
    Small,
    /// 10 000 to 100 000.
    Medium,
    /// 100 000 to 1 000 000.
    Large,
}

impl Ladder {
    /// Ten evenly spaced sizes, each divided by `divisor` (at least 1).
    pub fn sizes(self, divisor: usize) -> Vec<usize> {
        let step = match self {
            Ladder::Small => 1_000,
            Ladder::Medium => 10_000,
            Ladder::Large => 100_000,
        };
        let divisor = divisor.max(1);
        (1..=10).map(|i| (i * step / divisor).max(1)).collect()
    }
}

// ============================================================================
// Family Registry
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    FastestInsertion,
    FillBack,
    EmplaceBack,
    FillFront,
    EmplaceFront,
    LinearSearch,
    Traversal,
    TraversalAndClear,
    Write,
    RandomInsert,
    RandomRemove,
    EraseFront,
    EraseMiddle,
    EraseBack,
    Destruction,
    Erase1,
    Erase10,
    Erase25,
    Erase50,
    EraseFull,
    Sort,
    Find,
    NumberCrunching,
}

impl Family {
    /// The fast suite, in run order.
    pub const FAST: [Family; 20] = [
        Family::FastestInsertion,
        Family::FillFront,
        Family::FillBack,
        Family::EmplaceBack,
        Family::EmplaceFront,
        Family::LinearSearch,
        Family::Traversal,
        Family::TraversalAndClear,
        Family::Write,
        Family::RandomInsert,
        Family::RandomRemove,
        Family::EraseFront,
        Family::EraseMiddle,
        Family::EraseBack,
        Family::Destruction,
        Family::Erase1,
        Family::Erase10,
        Family::Erase25,
        Family::Erase50,
        Family::EraseFull,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Family::FastestInsertion => "fastest_insertion",
            Family::FillBack => "fill_back",
            Family::EmplaceBack => "emplace_back",
            Family::FillFront => "fill_front",
            Family::EmplaceFront => "emplace_front",
            Family::LinearSearch => "linear_search",
            Family::Traversal => "traversal",
            Family::TraversalAndClear => "traversal_and_clear",
            Family::Write => "write",
            Family::RandomInsert => "random_insert",
            Family::RandomRemove => "random_remove",
            Family::EraseFront => "erase_front",
            Family::EraseMiddle => "erase_middle",
            Family::EraseBack => "erase_back",
            Family::Destruction => "destruction",
            Family::Erase1 => "erase1",
            Family::Erase10 => "erase10",
            Family::Erase25 => "erase25",
            Family::Erase50 => "erase50",
            Family::EraseFull => "erase_full",
            Family::Sort => "sort",
            Family::Find => "find",
            Family::NumberCrunching => "number_crunching",
        }
    }

    pub const fn unit(self) -> TimeUnit {
        match self {
            Family::RandomInsert | Family::Sort | Family::NumberCrunching => TimeUnit::Millis,
            _ => TimeUnit::Micros,
        }
    }

    pub const fn ladder(self) -> Ladder {
        match self {
            Family::FastestInsertion
            | Family::FillBack
            | Family::EmplaceBack
            | Family::Destruction
            | Family::Sort => Ladder::Large,
            Family::LinearSearch => Ladder::Small,
            _ => Ladder::Medium,
        }
    }
}

/// Runs `$op` after `$setup` on all four kinds, in report order.
macro_rules! bench_kinds {
    (@one $campaign:ident, $c:ty, $sizes:expr, $setup:expr, $op:expr) => {
        let label = <$c as SequenceContainer>::KIND.label();
        let _ = $campaign.bench::<$c, _, _>(label, $sizes, $setup, $op);
    };
    ($campaign:ident, $t:ty, $sizes:expr, $setup:expr, $op:expr) => {{
        bench_kinds!(@one $campaign, Vec<$t>, $sizes, $setup, $op);
        bench_kinds!(@one $campaign, std::collections::LinkedList<$t>, $sizes, $setup, $op);
        bench_kinds!(@one $campaign, seqbench::ds::ForwardList<$t>, $sizes, $setup, $op);
        bench_kinds!(@one $campaign, std::collections::VecDeque<$t>, $sizes, $setup, $op);
    }};
}

/// The `"vector shrink"` and `"deque shrink"` series of an erasing family.
macro_rules! bench_shrink {
    ($campaign:ident, $t:ty, $suffix:literal, $sizes:expr, $op:expr) => {{
        let _ = $campaign.bench::<Vec<$t>, _, _>(
            concat!("vector ", $suffix),
            $sizes,
            FilledRandom,
            shrink::<Vec<$t>, _>($op),
        );
        let _ = $campaign.bench::<std::collections::VecDeque<$t>, _, _>(
            concat!("deque ", $suffix),
            $sizes,
            FilledRandom,
            shrink::<std::collections::VecDeque<$t>, _>($op),
        );
    }};
}

/// Runs one family for element type `T` as a new graph.
///
/// Returns `false` without touching `report` when the family is disabled.
pub fn run_family<T: BenchElement>(family: Family, report: &mut Report, config: &RunConfig) -> bool {
    if !config.is_enabled(family.name()) {
        return false;
    }
    let sizes = family.ladder().sizes(config.size_divisor);
    let sizes = sizes.as_slice();

    let mut campaign = Campaign::<T>::new(report, config.repeat);
    campaign.new_graph(T::NAME, family.name(), family.unit());

    match family {
        Family::FastestInsertion => {
            bench_kinds!(campaign, T, sizes, Empty, FastestAddition);
            let _ = campaign.bench::<Vec<T>, _, _>(
                "vector reserve",
                sizes,
                Empty,
                (ReserveSize, FastestAddition),
            );
        },
        Family::FillBack => {
            bench_kinds!(campaign, T, sizes, Empty, FillBack);
            let _ = campaign.bench::<Vec<T>, _, _>("vector reserve", sizes, Empty, (ReserveSize, FillBack));
        },
        Family::EmplaceBack => {
            bench_kinds!(campaign, T, sizes, Empty, EmplaceBack);
            let _ =
                campaign.bench::<Vec<T>, _, _>("vector reserve", sizes, Empty, (ReserveSize, EmplaceBack));
        },
        Family::FillFront | Family::EmplaceFront => {
            // front insertion into a vector is quadratic; only small elements
            if size_of::<T>() <= size_of::<usize>() {
                if family == Family::FillFront {
                    let _ = campaign.bench::<Vec<T>, _, _>("vector", sizes, Empty, FillFront);
                } else {
                    let _ = campaign.bench::<Vec<T>, _, _>("vector", sizes, Empty, EmplaceFront);
                }
            }
            let _ = front_fill_nodes::<T>(&mut campaign, sizes, family == Family::FillFront);
        },
        Family::LinearSearch | Family::Find => bench_kinds!(campaign, T, sizes, FilledRandom, Find),
        Family::Traversal => bench_kinds!(campaign, T, sizes, FilledRandom, Iterate),
        Family::TraversalAndClear => {
            bench_kinds!(campaign, T, sizes, FilledRandom, IterateAndClear);
            bench_shrink!(campaign, T, "shrink", sizes, IterateAndClear);
        },
        Family::Write => bench_kinds!(campaign, T, sizes, FilledRandom, Write),
        Family::RandomInsert => bench_kinds!(campaign, T, sizes, FilledRandom, Insert),
        Family::RandomRemove => {
            bench_kinds!(campaign, T, sizes, FilledRandom, Erase);
            bench_shrink!(campaign, T, "shrink", sizes, Erase);
            let _ = campaign.bench::<Vec<T>, _, _>("vector rem", sizes, FilledRandom, RemoveErase);
            let _ = campaign.bench::<std::collections::LinkedList<T>, _, _>(
                "list rem",
                sizes,
                FilledRandom,
                RemoveErase,
            );
            let _ = campaign.bench::<seqbench::ds::ForwardList<T>, _, _>(
                "forward_list rem",
                sizes,
                FilledRandom,
                RemoveErase,
            );
            let _ = campaign.bench::<std::collections::VecDeque<T>, _, _>(
                "deque rem",
                sizes,
                FilledRandom,
                RemoveErase,
            );
            bench_shrink!(campaign, T, "rem shrink", sizes, RemoveErase);
        },
        Family::EraseFront => {
            bench_kinds!(campaign, T, sizes, FilledRandom, EraseFront);
            bench_shrink!(campaign, T, "shrink", sizes, EraseFront);
        },
        Family::EraseMiddle => {
            bench_kinds!(campaign, T, sizes, FilledRandom, EraseMiddle);
            bench_shrink!(campaign, T, "shrink", sizes, EraseMiddle);
        },
        Family::EraseBack => {
            bench_kinds!(campaign, T, sizes, FilledRandom, EraseBack);
            bench_shrink!(campaign, T, "shrink", sizes, EraseBack);
        },
        Family::Destruction => bench_kinds!(campaign, T, sizes, SmartFilled, SmartDelete),
        Family::Erase1 => {
            bench_kinds!(campaign, T, sizes, FilledRandom, RandomErase::one_percent());
            bench_shrink!(campaign, T, "shrink", sizes, RandomErase::one_percent());
        },
        Family::Erase10 => {
            bench_kinds!(campaign, T, sizes, FilledRandom, RandomErase::ten_percent());
            bench_shrink!(campaign, T, "shrink", sizes, RandomErase::ten_percent());
        },
        Family::Erase25 => bench_kinds!(campaign, T, sizes, FilledRandom, RandomErase::quarter()),
        Family::Erase50 => bench_kinds!(campaign, T, sizes, FilledRandom, RandomErase::half()),
        Family::EraseFull => {
            bench_kinds!(campaign, T, sizes, FilledRandom, FullErase);
            bench_shrink!(campaign, T, "shrink", sizes, FullErase);
        },
        Family::Sort => bench_kinds!(campaign, T, sizes, FilledRandom, Sort),
        Family::NumberCrunching => bench_kinds!(campaign, T, sizes, Empty, RandomSortedInsert::new()),
    }

    let benches = campaign.finish();
    info!(event = "family_done", family = family.name(), element = T::NAME, benches);
    true
}

/// Front insertion on list, forward_list and deque, in report order.
fn front_fill_nodes<T: BenchElement>(campaign: &mut Campaign<'_, T>, sizes: &[usize], clone: bool) -> usize {
    use std::collections::{LinkedList, VecDeque};

    use seqbench::ds::ForwardList;

    if clone {
        campaign.bench::<LinkedList<T>, _, _>("list", sizes, Empty, FillFront)
            + campaign.bench::<ForwardList<T>, _, _>("forward_list", sizes, Empty, FillFront)
            + campaign.bench::<VecDeque<T>, _, _>("deque", sizes, Empty, FillFront)
    } else {
        campaign.bench::<LinkedList<T>, _, _>("list", sizes, Empty, EmplaceFront)
            + campaign.bench::<ForwardList<T>, _, _>("forward_list", sizes, Empty, EmplaceFront)
            + campaign.bench::<VecDeque<T>, _, _>("deque", sizes, Empty, EmplaceFront)
    }
}

// ============================================================================
// Suites
// ============================================================================

/// Every fast family for one element type. Returns the number of graphs.
pub fn run_fast<T: BenchElement>(report: &mut Report, config: &RunConfig) -> usize {
    Family::FAST
        .into_iter()
        .filter(|&family| run_family::<T>(family, report, config))
        .count()
}

/// The full suite: every fast family for every element type, family by
/// family, then the slow families. `find` runs on the three smallest trivial
/// types and `number_crunching` on the two smallest only.
pub fn run_all(report: &mut Report, config: &RunConfig) -> usize {
    let mut graphs = 0;
    for family in Family::FAST.into_iter().chain([Family::Sort]) {
        for_each_element! {
            with |Elem| {
                graphs += usize::from(run_family::<Elem>(family, report, config));
            }
        }
    }
    graphs += usize::from(run_family::<TrivialSmall>(Family::Find, report, config));
    graphs += usize::from(run_family::<TrivialMedium>(Family::Find, report, config));
    graphs += usize::from(run_family::<TrivialLarge>(Family::Find, report, config));
    graphs += usize::from(run_family::<TrivialSmall>(Family::NumberCrunching, report, config));
    graphs += usize::from(run_family::<TrivialMedium>(Family::NumberCrunching, report, config));
    graphs
}

/// Entry point: the full suite when `types` is exactly `["full"]`,
/// otherwise the fast suite for each enabled element type.
pub fn run_suite(report: &mut Report, config: &RunConfig) -> usize {
    if config.is_full() {
        return run_all(report, config);
    }
    let mut graphs = 0;
    for_each_element! {
        with |Elem| {
            if config.type_enabled(<Elem as BenchElement>::NAME) {
                graphs += run_fast::<Elem>(report, config);
            }
        }
    }
    graphs
}
