//! # Operation Policies
//!
//! The timed unit of work of a benchmark.
//!
//! ## Families
//!
//! | Module      | Policies                                                            |
//! |-------------|---------------------------------------------------------------------|
//! | [`fill`]    | `NoOp`, `ReserveSize`, `FillBack`, `InsertSimple`, `EmplaceBack`,   |
//! |             | `FillBackInserter`, `FastestAddition`, `FillFront`, `EmplaceFront`, |
//! |             | `FillBackBackup`, `FastestAdditionBackup`                           |
//! | [`lookup`]  | `Find`, `Insert`, `Write`, `Iterate`, `IterateAndClear`             |
//! | [`erase`]   | `Erase`, `RemoveErase`, `EraseFront`, `EraseMiddle`, `EraseBack`,   |
//! |             | the `*Swap` variants, `FullErase`, `SmartDelete`                    |
//! | [`reorder`] | `Sort`, `Reverse`                                                   |
//! | [`random`]  | `RandomSortedInsert`, `RandomErase`                                 |
//!
//! ## Sequencing
//!
//! Tuples of up to four operations run their members left to right against
//! the same target. Every member is checked against the starting target
//! first, so a statically inapplicable member leaves the target untouched.
//! A member that only refuses at run time (`SmartDelete` on an empty slot)
//! stops the sequence; earlier members have already run by then. The tuple
//! is applied only if every member was:
//!
//! ```
//! use seqbench::cache::ValuePool;
//! use seqbench::element::TrivialSmall;
//! use seqbench::policy::operation::{FastestAddition, Operation, ReserveSize};
//!
//! let pool = ValuePool::<TrivialSmall>::new();
//! let mut values: Vec<TrivialSmall> = Vec::new();
//! let outcome = (ReserveSize, FastestAddition).run(&mut values, 100, &pool);
//! assert!(outcome.is_applied());
//! assert_eq!(values.len(), 100);
//! ```
//!
//! ## Gating
//!
//! Capability checks happen inside each policy. A policy whose kind lacks the
//! capability returns `NotApplicable` before touching the container:
//!
//! | Gate                     | Policies                                                    |
//! |--------------------------|-------------------------------------------------------------|
//! | `supports_push_back`     | `FillBack`, `EmplaceBack`, `FillBackInserter`, `FillBackBackup` |
//! | `supports_random_insert` | `InsertSimple`, `Insert`, `RandomSortedInsert`              |
//! | `has_back_access`        | `EraseFrontSwap`, `EraseMiddleSwap`, `EraseBackSwap`        |
//! | `supports_reserve`       | `ReserveSize`                                               |

pub mod erase;
pub mod fill;
pub mod lookup;
pub mod random;
pub mod reorder;

pub use erase::{
    Erase, EraseBack, EraseBackSwap, EraseFront, EraseFrontSwap, EraseMiddle, EraseMiddleSwap,
    FullErase, RemoveErase, SmartDelete,
};
pub use fill::{
    EmplaceBack, EmplaceFront, FastestAddition, FastestAdditionBackup, FillBack, FillBackBackup,
    FillBackInserter, FillFront, InsertSimple, NoOp, ReserveSize,
};
pub use lookup::{Find, Insert, Iterate, IterateAndClear, Write};
pub use random::{RandomErase, RandomSortedInsert};
pub use reorder::{Reverse, Sort};

use crate::cache::ValuePool;
use crate::traits::Outcome;

/// Number of keyed lookups performed by [`Insert`] and [`Erase`].
pub const KEYED_LOOKUPS: usize = 1000;

/// A timed unit of work against a target of type `X` holding `T` values.
///
/// `X` is usually the container itself; smart setups hand out
/// `Option<Box<C>>` instead.
pub trait Operation<X, T> {
    /// Returns `false` when [`run`](Self::run) would report `NotApplicable`
    /// for this target, without touching it.
    ///
    /// Composites call this on every member before running any of them.
    fn check(&self, target: &X, size: usize, pool: &ValuePool<T>) -> bool {
        let _ = (target, size, pool);
        true
    }

    /// Runs the work for a trial of `size`. `pool` exposes backups primed by
    /// the setup.
    fn run(&mut self, target: &mut X, size: usize, pool: &ValuePool<T>) -> Outcome;
}

macro_rules! impl_operation_tuple {
    ($($name:ident),+) => {
        impl<X, T, $($name),+> Operation<X, T> for ($($name,)+)
        where
            $($name: Operation<X, T>,)+
        {
            #[allow(non_snake_case)]
            fn check(&self, target: &X, size: usize, pool: &ValuePool<T>) -> bool {
                let ($($name,)+) = self;
                true $(&& $name.check(target, size, pool))+
            }

            #[allow(non_snake_case)]
            fn run(&mut self, target: &mut X, size: usize, pool: &ValuePool<T>) -> Outcome {
                if !Operation::<X, T>::check(&*self, &*target, size, pool) {
                    return Outcome::NotApplicable;
                }
                let ($($name,)+) = self;
                $(
                    if !$name.run(target, size, pool).is_applied() {
                        return Outcome::NotApplicable;
                    }
                )+
                Outcome::Applied
            }
        }
    };
}

impl_operation_tuple!(A, B);
impl_operation_tuple!(A, B, C);
impl_operation_tuple!(A, B, C, D);
