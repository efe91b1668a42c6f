//! Post-action decorators for operation policies.
//!
//! [`Shrink`] runs an inner operation and then compacts the container's
//! capacity, inside the timed region. The benchmark families put it behind
//! their erasing operations to measure erase plus release.
//!
//! ```
//! use seqbench::cache::ValuePool;
//! use seqbench::element::{Element, TrivialSmall};
//! use seqbench::policy::operation::{EraseBack, Operation};
//! use seqbench::policy::shrink;
//!
//! let pool = ValuePool::<TrivialSmall>::new();
//! let mut values: Vec<TrivialSmall> = (0..64).map(TrivialSmall::from_key).collect();
//! values.reserve(1000);
//!
//! let mut op = shrink::<Vec<TrivialSmall>, _>(EraseBack);
//! assert!(op.run(&mut values, 64, &pool).is_applied());
//! assert!(values.capacity() < 1000);
//! ```
//!
//! Kinds without capacity (`supports_shrink == false`) get `NotApplicable`
//! before the inner operation runs, so the container is left as it was.

use std::fmt;
use std::marker::PhantomData;

use crate::cache::ValuePool;
use crate::traits::{Outcome, SequenceContainer};

use super::operation::Operation;

/// `inner` followed by [`SequenceContainer::shrink_to_fit`] on a `C`.
pub struct Shrink<P, C> {
    inner: P,
    kind: PhantomData<fn(&mut C)>,
}

impl<P, C> Shrink<P, C> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            kind: PhantomData,
        }
    }
}

impl<P: fmt::Debug, C> fmt::Debug for Shrink<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shrink").field("inner", &self.inner).finish()
    }
}

impl<C, P> Operation<C, C::Item> for Shrink<P, C>
where
    C: SequenceContainer,
    P: Operation<C, C::Item>,
{
    fn check(&self, container: &C, size: usize, pool: &ValuePool<C::Item>) -> bool {
        C::CAPS.supports_shrink && self.inner.check(container, size, pool)
    }

    fn run(&mut self, container: &mut C, size: usize, pool: &ValuePool<C::Item>) -> Outcome {
        if !C::CAPS.supports_shrink || !self.inner.check(&*container, size, pool) {
            return Outcome::NotApplicable;
        }
        let outcome = self.inner.run(container, size, pool);
        if !outcome.is_applied() {
            return outcome;
        }
        container.shrink_to_fit()
    }
}

/// Decorates `inner` with a trailing capacity compaction of a `C`.
pub fn shrink<C: SequenceContainer, P>(inner: P) -> Shrink<P, C> {
    Shrink::new(inner)
}
