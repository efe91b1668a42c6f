//! seqbench: capability-aware setup and operation policies for benchmarking
//! sequence containers.
//!
//! Four container kinds are under test: `Vec`, `VecDeque`, `LinkedList`, and
//! the singly linked [`ForwardList`](ds::ForwardList). Every policy is
//! generic over [`SequenceContainer`](traits::SequenceContainer) and picks
//! the native idiom of each kind from its capability set at compile time.
//!
//! ```
//! use std::collections::LinkedList;
//!
//! use seqbench::prelude::*;
//!
//! let mut pool = ValuePool::<TrivialSmall>::new();
//! let mut list = Setup::<LinkedList<TrivialSmall>>::make(&mut FilledRandom, 100, &mut pool);
//! assert!(Sort.run(&mut list, 100, &pool).is_applied());
//! assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
//! ```
//!
//! The timing driver, report writer, and benchmark families live in the
//! `bench-support` workspace member.

pub mod cache;
pub mod container;
pub mod ds;
pub mod element;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;
