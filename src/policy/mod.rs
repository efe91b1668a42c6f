//! # Benchmark Policies
//!
//! A benchmark is a setup policy that builds the initial container (untimed)
//! followed by one or more operation policies (timed).
//!
//! ```text
//!   ┌───────────────────┐   Output    ┌────────────────────────┐
//!   │ Setup<C>          │ ──────────► │ Operation<Output, T>   │ ──► Outcome
//!   │  make(size, pool) │             │  run(&mut c, size, ..) │
//!   │  clean(pool)      │             └────────────────────────┘
//!   └───────────────────┘                        ▲
//!            │ primes                            │ reads backups
//!            ▼                                   │
//!   ┌──────────────────────────────────────────────────────────┐
//!   │ ValuePool<T> { ascending, shuffled }                     │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`setup`]     | `Empty`, `Filled*`, backup and smart setups             |
//! | [`operation`] | the timed units of work, and tuple sequencing           |
//! | [`decorator`] | `Shrink`: capacity compaction after an operation        |
//!
//! Policies never fail. A policy that the container kind cannot express
//! returns [`Outcome::NotApplicable`](crate::traits::Outcome) and leaves the
//! container as it was.

pub mod decorator;
pub mod operation;
pub mod setup;

pub use decorator::{Shrink, shrink};
pub use operation::Operation;
pub use setup::Setup;
