//! Types that enforce their invariants once, at construction.
//!
//! This crate moves "is this present?" checks to the single point where a
//! value is created, so every downstream consumer can rely on the answer:
//!
//! - [`NonNullRef`]: a non-owning reference to shared storage that is
//!   guaranteed to exist
//! - [`Outcome`]: exactly one of a success value or a failure value, with
//!   combinators that preserve that guarantee
//! - [`Presence`](trait@Presence): the capability both rely on to recognize an absent value,
//!   including absence hidden behind a present wrapper
//!
//! Breaking one of these guarantees is a programming defect and panics.
//! The panic message comes from the matching [`Violation`], and each violation
//! is also reported as a `tracing` error event.

mod non_null_ref;
mod outcome;
mod presence;
mod violation;

pub use non_null_ref::NonNullRef;
pub use outcome::Outcome;
pub use presence::Presence;
pub use violation::Violation;

#[cfg(feature = "macros")]
pub use invariant_macros::Presence;
