use thiserror::Error;

/// A broken construction or access guarantee of [`NonNullRef`] or [`Outcome`].
///
/// Violations are programming defects, not operational conditions.
/// The panicking API formats a `Violation` into its panic message, so callers
/// never receive one as a value and should not try to recover from it.
/// The only place a `Violation` surfaces as a returned error is
/// deserialization, where the offending data came from outside the program.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
///
/// [`NonNullRef`]: crate::NonNullRef
/// [`Outcome`]: crate::Outcome
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Violation {
    /// `NonNullRef::new` received `None`.
    #[error("NonNullRef::new: absent reference provided")]
    AbsentReference,

    /// `Outcome::success` received an absent value.
    #[error("Outcome::success: absent value provided")]
    AbsentValue,

    /// `Outcome::failure` received an absent error.
    #[error("Outcome::failure: absent error provided")]
    AbsentError,

    /// The function given to `Outcome::map` returned an absent value.
    #[error("Outcome::map: mapping produced an absent value")]
    MapProducedAbsentValue,

    /// The function given to `Outcome::map_failure` returned an absent error.
    #[error("Outcome::map_failure: mapping produced an absent error")]
    MapFailureProducedAbsentError,

    /// `unwrap` was called on a failure, carrying the displayed failure payload.
    #[error("Outcome::unwrap: called on a failure value: {0}")]
    UnwrapOnFailure(String),

    /// `unwrap_failure` was called on a success.
    #[error("Outcome::unwrap_failure: called on a success value")]
    UnwrapFailureOnSuccess,
}

/// Reports `violation` and panics with its message.
#[cold]
#[track_caller]
pub(crate) fn violated(violation: Violation) -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(%violation, %location, "invariant violated");
    panic!("{violation}");
}
