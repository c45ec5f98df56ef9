#[cfg(feature = "serde-derive")]
mod serialize;

use std::fmt::Display;

use crate::{
    Presence,
    violation::{Violation, violated},
};

/// Holds exactly one of a success value or a failure value.
///
/// An `Outcome` is created only through [`Outcome::success`] or
/// [`Outcome::failure`], and both reject an absent payload (as judged by
/// [`Presence`](trait@Presence)).
/// An `Outcome` therefore never reports success with nothing in it, and never
/// reports failure without a cause.
///
/// The failure type `E` must implement [`Display`] so that a misuse such as
/// [`Outcome::unwrap`] on a failure can describe what went wrong.
///
/// Instances are never mutated in place.
/// [`Outcome::map`] and [`Outcome::map_failure`] consume the instance and
/// return a new one in the same state.
/// Both are restricted to transformations that keep the payload type.
///
/// # Examples
///
/// ```
/// use invariant_core::Outcome;
///
/// let doubled = Outcome::<i32, String>::success(5).map(|x| x * 2);
/// assert_eq!(doubled.unwrap(), 10);
///
/// let failed = Outcome::<f64, String>::failure("division by zero".into());
/// assert_eq!(failed.unwrap_or(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T, E>(Branch<T, E>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
enum Branch<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E>
where
    T: Presence,
    E: Display + Presence,
{
    /// Creates a successful outcome.
    ///
    /// # Panics
    ///
    /// Panics if `value` is absent.
    #[track_caller]
    pub fn success(value: T) -> Self {
        Self::validated(Branch::Success(value))
    }

    /// Creates a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics if `error` is absent, including an error type that reports
    /// absence hidden behind a present wrapper.
    #[track_caller]
    pub fn failure(error: E) -> Self {
        Self::validated(Branch::Failure(error))
    }

    /// Converts a standard [`Result`], validating its payload.
    ///
    /// # Panics
    ///
    /// Panics if the `Ok` value or the `Err` value is absent.
    #[track_caller]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Applies `f` to a success value and checks the result for absence.
    ///
    /// A failure is returned unchanged and `f` is not called.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns an absent value.
    #[must_use]
    #[track_caller]
    pub fn map(self, f: impl FnOnce(T) -> T) -> Self {
        match self.0 {
            Branch::Success(value) => {
                let value = f(value);
                if value.is_absent() {
                    violated(Violation::MapProducedAbsentValue);
                }
                Self(Branch::Success(value))
            }
            Branch::Failure(error) => Self(Branch::Failure(error)),
        }
    }

    /// Applies `f` to a failure value and checks the result for absence.
    ///
    /// A success is returned unchanged and `f` is not called.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns an absent error.
    #[must_use]
    #[track_caller]
    pub fn map_failure(self, f: impl FnOnce(E) -> E) -> Self {
        match self.0 {
            Branch::Success(value) => Self(Branch::Success(value)),
            Branch::Failure(error) => {
                let error = f(error);
                if error.is_absent() {
                    violated(Violation::MapFailureProducedAbsentError);
                }
                Self(Branch::Failure(error))
            }
        }
    }

    fn validate(branch: Branch<T, E>) -> Result<Self, Violation> {
        match &branch {
            Branch::Success(value) if value.is_absent() => Err(Violation::AbsentValue),
            Branch::Failure(error) if error.is_absent() => Err(Violation::AbsentError),
            _ => Ok(Self(branch)),
        }
    }

    #[track_caller]
    fn validated(branch: Branch<T, E>) -> Self {
        match Self::validate(branch) {
            Ok(outcome) => outcome,
            Err(violation) => violated(violation),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this outcome holds a success value.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.0, Branch::Success(_))
    }

    /// Returns `true` if this outcome holds a failure value.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, or `default` if this is a failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self.0 {
            Branch::Success(value) => value,
            Branch::Failure(_) => default,
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self.0 {
            Branch::Success(_) => violated(Violation::UnwrapFailureOnSuccess),
            Branch::Failure(error) => error,
        }
    }

    /// Calls exactly one of the two handlers with the held payload.
    pub fn match_with(self, on_success: impl FnOnce(T), on_failure: impl FnOnce(E)) {
        match self.0 {
            Branch::Success(value) => on_success(value),
            Branch::Failure(error) => on_failure(error),
        }
    }
}

impl<T, E: Display> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// Reserve this for places where a failure is a programming error.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure, with the failure's display text in the
    /// message.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.0 {
            Branch::Success(value) => value,
            Branch::Failure(error) => violated(Violation::UnwrapOnFailure(error.to_string())),
        }
    }
}

/// An outcome always holds a present payload, so outcomes can nest.
impl<T, E> Presence for Outcome<T, E> {}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome.0 {
            Branch::Success(value) => Ok(value),
            Branch::Failure(error) => Err(error),
        }
    }
}
