pub mod math {
    use invariant_core::{Outcome, Presence};
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// Errors reported by the mock math operations.
    #[derive(Debug, Clone, PartialEq, Eq, Error, Presence, Serialize, Deserialize)]
    pub enum MathError {
        #[error("division by zero")]
        DivisionByZero,
        #[error("{context}: {source}")]
        Context {
            context: String,
            source: Box<MathError>,
        },
    }

    impl MathError {
        /// Wraps this error with a leading context message.
        #[must_use]
        pub fn context(self, context: impl Into<String>) -> Self {
            Self::Context {
                context: context.into(),
                source: Box::new(self),
            }
        }
    }

    /// Divides `x` by `y`, failing when `y` is zero.
    pub fn divide(x: f64, y: f64) -> Outcome<f64, MathError> {
        if y == 0.0 {
            Outcome::failure(MathError::DivisionByZero)
        } else {
            Outcome::success(x / y)
        }
    }
}

pub mod lookup {
    use std::fmt;

    use invariant_core::Presence;

    /// An error whose cause may be missing.
    ///
    /// A `MissingCause` with no message is present as a value but represents
    /// no failure at all, so it reports itself as absent.
    #[derive(Debug, Clone, PartialEq)]
    pub struct MissingCause(pub Option<String>);

    impl fmt::Display for MissingCause {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0.as_deref().unwrap_or("<unknown>"))
        }
    }

    impl Presence for MissingCause {
        fn is_absent(&self) -> bool {
            self.0.is_none()
        }
    }
}
