//! Error handling for the stream cipher primitives

use core::fmt;

use streamcore_api::Error as CoreError;

/// The error type for the stream cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected (or bounding) length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Feature not compiled in
    NotImplemented {
        /// Name of the unavailable feature
        feature: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for stream cipher primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::NotImplemented { feature } => write!(f, "Feature not implemented: {}", feature),
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter {
                name,
                reason: _reason,
            } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: _reason.into(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NotImplemented { feature } => CoreError::NotImplemented { feature },
            Error::Other(_msg) => CoreError::Other {
                context: "algorithms",
                #[cfg(feature = "std")]
                message: _msg.into(),
            },
        }
    }
}

/// Convert a primitives result into an api result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> streamcore_api::Result<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
