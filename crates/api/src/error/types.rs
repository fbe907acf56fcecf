//! Error type definitions for stream cipher operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for streamcore operations
///
/// Every variant carries a static context naming the input or operation that
/// was rejected. With `std` enabled, most variants also carry a free-form
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material was rejected
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A buffer, key or nonce had the wrong length
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A non-length parameter was out of range
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The requested feature is not compiled in or not supported
    NotImplemented { feature: &'static str },

    /// Anything else
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for streamcore operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::Other {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// Attach a message to an existing error (when std is available)
    ///
    /// Variants without a message slot are returned unchanged.
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
            other @ (Self::InvalidLength { .. } | Self::NotImplemented { .. }) => other,
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
            Self::NotImplemented { feature } => feature,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } if !message.is_empty() => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidKey { context, .. } => write!(f, "Invalid key: {}", context),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            Self::NotImplemented { feature } => write!(f, "{} is not implemented", feature),
            #[cfg(feature = "std")]
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
