//! Secret-holding types
//!
//! Keys, working state matrices and keystream blocks live in these wrappers
//! so they are wiped when the owning context goes away.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
