//! Type-safe wrappers for cryptographic inputs
//!
//! Nonce sizes are part of the type, so a ChaCha20 context cannot be built
//! from a Salsa20-sized nonce and vice versa.

pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

pub use nonce::Nonce;

// Re-export security types from streamcore-common
pub use streamcore_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
