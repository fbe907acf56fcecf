//! Common implementations and shared functionality for the streamcore library
//!
//! This crate provides the zeroizing containers used by the cipher engines to
//! hold keys, working state and buffered keystream.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
