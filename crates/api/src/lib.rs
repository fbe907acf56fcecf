//! Public API types for the streamcore library
//!
//! This crate provides the error surface shared by every streamcore crate:
//! the [`Error`] enum, the [`Result`] alias, the [`ResultExt`] extension
//! trait, and the boundary validation helpers in [`error::validate`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use error::validate;
