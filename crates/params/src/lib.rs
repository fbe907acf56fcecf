//! Constant values for streamcore cryptographic operations
//!
//! This crate holds the sizes, round counts and fixed state words shared by
//! the stream cipher engines. It has no dependencies and is always `no_std`.

#![no_std]

pub mod utils;

pub use utils::symmetric;
