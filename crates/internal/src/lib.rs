//! Internal utilities shared by the streamcore crates
//!
//! Not part of the public API surface; only the word/byte conversions the
//! cipher cores need live here.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod endian;
