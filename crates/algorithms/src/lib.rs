//! Stream cipher keystream engines
//!
//! This crate implements ChaCha20, Salsa20 and RC4 as deterministic keystream
//! generators combined with data by XOR. The engines work on fixed-size,
//! stack-allocated state and never allocate; the crate is usable in both
//! `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Key material held in zeroizing containers
//! - Block-function working state wiped after every block
//! - Buffered keystream wiped on drop, reset and seek
//! - Constant-time nonce comparison
//!
//! Nothing in this crate logs or prints keys, state or keystream.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Type-safe nonces and secret containers
pub mod types;
pub use types::Nonce;

// Stream cipher implementations
pub mod stream;
pub use stream::{BlockGenerator, Keystream, SeekableStreamCipher, StreamCipher};

#[cfg(feature = "chacha")]
pub use stream::chacha::chacha20::ChaCha20;
#[cfg(feature = "rc4")]
pub use stream::rc4::{Rc4, Rc4Phase};
#[cfg(feature = "salsa")]
pub use stream::salsa::salsa20::Salsa20;
