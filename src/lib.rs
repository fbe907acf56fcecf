//! # streamcore
//!
//! Keystream engines for the ChaCha20, Salsa20 and RC4 stream ciphers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! streamcore = "0.4"
//! ```
//!
//! ```
//! use streamcore::prelude::*;
//!
//! let key = [0x42u8; 32];
//! let nonce = Nonce::<12>::new([0x24; 12]);
//!
//! let mut data = *b"attack at dawn";
//! ChaCha20::new(&key, &nonce).encrypt(&mut data);
//! ChaCha20::new(&key, &nonce).decrypt(&mut data);
//! assert_eq!(&data, b"attack at dawn");
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and OS randomness for nonces
//! - `alloc`: the `Vec`-returning `xcrypt` helpers
//! - `chacha`, `salsa`, `rc4` (default): the cipher families
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`streamcore-api`]: Error type and boundary validation
//! - [`streamcore-params`]: Algorithm constants
//! - [`streamcore-internal`]: Little-endian word helpers
//! - [`streamcore-common`]: Zeroizing secret containers
//! - [`streamcore-algorithms`]: The cipher engines and keystream combiner

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use streamcore_algorithms as algorithms;
pub use streamcore_api as api;
pub use streamcore_common as common;
pub use streamcore_internal as internal;
pub use streamcore_params as params;

pub use zeroize;

/// Common imports for streamcore users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::algorithms::{BlockGenerator, SeekableStreamCipher, StreamCipher};

    pub use crate::algorithms::{Keystream, Nonce};

    #[cfg(feature = "chacha")]
    pub use crate::algorithms::ChaCha20;
    #[cfg(feature = "rc4")]
    pub use crate::algorithms::{Rc4, Rc4Phase};
    #[cfg(feature = "salsa")]
    pub use crate::algorithms::Salsa20;

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
}
