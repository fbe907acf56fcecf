//! Stream cipher implementations
//!
//! Each cipher produces a deterministic keystream from its key material and
//! position, and XORs it into caller data. Encryption and decryption are the
//! same operation.
//!
//! # Available Stream Ciphers
//!
//! - ChaCha20: RFC 8439, 96-bit nonce, 32-bit block counter
//! - Salsa20: Salsa20/20, 64-bit nonce, 64-bit block counter
//! - RC4: legacy byte-oriented cipher, for interoperability only
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher.
//!
//! Contexts hold mutable stream position. Every method advancing a stream
//! takes `&mut self`; independent streams need independent contexts.

pub mod keystream;

#[cfg(any(feature = "chacha", feature = "salsa"))]
pub mod state;

/// ChaCha family of stream cipher implementations
#[cfg(feature = "chacha")]
pub mod chacha;

/// Salsa family of stream cipher implementations
#[cfg(feature = "salsa")]
pub mod salsa;

/// RC4 stream cipher
#[cfg(feature = "rc4")]
pub mod rc4;

// Re-export commonly used types
pub use keystream::{xor_in_place, BlockGenerator, Keystream};

#[cfg(feature = "chacha")]
pub use chacha::chacha20::{ChaCha20, CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
#[cfg(feature = "rc4")]
pub use rc4::{Rc4, Rc4Phase};
#[cfg(feature = "salsa")]
pub use salsa::salsa20::{Salsa20, SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE, SALSA20_NONCE_SIZE};

use crate::error::Result;
#[cfg(feature = "chacha")]
use crate::error::Error;

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// Algorithm name
    const NAME: &'static str;

    /// The keystream generation unit in bytes
    const BLOCK_SIZE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;
}

/// Stream ciphers whose keystream is addressable by block counter
pub trait SeekableStreamCipher: StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// Reset the cipher to its initial counter
    fn reset(&mut self) -> Result<()>;

    /// Seek to a block offset from the initial counter
    fn seek(&mut self, block: u64) -> Result<()>;
}

#[cfg(feature = "chacha")]
impl StreamCipher for ChaCha20 {
    const NAME: &'static str = "ChaCha20";
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}

#[cfg(feature = "chacha")]
impl SeekableStreamCipher for ChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;

    fn reset(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn seek(&mut self, block: u64) -> Result<()> {
        let block = u32::try_from(block).map_err(|_| {
            Error::param("block", "ChaCha20 seek position must fit in u32")
        })?;
        self.seek(block);
        Ok(())
    }
}

#[cfg(feature = "salsa")]
impl StreamCipher for Salsa20 {
    const NAME: &'static str = "Salsa20";
    const BLOCK_SIZE: usize = SALSA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}

#[cfg(feature = "salsa")]
impl SeekableStreamCipher for Salsa20 {
    const KEY_SIZE: usize = SALSA20_KEY_SIZE;
    const NONCE_SIZE: usize = SALSA20_NONCE_SIZE;

    fn reset(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn seek(&mut self, block: u64) -> Result<()> {
        self.seek(block);
        Ok(())
    }
}

#[cfg(feature = "rc4")]
impl StreamCipher for Rc4 {
    const NAME: &'static str = "RC4";
    const BLOCK_SIZE: usize = 1;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}
