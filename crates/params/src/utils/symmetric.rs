//! Constants for the symmetric stream ciphers

/// Number of 32-bit words in a ChaCha20 or Salsa20 state matrix
pub const STATE_WORDS: usize = 16;

/// Number of double rounds (column + diagonal/row) in the 20-round variants
pub const DOUBLE_ROUNDS: usize = 10;

/// The four `"expand 32-byte k"` words, little-endian
pub const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Index of the block counter word in the ChaCha20 state
pub const CHACHA20_COUNTER_WORD: usize = 12;

/// Salsa20 key size in bytes
pub const SALSA20_KEY_SIZE: usize = 32;

/// Salsa20 nonce size in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;

/// Salsa20 block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Indices of the low and high block counter words in the Salsa20 state
pub const SALSA20_COUNTER_WORDS: [usize; 2] = [8, 9];

/// Size of the RC4 permutation
pub const RC4_STATE_SIZE: usize = 256;

/// Smallest accepted RC4 key, in bytes
pub const RC4_MIN_KEY_SIZE: usize = 1;

/// Largest accepted RC4 key, in bytes
pub const RC4_MAX_KEY_SIZE: usize = 256;
