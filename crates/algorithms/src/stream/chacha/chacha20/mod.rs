//! ChaCha20 stream cipher implementation
//!
//! This module implements the ChaCha20 stream cipher as defined in RFC 8439:
//! a 32-byte key, a 96-bit nonce and a 32-bit little-endian block counter.
//!
//! The state is rebuilt from key, nonce and counter for every 64-byte block,
//! run through 20 rounds and added back to its input. Only the counter word
//! changes between successive blocks of a stream.
//!
//! The block counter wraps after 2^32 blocks (256 GiB). Encrypting more than
//! that under one nonce is unsupported and is not detected.

use streamcore_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
use streamcore_internal::endian;
use streamcore_params::symmetric::{CHACHA20_COUNTER_WORD, DOUBLE_ROUNDS, SIGMA};

use crate::error::{validate, Result};
use crate::stream::keystream::{BlockGenerator, Keystream};
use crate::stream::state::{self, State};
use crate::types::nonce::ChaCha20Compatible;
use crate::types::Nonce;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

pub use streamcore_params::symmetric::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};

/// The ChaCha20 quarter round on words `a`, `b`, `c`, `d` of `state`
#[inline(always)]
pub fn quarter_round(state: &mut State, a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// One column round followed by one diagonal round
#[inline(always)]
fn double_round(state: &mut State) {
    // Column rounds
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 1, 5, 9, 13);
    quarter_round(state, 2, 6, 10, 14);
    quarter_round(state, 3, 7, 11, 15);

    // Diagonal rounds
    quarter_round(state, 0, 5, 10, 15);
    quarter_round(state, 1, 6, 11, 12);
    quarter_round(state, 2, 7, 8, 13);
    quarter_round(state, 3, 4, 9, 14);
}

/// The ChaCha20 block function
///
/// Pure in its input: copies the state, applies 10 double rounds, and adds
/// the original input word for word.
pub fn block(input: &State) -> State {
    let mut working = EphemeralSecret::new(*input);
    for _ in 0..DOUBLE_ROUNDS {
        double_round(&mut working);
    }

    let mut output = *working;
    state::feed_forward(&mut output, input);
    output
}

/// Build the initial state from constants, key, block counter and nonce
///
/// Layout: words 0-3 constants, 4-11 key, 12 counter, 13-15 nonce.
pub fn init_state(
    key: &[u8; CHACHA20_KEY_SIZE],
    nonce: &[u8; CHACHA20_NONCE_SIZE],
    counter: u32,
) -> State {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&SIGMA);
    endian::load_words_le(key, &mut state[4..12]);
    state[CHACHA20_COUNTER_WORD] = counter;
    endian::load_words_le(nonce, &mut state[13..16]);
    state
}

/// Per-block keystream generator: key, nonce and the next block counter
pub struct ChaCha20Block {
    key: SecretBuffer<CHACHA20_KEY_SIZE>,
    nonce: [u8; CHACHA20_NONCE_SIZE],
    counter: u32,
}

impl ChaCha20Block {
    /// Create a generator whose first block uses `counter`
    pub fn new(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        Self {
            key: SecretBuffer::new(*key),
            nonce: *nonce,
            counter,
        }
    }

    /// Counter value of the next block to be generated
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Set the counter value of the next block to be generated
    pub fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }
}

impl BlockGenerator<CHACHA20_BLOCK_SIZE> for ChaCha20Block {
    fn generate_block(&mut self, out: &mut [u8; CHACHA20_BLOCK_SIZE]) {
        let input = EphemeralSecret::new(init_state(self.key.as_array(), &self.nonce, self.counter));
        let output = EphemeralSecret::new(block(&input));
        state::serialize(&output, out);
        self.counter = self.counter.wrapping_add(1);
    }
}

/// ChaCha20 stream cipher
pub struct ChaCha20 {
    keystream: Keystream<ChaCha20Block, CHACHA20_BLOCK_SIZE>,
    initial_counter: u32,
}

impl ChaCha20 {
    /// Creates a new ChaCha20 instance with the specified key and nonce
    ///
    /// The first block uses counter 0.
    pub fn new<const N: usize>(key: &[u8; CHACHA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a new ChaCha20 instance with the specified key, nonce, and counter
    pub fn with_counter<const N: usize>(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u32,
    ) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        let mut nonce_bytes = [0u8; CHACHA20_NONCE_SIZE];
        nonce_bytes.copy_from_slice(nonce.as_ref());
        Self::from_parts(key, &nonce_bytes, counter)
    }

    /// Creates an instance from unsized key and nonce slices
    ///
    /// Lengths are checked before any state is built.
    pub fn from_slices(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        validate::length("ChaCha20 key", key.len(), CHACHA20_KEY_SIZE)?;
        validate::length("ChaCha20 nonce", nonce.len(), CHACHA20_NONCE_SIZE)?;

        let mut key_bytes = [0u8; CHACHA20_KEY_SIZE];
        let mut key_bytes = ZeroizeGuard::new(&mut key_bytes);
        key_bytes.copy_from_slice(key);
        let mut nonce_bytes = [0u8; CHACHA20_NONCE_SIZE];
        nonce_bytes.copy_from_slice(nonce);

        Ok(Self::from_parts(&key_bytes, &nonce_bytes, counter))
    }

    fn from_parts(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        Self {
            keystream: Keystream::new(ChaCha20Block::new(key, nonce, counter)),
            initial_counter: counter,
        }
    }

    /// Encrypt or decrypt data in place using the ChaCha20 stream cipher
    pub fn process(&mut self, data: &mut [u8]) {
        self.keystream.apply(data);
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Write the next `output.len()` keystream bytes into `output`
    pub fn keystream(&mut self, output: &mut [u8]) {
        self.keystream.fill(output);
    }

    /// Seek to the start of block `block_offset`, counted from the initial counter
    pub fn seek(&mut self, block_offset: u32) {
        let counter = self.initial_counter.wrapping_add(block_offset);
        self.keystream.generator_mut().set_counter(counter);
        self.keystream.discard();
    }

    /// Rewind to the initial counter with the same key and nonce
    pub fn reset(&mut self) {
        self.seek(0);
    }

    /// Counter value of the next block to be generated
    pub fn counter(&self) -> u32 {
        self.keystream.generator().counter()
    }
}

/// Encrypt or decrypt `data` in place, starting at `initial_counter`
///
/// Uses `ceil(len / 64)` blocks; the last one is truncated to the remaining
/// bytes. Empty input generates no blocks.
pub fn xcrypt_in_place(
    data: &mut [u8],
    key: &[u8; CHACHA20_KEY_SIZE],
    nonce: &[u8; CHACHA20_NONCE_SIZE],
    initial_counter: u32,
) {
    Keystream::<_, CHACHA20_BLOCK_SIZE>::new(ChaCha20Block::new(key, nonce, initial_counter))
        .apply(data);
}

/// Encrypt or decrypt `data` into a new buffer of the same length
#[cfg(feature = "alloc")]
pub fn xcrypt(
    data: &[u8],
    key: &[u8; CHACHA20_KEY_SIZE],
    nonce: &[u8; CHACHA20_NONCE_SIZE],
    initial_counter: u32,
) -> Vec<u8> {
    let mut output = data.to_vec();
    xcrypt_in_place(&mut output, key, nonce, initial_counter);
    output
}
