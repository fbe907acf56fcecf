//! Salsa20 stream cipher implementation
//!
//! Salsa20/20 with a 256-bit key, a 64-bit nonce and a 64-bit block counter,
//! as described in Bernstein's "Salsa20 specification".
//!
//! The block function alternates column rounds and row rounds over the
//! 4x4 word matrix and adds the input back word for word. Compared to ChaCha20
//! the constants sit on the diagonal and the counter occupies two words.

use streamcore_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
use streamcore_internal::endian;
use streamcore_params::symmetric::{DOUBLE_ROUNDS, SALSA20_COUNTER_WORDS, SIGMA};

use crate::error::{validate, Result};
use crate::stream::keystream::{BlockGenerator, Keystream};
use crate::stream::state::{self, State};
use crate::types::nonce::Salsa20Compatible;
use crate::types::Nonce;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

pub use streamcore_params::symmetric::{SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE, SALSA20_NONCE_SIZE};

/// The Salsa20 quarter round on words `a`, `b`, `c`, `d` of `state`
///
/// Each step adds two words, rotates the sum and XORs it into a third.
#[inline(always)]
pub fn quarter_round(state: &mut State, a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

#[inline(always)]
fn double_round(state: &mut State) {
    // Column round
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 5, 9, 13, 1);
    quarter_round(state, 10, 14, 2, 6);
    quarter_round(state, 15, 3, 7, 11);

    // Row round
    quarter_round(state, 0, 1, 2, 3);
    quarter_round(state, 5, 6, 7, 4);
    quarter_round(state, 10, 11, 8, 9);
    quarter_round(state, 15, 12, 13, 14);
}

/// The Salsa20 block function (the "Salsa20 core")
///
/// Pure in its input. The all-zero state maps to the all-zero state.
pub fn block(input: &State) -> State {
    let mut working = EphemeralSecret::new(*input);
    for _ in 0..DOUBLE_ROUNDS {
        double_round(&mut working);
    }

    let mut output = *working;
    state::feed_forward(&mut output, input);
    output
}

/// Build the initial state for a 256-bit key
///
/// Layout: constants at words 0, 5, 10, 15; key at 1-4 and 11-14;
/// nonce at 6-7; block counter low word at 8, high word at 9.
pub fn init_state(
    key: &[u8; SALSA20_KEY_SIZE],
    nonce: &[u8; SALSA20_NONCE_SIZE],
    counter: u64,
) -> State {
    let mut state = [0u32; 16];
    state[0] = SIGMA[0];
    state[5] = SIGMA[1];
    state[10] = SIGMA[2];
    state[15] = SIGMA[3];

    endian::load_words_le(&key[..16], &mut state[1..5]);
    endian::load_words_le(&key[16..], &mut state[11..15]);
    endian::load_words_le(nonce, &mut state[6..8]);

    let (low, high) = endian::u64_to_words(counter);
    state[SALSA20_COUNTER_WORDS[0]] = low;
    state[SALSA20_COUNTER_WORDS[1]] = high;
    state
}

/// Per-block keystream generator for Salsa20
pub struct Salsa20Block {
    key: SecretBuffer<SALSA20_KEY_SIZE>,
    nonce: [u8; SALSA20_NONCE_SIZE],
    counter: u64,
}

impl Salsa20Block {
    /// Create a generator whose first block uses `counter`
    pub fn new(
        key: &[u8; SALSA20_KEY_SIZE],
        nonce: &[u8; SALSA20_NONCE_SIZE],
        counter: u64,
    ) -> Self {
        Self {
            key: SecretBuffer::new(*key),
            nonce: *nonce,
            counter,
        }
    }

    /// Counter value of the next block to be generated
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Set the counter value of the next block to be generated
    pub fn set_counter(&mut self, counter: u64) {
        self.counter = counter;
    }
}

impl BlockGenerator<SALSA20_BLOCK_SIZE> for Salsa20Block {
    fn generate_block(&mut self, out: &mut [u8; SALSA20_BLOCK_SIZE]) {
        let input = EphemeralSecret::new(init_state(self.key.as_array(), &self.nonce, self.counter));
        let output = EphemeralSecret::new(block(&input));
        state::serialize(&output, out);
        self.counter = self.counter.wrapping_add(1);
    }
}

/// Salsa20 stream cipher
pub struct Salsa20 {
    keystream: Keystream<Salsa20Block, SALSA20_BLOCK_SIZE>,
    initial_counter: u64,
}

impl Salsa20 {
    /// Creates a new Salsa20 instance starting at block 0
    pub fn new<const N: usize>(key: &[u8; SALSA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a new Salsa20 instance starting at block `counter`
    pub fn with_counter<const N: usize>(
        key: &[u8; SALSA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let mut nonce_bytes = [0u8; SALSA20_NONCE_SIZE];
        nonce_bytes.copy_from_slice(nonce.as_ref());
        Self::from_parts(key, &nonce_bytes, counter)
    }

    /// Creates an instance from unsized key and nonce slices
    pub fn from_slices(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self> {
        validate::length("Salsa20 key", key.len(), SALSA20_KEY_SIZE)?;
        validate::length("Salsa20 nonce", nonce.len(), SALSA20_NONCE_SIZE)?;

        let mut key_bytes = [0u8; SALSA20_KEY_SIZE];
        let mut key_bytes = ZeroizeGuard::new(&mut key_bytes);
        key_bytes.copy_from_slice(key);
        let mut nonce_bytes = [0u8; SALSA20_NONCE_SIZE];
        nonce_bytes.copy_from_slice(nonce);

        Ok(Self::from_parts(&key_bytes, &nonce_bytes, counter))
    }

    fn from_parts(
        key: &[u8; SALSA20_KEY_SIZE],
        nonce: &[u8; SALSA20_NONCE_SIZE],
        counter: u64,
    ) -> Self {
        Self {
            keystream: Keystream::new(Salsa20Block::new(key, nonce, counter)),
            initial_counter: counter,
        }
    }

    /// Encrypt or decrypt data in place
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
    pub fn seek(&mut self, block_offset: u64) {
        let counter = self.initial_counter.wrapping_add(block_offset);
        self.keystream.generator_mut().set_counter(counter);
        self.keystream.discard();
    }

    /// Rewind to the initial counter with the same key and nonce
    pub fn reset(&mut self) {
        self.seek(0);
    }

    /// Counter value of the next block to be generated
    pub fn counter(&self) -> u64 {
        self.keystream.generator().counter()
    }
}

/// Encrypt or decrypt `data` in place, starting at block `initial_counter`
pub fn xcrypt_in_place(
    data: &mut [u8],
    key: &[u8; SALSA20_KEY_SIZE],
    nonce: &[u8; SALSA20_NONCE_SIZE],
    initial_counter: u64,
) {
    Keystream::<_, SALSA20_BLOCK_SIZE>::new(Salsa20Block::new(key, nonce, initial_counter))
        .apply(data);
}

/// Encrypt or decrypt `data` into a new buffer of the same length
#[cfg(feature = "alloc")]
pub fn xcrypt(
    data: &[u8],
    key: &[u8; SALSA20_KEY_SIZE],
    nonce: &[u8; SALSA20_NONCE_SIZE],
    initial_counter: u64,
) -> Vec<u8> {
    let mut output = data.to_vec();
    xcrypt_in_place(&mut output, key, nonce, initial_counter);
    output
}
