//! RC4 stream cipher
//!
//! RC4 is kept for interoperability with legacy formats and for known-answer
//! testing. Its keystream has well-documented biases; new designs should use
//! ChaCha20 or Salsa20.
//!
//! A context is scheduled from a key once and then streams keystream bytes.
//! There is no transition back: re-keying requires a fresh [`Rc4`].

use zeroize::{Zeroize, ZeroizeOnDrop};

use streamcore_params::symmetric::{RC4_MAX_KEY_SIZE, RC4_MIN_KEY_SIZE, RC4_STATE_SIZE};

use crate::error::{validate, Result};
use crate::stream::keystream::{BlockGenerator, Keystream};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Lifecycle phase of an RC4 context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rc4Phase {
    /// Key scheduling done, no keystream byte produced yet
    Scheduled,
    /// At least one keystream byte has been produced
    Streaming,
}

/// RC4 context: the permutation `S` and the cursors `i`, `j`
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Rc4 {
    s: [u8; RC4_STATE_SIZE],
    i: u8,
    j: u8,
    #[zeroize(skip)]
    phase: Rc4Phase,
}

impl Rc4 {
    /// Run the key-scheduling algorithm over `key`
    ///
    /// Keys must be 1 to 256 bytes long; anything else is rejected before any
    /// state is built.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::min_length("RC4 key", key.len(), RC4_MIN_KEY_SIZE)?;
        validate::max_length("RC4 key", key.len(), RC4_MAX_KEY_SIZE)?;

        let mut s = [0u8; RC4_STATE_SIZE];
        for (n, v) in s.iter_mut().enumerate() {
            *v = n as u8;
        }

        let mut j = 0u8;
        for n in 0..RC4_STATE_SIZE {
            j = j.wrapping_add(s[n]).wrapping_add(key[n % key.len()]);
            s.swap(n, j as usize);
        }

        Ok(Self {
            s,
            i: 0,
            j: 0,
            phase: Rc4Phase::Scheduled,
        })
    }

    /// Produce the next keystream byte
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        self.phase = Rc4Phase::Streaming;

        let t = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[t as usize]
    }

    /// Encrypt or decrypt data in place
    pub fn process(&mut self, data: &mut [u8]) {
        Keystream::<_, 1>::new(self).apply(data);
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
        for byte in output.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Encrypt or decrypt `data` into a new buffer of the same length
    #[cfg(feature = "alloc")]
    pub fn xcrypt(&mut self, data: &[u8]) -> Vec<u8> {
        let mut output = data.to_vec();
        self.process(&mut output);
        output
    }

    /// Drop the next `n` keystream bytes (RC4-drop\[n\])
    pub fn discard(&mut self, n: usize) {
        for _ in 0..n {
            self.next_byte();
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Rc4Phase {
        self.phase
    }

    #[cfg(test)]
    pub(crate) fn permutation(&self) -> &[u8; RC4_STATE_SIZE] {
        &self.s
    }
}

impl BlockGenerator<1> for Rc4 {
    #[inline(always)]
    fn generate_block(&mut self, block: &mut [u8; 1]) {
        block[0] = self.next_byte();
    }
}

impl core::fmt::Debug for Rc4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rc4")
            .field("state", &"[REDACTED]")
            .field("phase", &self.phase)
            .finish()
    }
}
