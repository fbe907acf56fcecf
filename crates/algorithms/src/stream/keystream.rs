//! Algorithm-independent keystream combiner
//!
//! Every engine exposes its keystream through [`BlockGenerator`]: ChaCha20 and
//! Salsa20 emit 64-byte blocks, RC4 emits one byte at a time. [`Keystream`]
//! buffers one block and XORs it into caller data, so encryption and
//! decryption are the same call.

use zeroize::Zeroize;

/// A source of keystream in fixed-size units
///
/// Each call produces the next `B` keystream bytes and advances the
/// generator. Implementations must be deterministic in their key material and
/// position.
pub trait BlockGenerator<const B: usize> {
    /// Write the next keystream block into `block`
    fn generate_block(&mut self, block: &mut [u8; B]);
}

impl<G: BlockGenerator<B> + ?Sized, const B: usize> BlockGenerator<B> for &mut G {
    #[inline(always)]
    fn generate_block(&mut self, block: &mut [u8; B]) {
        (**self).generate_block(block)
    }
}

/// XOR `src` into `dst` byte for byte
///
/// Only the common prefix of the two slices is touched.
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Buffered keystream over a [`BlockGenerator`]
///
/// Unused bytes of a block stay buffered, so successive calls continue one
/// stream. The buffer is wiped on [`discard`](Self::discard) and on drop.
pub struct Keystream<G, const B: usize> {
    generator: G,
    buffer: [u8; B],
    position: usize,
}

impl<G, const B: usize> Keystream<G, B> {
    /// Wrap a generator; the first use generates a fresh block
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            buffer: [0u8; B],
            position: B,
        }
    }

    /// Borrow the underlying generator
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Mutably borrow the underlying generator
    ///
    /// Repositioning the generator should be followed by [`discard`](Self::discard),
    /// otherwise buffered bytes of the old position are used first.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Number of keystream bytes buffered and not yet used
    pub fn buffered(&self) -> usize {
        B - self.position
    }

    /// Drop any buffered keystream; the next use generates a fresh block
    pub fn discard(&mut self) {
        self.buffer.zeroize();
        self.position = B;
    }
}

impl<G: BlockGenerator<B>, const B: usize> Keystream<G, B> {
    /// XOR the next `data.len()` keystream bytes into `data`
    ///
    /// Empty input touches nothing and never calls the generator.
    pub fn apply(&mut self, data: &mut [u8]) {
        let mut offset = 0;
        while offset < data.len() {
            if self.position == B {
                self.generator.generate_block(&mut self.buffer);
                self.position = 0;
            }

            let take = core::cmp::min(B - self.position, data.len() - offset);
            xor_in_place(
                &mut data[offset..offset + take],
                &self.buffer[self.position..self.position + take],
            );
            self.position += take;
            offset += take;
        }
    }

    /// Write the next `output.len()` raw keystream bytes into `output`
    pub fn fill(&mut self, output: &mut [u8]) {
        output.fill(0);
        self.apply(output);
    }
}

impl<G, const B: usize> Drop for Keystream<G, B> {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}
