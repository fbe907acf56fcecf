//! The 4x4 word matrix shared by ChaCha20 and Salsa20

use streamcore_internal::endian;
use streamcore_params::symmetric::STATE_WORDS;

/// Sixteen 32-bit words, row-major 4x4
pub type State = [u32; STATE_WORDS];

/// Add the pre-mixing input to the mixed state, word by word, mod 2^32
#[inline(always)]
pub(crate) fn feed_forward(mixed: &mut State, input: &State) {
    for (m, i) in mixed.iter_mut().zip(input.iter()) {
        *m = m.wrapping_add(*i);
    }
}

/// Serialize an output state into a 64-byte keystream block, little-endian
#[inline(always)]
pub(crate) fn serialize(words: &State, block: &mut [u8; STATE_WORDS * 4]) {
    endian::store_words_le(words, block);
}
