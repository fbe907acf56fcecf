//! Little-endian word loading and storing
//!
//! ChaCha20 and Salsa20 read their key, nonce and counter as little-endian
//! 32-bit words and serialize output words the same way. The helpers below
//! panic if the slices are shorter than the word count requires; callers pass
//! fixed-size arrays so the lengths are known at compile time.

/// Read a u32 from the first four bytes, little-endian
#[inline(always)]
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Write a u32 into the first four bytes, little-endian
#[inline(always)]
pub fn u32_to_le_bytes(value: u32, out: &mut [u8]) {
    out[..4].copy_from_slice(&value.to_le_bytes());
}

/// Fill `words` from consecutive 4-byte little-endian groups of `bytes`
#[inline]
pub fn load_words_le(bytes: &[u8], words: &mut [u32]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32_from_le_bytes(chunk);
    }
}

/// Serialize `words` into consecutive 4-byte little-endian groups of `out`
#[inline]
pub fn store_words_le(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        u32_to_le_bytes(*word, chunk);
    }
}

/// Split a u64 into its (low, high) 32-bit halves
#[inline(always)]
pub fn u64_to_words(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}

/// Join (low, high) 32-bit halves into a u64
#[inline(always)]
pub fn u64_from_words(low: u32, high: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}
