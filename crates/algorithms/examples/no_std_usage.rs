// Shows the engines used the way a no_std caller would: fixed-size arrays,
// caller-owned buffers and no allocation.
#![cfg_attr(not(feature = "std"), no_std)]

use streamcore_algorithms::stream::chacha::chacha20;
use streamcore_algorithms::types::Nonce;
use streamcore_algorithms::{ChaCha20, Error, Rc4, Salsa20};

fn chacha20_example(buffer: &mut [u8]) {
    let key = [0u8; 32]; // Would use proper key generation in real code
    let nonce = Nonce::<12>::new([0u8; 12]); // Never reuse with the same key
    let mut cipher = ChaCha20::with_counter(&key, &nonce, 1);
    cipher.encrypt(buffer);
}

fn salsa20_example(buffer: &mut [u8]) {
    let key = [1u8; 32];
    let nonce = Nonce::<8>::new([0u8; 8]);
    Salsa20::new(&key, &nonce).encrypt(buffer);
}

fn rc4_example(buffer: &mut [u8]) -> Result<(), Error> {
    let mut cipher = Rc4::new(b"legacy key")?;
    // Dropping the first 768 bytes avoids the worst of RC4's early biases
    cipher.discard(768);
    cipher.encrypt(buffer);
    Ok(())
}

#[cfg(feature = "std")]
fn main() {
    let original = *b"Stream ciphers in no_std!";

    let mut data = original;
    chacha20_example(&mut data);
    let mut expected = original;
    chacha20::xcrypt_in_place(&mut expected, &[0u8; 32], &[0u8; 12], 1);
    assert_eq!(data, expected);
    println!("ChaCha20 ciphertext: {:02x?}", data);

    let mut data = original;
    salsa20_example(&mut data);
    salsa20_example(&mut data);
    assert_eq!(data, original);
    println!("Salsa20 round trip ok");

    let mut data = original;
    match rc4_example(&mut data) {
        Ok(()) => println!("RC4 ciphertext: {:02x?}", data),
        Err(e) => println!("RC4 failed: {}", e),
    }
}

#[cfg(not(feature = "std"))]
fn main() {}
