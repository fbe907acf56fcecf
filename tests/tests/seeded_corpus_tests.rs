//! Seeded random corpus: chunked streaming must agree with one-shot output
//!
//! Messages, keys and chunk boundaries come from a fixed `ChaCha8Rng` seed so
//! every run covers the same corpus.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use streamcore_algorithms::stream::chacha::chacha20;
use streamcore_algorithms::stream::salsa::salsa20;
use streamcore_algorithms::types::Nonce;
use streamcore_algorithms::{ChaCha20, Rc4, Salsa20, StreamCipher};

const SEED: u64 = 0x5EED_C0DE;
const MESSAGES: usize = 64;

fn random_message(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let len = rng.gen_range(0..=1024);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

/// Feed `data` to `cipher` in randomly sized chunks, including empty ones
fn process_in_chunks<C: StreamCipher>(cipher: &mut C, data: &mut [u8], rng: &mut ChaCha8Rng) {
    let mut pos = 0;
    while pos < data.len() {
        let end = (pos + rng.gen_range(0..=130)).min(data.len());
        cipher.process(&mut data[pos..end]).unwrap();
        pos = end;
    }
}

#[test]
fn chacha20_chunked_matches_one_shot() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..MESSAGES {
        let key: [u8; 32] = rng.gen();
        let nonce: [u8; 12] = rng.gen();
        let data = random_message(&mut rng);
        let expected = chacha20::xcrypt(&data, &key, &nonce, 0);

        let mut buffer = data.clone();
        process_in_chunks(&mut ChaCha20::new(&key, &Nonce::new(nonce)), &mut buffer, &mut rng);
        assert_eq!(buffer, expected);

        process_in_chunks(&mut ChaCha20::new(&key, &Nonce::new(nonce)), &mut buffer, &mut rng);
        assert_eq!(buffer, data);
    }
}

#[test]
fn salsa20_chunked_matches_one_shot() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..MESSAGES {
        let key: [u8; 32] = rng.gen();
        let nonce: [u8; 8] = rng.gen();
        let data = random_message(&mut rng);
        let expected = salsa20::xcrypt(&data, &key, &nonce, 0);

        let mut buffer = data.clone();
        process_in_chunks(&mut Salsa20::new(&key, &Nonce::new(nonce)), &mut buffer, &mut rng);
        assert_eq!(buffer, expected);

        process_in_chunks(&mut Salsa20::new(&key, &Nonce::new(nonce)), &mut buffer, &mut rng);
        assert_eq!(buffer, data);
    }
}

#[test]
fn rc4_chunked_matches_one_shot() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..MESSAGES {
        let mut key = vec![0u8; rng.gen_range(1..=256)];
        rng.fill(&mut key[..]);
        let data = random_message(&mut rng);
        let expected = Rc4::new(&key).unwrap().xcrypt(&data);

        let mut buffer = data.clone();
        process_in_chunks(&mut Rc4::new(&key).unwrap(), &mut buffer, &mut rng);
        assert_eq!(buffer, expected);

        process_in_chunks(&mut Rc4::new(&key).unwrap(), &mut buffer, &mut rng);
        assert_eq!(buffer, data);
    }
}
