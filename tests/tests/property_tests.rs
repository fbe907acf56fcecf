//! Property-based tests for the stream cipher engines

use proptest::prelude::*;
use streamcore_algorithms::stream::chacha::chacha20;
use streamcore_algorithms::stream::salsa::salsa20;
use streamcore_algorithms::types::Nonce;
use streamcore_algorithms::{ChaCha20, Rc4, Salsa20};

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=300)
}

fn rc4_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=256)
}

proptest! {
    #[test]
    fn chacha20_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        data in message()
    ) {
        let ciphertext = chacha20::xcrypt(&data, &key, &nonce, counter);
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(chacha20::xcrypt(&ciphertext, &key, &nonce, counter), data);
    }

    #[test]
    fn salsa20_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 8]>(),
        counter in any::<u64>(),
        data in message()
    ) {
        let ciphertext = salsa20::xcrypt(&data, &key, &nonce, counter);
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(salsa20::xcrypt(&ciphertext, &key, &nonce, counter), data);
    }

    #[test]
    fn rc4_roundtrip(key in rc4_key(), data in message()) {
        let ciphertext = Rc4::new(&key).unwrap().xcrypt(&data);
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(Rc4::new(&key).unwrap().xcrypt(&ciphertext), data);
    }

    #[test]
    fn chacha20_split_matches_one_shot(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in message(),
        split in any::<prop::sample::Index>()
    ) {
        let at = split.index(data.len() + 1);
        let expected = chacha20::xcrypt(&data, &key, &nonce, 0);

        let mut cipher = ChaCha20::new(&key, &Nonce::new(nonce));
        let mut buffer = data.clone();
        let (head, tail) = buffer.split_at_mut(at);
        cipher.process(head);
        cipher.process(tail);
        prop_assert_eq!(buffer, expected);
    }

    #[test]
    fn salsa20_seek_matches_skip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 8]>(),
        blocks in 0u64..8
    ) {
        let mut skipped = Salsa20::new(&key, &Nonce::new(nonce));
        let mut prefix = vec![0u8; blocks as usize * 64];
        skipped.keystream(&mut prefix);

        let mut sought = Salsa20::new(&key, &Nonce::new(nonce));
        sought.seek(blocks);

        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        skipped.keystream(&mut a);
        sought.keystream(&mut b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn rc4_is_deterministic(key in rc4_key(), len in 0usize..512) {
        let mut a = Rc4::new(&key).unwrap();
        let mut b = Rc4::new(&key).unwrap();
        let mut ka = vec![0u8; len];
        let mut kb = vec![0u8; len];
        a.keystream(&mut ka);
        b.keystream(&mut kb);
        prop_assert_eq!(ka, kb);
    }

    #[test]
    fn rc4_discard_skips_keystream(key in rc4_key(), skip in 0usize..300) {
        let mut full = vec![0u8; skip + 32];
        Rc4::new(&key).unwrap().keystream(&mut full);

        let mut rc4 = Rc4::new(&key).unwrap();
        rc4.discard(skip);
        let mut rest = [0u8; 32];
        rc4.keystream(&mut rest);
        prop_assert_eq!(&rest[..], &full[skip..]);
    }
}
