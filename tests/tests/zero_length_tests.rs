//! Block accounting: how many keystream blocks each input length consumes

use streamcore_algorithms::stream::chacha::chacha20::ChaCha20Block;
use streamcore_algorithms::stream::salsa::salsa20::Salsa20Block;
use streamcore_algorithms::{Keystream, Rc4, Rc4Phase};
use streamcore_tests::suites::counting::CountingGenerator;

const KEY: [u8; 32] = [0x42; 32];

#[test]
fn empty_input_generates_no_blocks() {
    let mut chacha = Keystream::<_, 64>::new(CountingGenerator::new(ChaCha20Block::new(&KEY, &[0u8; 12], 1)));
    chacha.apply(&mut []);
    assert_eq!(chacha.generator().calls(), 0);

    let mut salsa = Keystream::<_, 64>::new(CountingGenerator::new(Salsa20Block::new(&KEY, &[0u8; 8], 0)));
    salsa.apply(&mut []);
    assert_eq!(salsa.generator().calls(), 0);

    let mut rc4 = Keystream::<_, 1>::new(CountingGenerator::new(Rc4::new(b"Key").unwrap()));
    rc4.apply(&mut []);
    assert_eq!(rc4.generator().calls(), 0);
    assert_eq!(rc4.generator().inner().phase(), Rc4Phase::Scheduled);
}

#[test]
fn chacha20_block_boundaries() {
    for &(len, blocks) in &[(1usize, 1usize), (63, 1), (64, 1), (65, 2), (128, 2), (129, 3)] {
        let mut keystream =
            Keystream::<_, 64>::new(CountingGenerator::new(ChaCha20Block::new(&KEY, &[0u8; 12], 1)));
        let mut data = vec![0xAAu8; len];
        keystream.apply(&mut data);

        assert_eq!(data.len(), len);
        assert_eq!(keystream.generator().calls(), blocks, "length {}", len);
        assert_eq!(keystream.generator().inner().counter(), 1 + blocks as u32);
    }
}

#[test]
fn salsa20_block_boundaries() {
    for &(len, blocks) in &[(63usize, 1usize), (64, 1), (65, 2)] {
        let mut keystream =
            Keystream::<_, 64>::new(CountingGenerator::new(Salsa20Block::new(&KEY, &[0u8; 8], 0)));
        let mut data = vec![0u8; len];
        keystream.apply(&mut data);
        assert_eq!(keystream.generator().calls(), blocks, "length {}", len);
    }
}

#[test]
fn rc4_generates_one_byte_per_input_byte() {
    let mut keystream = Keystream::<_, 1>::new(CountingGenerator::new(Rc4::new(b"Key").unwrap()));
    let mut data = *b"Plaintext";
    keystream.apply(&mut data);

    assert_eq!(keystream.generator().calls(), 9);
    assert_eq!(data, [0xbb, 0xf3, 0x16, 0xe8, 0xd9, 0x40, 0xaf, 0x0a, 0xd3]);
    assert_eq!(keystream.generator().inner().phase(), Rc4Phase::Streaming);
}

#[test]
fn partial_blocks_carry_over_between_calls() {
    let mut keystream =
        Keystream::<_, 64>::new(CountingGenerator::new(ChaCha20Block::new(&KEY, &[0u8; 12], 0)));

    let mut first = [0u8; 40];
    keystream.apply(&mut first);
    assert_eq!(keystream.buffered(), 24);

    let mut second = [0u8; 24];
    keystream.apply(&mut second);
    assert_eq!(keystream.generator().calls(), 1);
    assert_eq!(keystream.buffered(), 0);

    let mut third = [0u8; 1];
    keystream.apply(&mut third);
    assert_eq!(keystream.generator().calls(), 2);
}
