/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The four Huffman decoder strategies must agree bit for bit.

use cmp5_codecs::huffman;
use cmp5_codecs::huffman::{DecodeMethod, HuffmanOptions};

use crate::seeded_random_data;

const ALL_METHODS: [DecodeMethod; 4] = [
    DecodeMethod::LinearScan,
    DecodeMethod::StartIndex,
    DecodeMethod::ArithmeticIndex,
    DecodeMethod::PrefixCount,
];

fn assert_all_methods_agree(source: &[u8]) {
    let encoded = huffman::encode(source);

    for method in ALL_METHODS {
        let options = HuffmanOptions::default().set_decode_method(method);
        let decoded = huffman::decode(&encoded, options).unwrap();

        assert_eq!(decoded, source, "{method:?}");
    }
}

#[test]
fn decoders_agree_on_text() {
    assert_all_methods_agree(&b"sing, goddess, the anger of peleus' son achilles".repeat(20));
}

#[test]
fn decoders_agree_on_incompressible_data() {
    assert_all_methods_agree(&seeded_random_data(64 * 1024));
}

#[test]
fn decoders_agree_on_sparse_alphabets() {
    // two symbols, then one symbol, stress the short-code paths
    assert_all_methods_agree(&[7_u8, 9].repeat(3000));
    assert_all_methods_agree(&[42_u8; 5000]);
}

#[test]
fn decoders_agree_on_skewed_frequencies() {
    let mut source = vec![0_u8; 60_000];

    for (i, symbol) in source.iter_mut().enumerate() {
        if i % 97 == 0 {
            *symbol = (i % 251) as u8;
        }
    }
    assert_all_methods_agree(&source);
}
