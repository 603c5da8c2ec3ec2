/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Container format and error-path checks.

use cmp5_codecs::codec::Codec;
use cmp5_codecs::errors::CodecErrors;
use cmp5_codecs::pipeline::Pipeline;

#[test]
fn empty_pipeline_output_is_header_plus_payload() {
    let source = b"plain payload";
    let container = Pipeline::new().compress(source).unwrap();

    assert_eq!(container.len(), 9 + source.len());
    assert_eq!(&container[9..], source);
    assert_eq!(Pipeline::decompress(&container).unwrap(), source);
}

#[test]
fn every_single_codec_pipeline_roundtrips() {
    let source: Vec<u8> = b"compression is the art of prediction ".repeat(30);

    for codec in [
        Codec::RgbToPlanes,
        Codec::Delta,
        Codec::Bwt(Default::default()),
        Codec::MoveToFront1,
        Codec::ZeroRunLength,
        Codec::Huffman(Default::default()),
        Codec::Lzss(Default::default()),
    ] {
        let container = Pipeline::from_codecs(vec![codec]).compress(&source).unwrap();

        assert_eq!(
            Pipeline::decompress(&container).unwrap(),
            source,
            "{}",
            codec.name()
        );
    }
}

#[test]
fn empty_input_through_any_pipeline_decodes_to_empty() {
    for codecs in [
        vec![],
        vec![Codec::Huffman(Default::default())],
        vec![Codec::Bwt(Default::default()), Codec::MoveToFront1],
    ] {
        let container = Pipeline::from_codecs(codecs).compress(&[]).unwrap();

        assert!(Pipeline::decompress(&container).unwrap().is_empty());
    }
}

#[test]
fn corrupted_magic_fails_cleanly() {
    let mut container = Pipeline::new().compress(b"data").unwrap();
    container[3] = b'X';

    assert!(matches!(
        Pipeline::decompress(&container),
        Err(CodecErrors::BadMagicBytes)
    ));
}

#[test]
fn unknown_codec_identifier_fails_cleanly() {
    let mut container = Pipeline::from_codecs(vec![Codec::MoveToFront1])
        .compress(b"data")
        .unwrap();
    container[9] = 77;

    assert!(matches!(
        Pipeline::decompress(&container),
        Err(CodecErrors::UnknownCodec(77))
    ));
}

#[test]
fn truncated_payload_fails_cleanly() {
    let container = Pipeline::from_codecs(vec![Codec::Huffman(Default::default())])
        .compress(&[5_u8; 4096])
        .unwrap();

    // cut into the Huffman frame so the codec itself must reject it
    let truncated = &container[..60];

    assert!(Pipeline::decompress(truncated).is_err());
}

#[test]
fn short_streams_survive_every_codec() {
    for source in [&[0_u8][..], &[255], &[0, 0], &[1, 2]] {
        for codec in [
            Codec::Delta,
            Codec::Bwt(Default::default()),
            Codec::MoveToFront1,
            Codec::ZeroRunLength,
            Codec::Huffman(Default::default()),
            Codec::Lzss(Default::default()),
        ] {
            let container = Pipeline::from_codecs(vec![codec]).compress(source).unwrap();

            assert_eq!(
                Pipeline::decompress(&container).unwrap(),
                source,
                "{} on {source:?}",
                codec.name()
            );
        }
    }
}
