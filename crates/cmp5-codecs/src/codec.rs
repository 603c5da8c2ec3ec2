/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The uniform codec surface
//!
//! Every transform in this crate is reachable through [`Codec`], a
//! tagged sum over the seven codecs and their configurations. Holding
//! codecs by value in an ordered collection is all the pipeline needs,
//! so an enum replaces dynamic dispatch and maps one-to-one onto the
//! identifier byte the container stores.

use crate::bwt::BwtOptions;
use crate::errors::CodecErrors;
use crate::huffman::HuffmanOptions;
use crate::lzss::LzssOptions;
use crate::{bwt, delta, huffman, lzss, mtf1, rgb2planes, rle0};

/// One configured codec.
///
/// Identifier assignments are fixed and recorded in the container, so
/// they must never change between releases.
#[derive(Debug, Copy, Clone)]
pub enum Codec {
    /// De-interleave RGB triples into planes, identifier 10
    RgbToPlanes,
    /// Byte-wise delta with zig-zag mapping, identifier 20
    Delta,
    /// Burrows-Wheeler block sorting, identifier 40
    Bwt(BwtOptions),
    /// Adaptive symbol-rank recoding, identifier 50
    MoveToFront1,
    /// Wheeler zero run-length coding, identifier 55
    ZeroRunLength,
    /// Canonical static Huffman coding, identifier 60
    Huffman(HuffmanOptions),
    /// Suffix-array-driven dictionary coding, identifier 70
    Lzss(LzssOptions)
}

impl Codec {
    /// The stable 8-bit identifier stored in the container.
    pub const fn identifier(&self) -> u8 {
        match self {
            Codec::RgbToPlanes => rgb2planes::IDENTIFIER,
            Codec::Delta => delta::IDENTIFIER,
            Codec::Bwt(_) => bwt::IDENTIFIER,
            Codec::MoveToFront1 => mtf1::IDENTIFIER,
            Codec::ZeroRunLength => rle0::IDENTIFIER,
            Codec::Huffman(_) => huffman::IDENTIFIER,
            Codec::Lzss(_) => lzss::IDENTIFIER
        }
    }

    /// Human readable codec name.
    pub const fn name(&self) -> &'static str {
        match self {
            Codec::RgbToPlanes => "RGB to planes",
            Codec::Delta => "Delta",
            Codec::Bwt(_) => "Burrows-Wheeler transform",
            Codec::MoveToFront1 => "Move-to-front-1",
            Codec::ZeroRunLength => "Zero run-length",
            Codec::Huffman(_) => "Static Huffman",
            Codec::Lzss(_) => "LZSS"
        }
    }

    /// Look a codec up by its container identifier, configured with
    /// its defaults.
    ///
    /// Every codec frame is self-describing, so default options are
    /// all the decode path ever needs.
    pub fn from_identifier(identifier: u8) -> Option<Codec> {
        match identifier {
            rgb2planes::IDENTIFIER => Some(Codec::RgbToPlanes),
            delta::IDENTIFIER => Some(Codec::Delta),
            bwt::IDENTIFIER => Some(Codec::Bwt(BwtOptions::default())),
            mtf1::IDENTIFIER => Some(Codec::MoveToFront1),
            rle0::IDENTIFIER => Some(Codec::ZeroRunLength),
            huffman::IDENTIFIER => Some(Codec::Huffman(HuffmanOptions::default())),
            lzss::IDENTIFIER => Some(Codec::Lzss(LzssOptions::default())),
            _ => None
        }
    }

    /// Apply the forward transform.
    pub fn encode(&self, source: &[u8]) -> Vec<u8> {
        match self {
            Codec::RgbToPlanes => rgb2planes::encode(source),
            Codec::Delta => delta::encode(source),
            Codec::Bwt(options) => bwt::encode(source, *options),
            Codec::MoveToFront1 => mtf1::encode(source),
            Codec::ZeroRunLength => rle0::encode(source),
            Codec::Huffman(_) => huffman::encode(source),
            Codec::Lzss(options) => lzss::encode(source, *options)
        }
    }

    /// Apply the inverse transform.
    pub fn decode(&self, source: &[u8]) -> Result<Vec<u8>, CodecErrors> {
        match self {
            Codec::RgbToPlanes => Ok(rgb2planes::decode(source)),
            Codec::Delta => Ok(delta::decode(source)),
            Codec::Bwt(_) => bwt::decode(source),
            Codec::MoveToFront1 => Ok(mtf1::decode(source)),
            Codec::ZeroRunLength => rle0::decode(source),
            Codec::Huffman(options) => huffman::decode(source, *options),
            Codec::Lzss(_) => lzss::decode(source)
        }
    }
}
