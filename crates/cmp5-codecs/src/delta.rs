/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Delta codec
//!
//! The first byte is emitted verbatim. Every following byte becomes the
//! wrapped signed difference to its predecessor, zig-zag mapped so small
//! magnitudes land near zero where the entropy coders like them. Length
//! is preserved, so the codec needs no framing.

pub const IDENTIFIER: u8 = 20;

/// Delta + zig-zag encode.
pub fn encode(source: &[u8]) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    let mut dest = Vec::with_capacity(source.len());
    let mut last = source[0];

    dest.push(last);

    for symbol in source.iter().skip(1).copied() {
        // wrapped difference in [-128, 127]
        let delta = i16::from(last.wrapping_sub(symbol) as i8);
        let zig_zag = ((delta << 1) ^ (delta >> 15)) as u8;

        dest.push(zig_zag);
        last = symbol;
    }
    dest
}

/// Invert the zig-zag mapping and accumulate the differences.
pub fn decode(source: &[u8]) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    let mut dest = Vec::with_capacity(source.len());
    let mut last = source[0];

    dest.push(last);

    for zig_zag in source.iter().skip(1).copied() {
        let delta = (i16::from(zig_zag) >> 1) ^ -i16::from(zig_zag & 1);
        let value = (i16::from(last) - delta) as u8;

        dest.push(value);
        last = value;
    }
    dest
}
