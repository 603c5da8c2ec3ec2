/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGB-to-planes codec
//!
//! De-interleaves `RGBRGB…` triples so all first bytes precede all
//! second bytes precede all third bytes, which groups each color plane
//! for the codecs downstream. Inputs whose length is not divisible by
//! three pass through unchanged; the length check on decode restores
//! the same behavior, so no framing is needed.

pub const IDENTIFIER: u8 = 10;

/// Split interleaved triples into three planes.
pub fn encode(source: &[u8]) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    if source.len() % 3 != 0 {
        return source.to_vec();
    }
    let plane_size = source.len() / 3;
    let mut dest = vec![0_u8; source.len()];

    for (i, triple) in source.chunks_exact(3).enumerate() {
        dest[i] = triple[0];
        dest[i + plane_size] = triple[1];
        dest[i + 2 * plane_size] = triple[2];
    }
    dest
}

/// Re-interleave three planes back into triples.
pub fn decode(source: &[u8]) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    if source.len() % 3 != 0 {
        return source.to_vec();
    }
    let plane_size = source.len() / 3;
    let mut dest = vec![0_u8; source.len()];

    for (i, triple) in dest.chunks_exact_mut(3).enumerate() {
        triple[0] = source[i];
        triple[1] = source[i + plane_size];
        triple[2] = source[i + 2 * plane_size];
    }
    dest
}
