/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Zero run-length codec
//!
//! Compresses runs of zero bytes, the dominant symbol in
//! post-move-to-front data, using Wheeler's binary-count encoding: the
//! code values 0 and 1 are freed up by remapping the non-zero alphabet,
//! and a run of `L` zeros is written as the bits of `L + 1` below its
//! leading one, one bit per output byte.
//!
//! Freeing 0 and 1 requires an unused non-zero symbol to act as the
//! border of the remap. When every non-zero symbol occurs in the input
//! a naive fallback (zero byte followed by a count of additional
//! zeros) is used instead.
//!
//! # Framing
//!
//! 4-byte little-endian uncompressed length, 1-byte mode (1 = Wheeler,
//! 0 = naive), and for mode 1 the border byte, then the payload.

use log::trace;

use crate::errors::CodecErrors;

pub const IDENTIFIER: u8 = 55;

const MODE_NAIVE: u8 = 0;
const MODE_WHEELER: u8 = 1;

/// Encode runs of zeros.
pub fn encode(source: &[u8]) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    let mut frequencies = [0_u32; 256];

    for symbol in source {
        frequencies[usize::from(*symbol)] += 1;
    }
    // any unused non-zero symbol can serve as the border of the remap
    let border = (1..256).find(|i| frequencies[*i] == 0).map(|i| i as u8);

    let mut dest = Vec::with_capacity(source.len() + source.len() / 2 + 6);
    dest.extend_from_slice(&(source.len() as u32).to_le_bytes());

    match border {
        Some(border) => {
            trace!("zero run-length: wheeler mode, border symbol {border}");
            dest.push(MODE_WHEELER);
            dest.push(border);
            encode_wheeler(source, border, &mut dest);
        }
        None => {
            trace!("zero run-length: no free symbol, naive mode");
            dest.push(MODE_NAIVE);
            encode_naive(source, &mut dest);
        }
    }
    dest
}

fn encode_wheeler(source: &[u8], border: u8, dest: &mut Vec<u8>) {
    let mut src_index = 0;

    while src_index < source.len() {
        let symbol = source[src_index];

        if symbol != 0 {
            // shift the values below the border up by one; 0 and 1 are
            // now reserved for run bits
            dest.push(if symbol < border { symbol + 1 } else { symbol });
            src_index += 1;
            continue;
        }
        let mut run = 0_u64;

        while src_index < source.len() && source[src_index] == 0 {
            run += 1;
            src_index += 1;
        }
        // write the bits of run + 1 below its leading one, MSB first
        let value = run + 1;
        let top_bit = 63 - u64::from(value.leading_zeros());

        for bit in (0..top_bit).rev() {
            dest.push(((value >> bit) & 1) as u8);
        }
    }
}

fn encode_naive(source: &[u8], dest: &mut Vec<u8>) {
    let mut src_index = 0;

    while src_index < source.len() {
        let symbol = source[src_index];

        dest.push(symbol);
        src_index += 1;

        if symbol == 0 {
            // count additional zeros following this one
            let mut length = 0_u8;

            while src_index < source.len() && length < 255 && source[src_index] == 0 {
                length += 1;
                src_index += 1;
            }
            dest.push(length);
        }
    }
}

/// Expand runs of zeros back.
pub fn decode(source: &[u8]) -> Result<Vec<u8>, CodecErrors> {
    if source.is_empty() {
        return Ok(Vec::new());
    }
    if source.len() < 5 {
        return Err(CodecErrors::TruncatedData(5, source.len()));
    }
    let dest_size = u32::from_le_bytes(source[0..4].try_into().unwrap()) as usize;

    match source[4] {
        MODE_WHEELER => {
            if source.len() < 6 {
                return Err(CodecErrors::TruncatedData(6, source.len()));
            }
            Ok(decode_wheeler(&source[6..], source[5], dest_size))
        }
        MODE_NAIVE => Ok(decode_naive(&source[5..], dest_size)),
        _ => Err(CodecErrors::Generic("unknown zero run-length mode byte"))
    }
}

fn decode_wheeler(payload: &[u8], border: u8, dest_size: usize) -> Vec<u8> {
    let mut dest = Vec::with_capacity(dest_size);
    let mut src_index = 0;

    // remap is the inverse of the encoder's shift
    let unmap = |code: u8| if code <= border { code - 1 } else { code };

    while src_index < payload.len() && dest.len() < dest_size {
        let code = payload[src_index];
        src_index += 1;

        if code >= 2 {
            dest.push(unmap(code));
            continue;
        }
        // run bits: restore the stripped leading one, then shift in
        // 0/1 bytes until a data byte terminates the run
        let mut accumulated = 2 | u64::from(code);
        let mut terminator = None;

        while src_index < payload.len() {
            let bit = payload[src_index];
            src_index += 1;

            if bit >= 2 {
                terminator = Some(bit);
                break;
            }
            if accumulated <= u64::from(u32::MAX) {
                accumulated = (accumulated << 1) | u64::from(bit);
            }
        }
        let zeros = (accumulated - 1).min((dest_size - dest.len()) as u64);

        dest.resize(dest.len() + zeros as usize, 0);

        if let Some(code) = terminator {
            if dest.len() < dest_size {
                dest.push(unmap(code));
            }
        }
    }
    dest
}

fn decode_naive(payload: &[u8], dest_size: usize) -> Vec<u8> {
    let mut dest = Vec::with_capacity(dest_size);
    let mut src_index = 0;

    while src_index < payload.len() && dest.len() < dest_size {
        let symbol = payload[src_index];
        src_index += 1;

        dest.push(symbol);

        if symbol == 0 && src_index < payload.len() {
            let length = u64::from(payload[src_index]).min((dest_size - dest.len()) as u64);
            src_index += 1;

            dest.resize(dest.len() + length as usize, 0);
        }
    }
    dest
}
