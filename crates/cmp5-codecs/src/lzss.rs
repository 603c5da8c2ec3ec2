/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! LZSS codec
//!
//! A sliding-dictionary coder. The encoder keeps a suffix array over
//! the current dictionary window and uses per-symbol index ranges into
//! it to find the longest match for the look-ahead buffer, emitting
//! either a 9-bit literal or a `1 + dictionary-bits + match-bits`
//! match token.
//!
//! # Framing
//!
//! 4-byte little-endian uncompressed length, one byte of dictionary
//! bits, one byte of match-length bits. Inputs no longer than the
//! look-ahead buffer are stored verbatim after the header; otherwise
//! the first look-ahead-sized chunk is stored verbatim and the token
//! bitstream follows.

use log::trace;

use cmp5_core::bitstream::{BitReader, BitWriter};
use cmp5_core::suffix_array::suffix_array;

use crate::errors::CodecErrors;

pub const IDENTIFIER: u8 = 70;

/// Dictionary and match-length field widths, clamped when set.
///
/// Derived quantities: the look-ahead buffer is an eighth of the
/// dictionary, the minimum useful match is one byte more than a match
/// token rounded up to whole bytes, and the maximum match is whatever
/// the match-length field can add on top of that.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LzssOptions {
    dictionary_bits:   u32,
    match_length_bits: u32
}

impl Default for LzssOptions {
    fn default() -> Self {
        LzssOptions {
            dictionary_bits:   12,
            match_length_bits: 4
        }
    }
}

impl LzssOptions {
    pub fn set_dictionary_bits(mut self, bits: u32) -> Self {
        self.dictionary_bits = bits.clamp(4, 20);
        self
    }

    pub fn set_match_length_bits(mut self, bits: u32) -> Self {
        self.match_length_bits = bits.clamp(3, 8);
        self
    }

    pub const fn dictionary_bits(&self) -> u32 {
        self.dictionary_bits
    }

    pub const fn match_length_bits(&self) -> u32 {
        self.match_length_bits
    }

    pub const fn dictionary_size(&self) -> usize {
        1 << self.dictionary_bits
    }

    pub const fn look_ahead_size(&self) -> usize {
        1 << (self.dictionary_bits - 3)
    }

    pub const fn match_length_min(&self) -> usize {
        ((self.dictionary_bits + self.match_length_bits + 7) / 8) as usize + 1
    }

    pub const fn match_length_max(&self) -> usize {
        (1 << self.match_length_bits) - 1 + self.match_length_min()
    }
}

/// LZSS encode.
pub fn encode(source: &[u8], options: LzssOptions) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    let src_size = source.len();
    let dictionary_size = options.dictionary_size();
    let look_ahead_size = options.look_ahead_size();
    let match_length_min = options.match_length_min();
    let match_length_max = options.match_length_max();

    let mut dest = Vec::with_capacity(src_size + 6 + src_size / 8);
    dest.extend_from_slice(&(src_size as u32).to_le_bytes());
    dest.push(options.dictionary_bits() as u8);
    dest.push(options.match_length_bits() as u8);

    if src_size <= look_ahead_size {
        // nothing to match against, store verbatim
        dest.extend_from_slice(source);
        return dest;
    }
    // the first look-ahead chunk seeds the dictionary verbatim
    dest.extend_from_slice(&source[..look_ahead_size]);

    let mut lab_start = look_ahead_size;
    let mut dict_start = 0_usize;
    let mut indices = suffix_array(&source[..look_ahead_size]);

    // left and right ends of each symbol's run of suffix-array slots
    let mut left_index = [-1_i32; 256];
    let mut right_index = [-1_i32; 256];

    let mut writer = BitWriter::new();
    let mut matches = 0_u64;

    while lab_start < src_size {
        let dictionary = &source[dict_start..lab_start];
        let dict_size = dictionary.len();

        left_index.fill(-1);
        right_index.fill(-1);

        // suffixes sharing a first byte are adjacent in the suffix
        // array; record the span of each symbol
        let mut previous = dictionary[indices[0] as usize];
        left_index[usize::from(previous)] = 0;

        for (p, suffix) in indices.iter().enumerate().skip(1) {
            let current = dictionary[*suffix as usize];

            if current != previous {
                right_index[usize::from(previous)] = p as i32 - 1;

                if left_index[usize::from(current)] < 0 {
                    left_index[usize::from(current)] = p as i32;
                }
                previous = current;
            }
        }
        right_index[usize::from(previous)] = dict_size as i32 - 1;

        let lab_size = look_ahead_size.min(src_size - lab_start);
        let look_ahead = &source[lab_start..lab_start + lab_size];

        let first = look_ahead[0];
        let mut consumed;

        if left_index[usize::from(first)] < 0 {
            // symbol absent from the dictionary
            writer.put_bits(&mut dest, u32::from(first), 9);
            consumed = 1;
        } else {
            let left = left_index[usize::from(first)] as usize;
            let right = right_index[usize::from(first)] as usize;

            let mut match_length = 1_usize;
            let mut match_position = 0_usize;

            for p in left..=right {
                let offset = indices[p] as usize;
                let limit = (dict_size - offset).min(lab_size).min(match_length_max);

                if limit > match_length_min && limit > match_length {
                    let length = look_ahead
                        .iter()
                        .zip(&dictionary[offset..offset + limit])
                        .take_while(|(a, b)| a == b)
                        .count();

                    if length > match_length {
                        match_length = length;
                        match_position = p;

                        if match_length == match_length_max {
                            break;
                        }
                    }
                }
            }

            if match_length >= match_length_min {
                let offset = indices[match_position] as u32;

                writer.put_bits(&mut dest, 1, 1);
                writer.put_bits(&mut dest, offset, options.dictionary_bits());
                writer.put_bits(
                    &mut dest,
                    (match_length - match_length_min) as u32,
                    options.match_length_bits()
                );
                matches += 1;
                consumed = match_length;
            } else {
                // too short to pay for a token, emit the bytes scanned
                consumed = 0;

                for symbol in &look_ahead[..match_length] {
                    writer.put_bits(&mut dest, u32::from(*symbol), 9);
                    consumed += 1;
                }
            }
        }
        lab_start += consumed;
        dict_start = lab_start.saturating_sub(dictionary_size);
        indices = suffix_array(&source[dict_start..lab_start]);
    }
    writer.flush(&mut dest);

    trace!(
        "lzss: {} bytes in, {} bytes out, {matches} matches",
        src_size,
        dest.len()
    );

    dest
}

/// LZSS decode.
pub fn decode(source: &[u8]) -> Result<Vec<u8>, CodecErrors> {
    if source.is_empty() {
        return Ok(Vec::new());
    }
    if source.len() < 6 {
        return Err(CodecErrors::TruncatedData(6, source.len()));
    }
    let dest_size = u32::from_le_bytes(source[0..4].try_into().unwrap()) as usize;
    let options = LzssOptions {
        dictionary_bits:   u32::from(source[4]).clamp(4, 20),
        match_length_bits: u32::from(source[5]).clamp(3, 8)
    };
    let dictionary_size = options.dictionary_size();
    let look_ahead_size = options.look_ahead_size();
    let match_length_min = options.match_length_min();

    let payload = &source[6..];

    if dest_size <= look_ahead_size {
        // stored verbatim
        return Ok(payload[..dest_size.min(payload.len())].to_vec());
    }
    if payload.len() < look_ahead_size {
        return Err(CodecErrors::TruncatedData(6 + look_ahead_size, source.len()));
    }
    // the shortest possible token decides when the tail padding starts
    let min_code_length =
        1 + (options.dictionary_bits() + options.match_length_bits()).min(8) as u8;

    let mut dest = vec![0_u8; dest_size];
    dest[..look_ahead_size].copy_from_slice(&payload[..look_ahead_size]);

    let mut dest_index = look_ahead_size;
    let mut dict_start = 0_usize;
    let mut reader = BitReader::new(&payload[look_ahead_size..]);

    while dest_index < dest_size {
        reader.refill();

        if reader.bits_left() < min_code_length {
            break;
        }
        if reader.get_bits(1) == 1 {
            let offset = reader.get_bits(options.dictionary_bits() as u8) as usize;
            let length = reader.get_bits(options.match_length_bits() as u8) as usize + match_length_min;

            let from = dict_start + offset;

            if from + length > dest_index || dest_index + length > dest_size {
                // reference past the written region, the stream is bad
                break;
            }
            dest.copy_within(from..from + length, dest_index);
            dest_index += length;
        } else {
            dest[dest_index] = reader.get_bits(8) as u8;
            dest_index += 1;
        }
        dict_start = dest_index.saturating_sub(dictionary_size);
    }
    dest.truncate(dest_index);

    Ok(dest)
}
