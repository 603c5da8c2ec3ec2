/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Burrows-Wheeler transform codec
//!
//! Block-sorts the input so that similar contexts land next to each
//! other, which turns the move-to-front and zero run-length codecs
//! behind it into effective compressors.
//!
//! The encoder sorts each block through the suffix array of the block's
//! reversed, duplicated bytes. Duplicating makes the plain suffix order
//! coincide with the cyclic rotation order the transform needs, and
//! reversing lets the decoder write its output front to back.
//!
//! # Framing
//!
//! 4-byte little-endian uncompressed length and 4-byte block size, then
//! per block a 4-byte start index followed by the block's last-column
//! bytes.

use log::trace;

use cmp5_core::suffix_array::suffix_array;

use crate::errors::CodecErrors;

pub const IDENTIFIER: u8 = 40;

/// Block sizes are capped below 16 MiB.
pub const MAX_BLOCK_SIZE: u32 = 16 * 1024 * 1024 - 1;

/// Burrows-Wheeler block size, clamped to `[1, MAX_BLOCK_SIZE]` when
/// set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BwtOptions {
    block_size: u32
}

impl Default for BwtOptions {
    fn default() -> Self {
        BwtOptions { block_size: 65535 }
    }
}

impl BwtOptions {
    pub fn set_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size.clamp(1, MAX_BLOCK_SIZE);
        self
    }

    pub const fn block_size(&self) -> u32 {
        self.block_size
    }
}

/// Apply the transform block by block.
pub fn encode(source: &[u8], options: BwtOptions) -> Vec<u8> {
    if source.is_empty() {
        return Vec::new();
    }
    let block_size = options.block_size() as usize;
    let block_count = source.len().div_ceil(block_size);

    trace!(
        "bwt: encoding {} bytes in {block_count} blocks of up to {block_size}",
        source.len()
    );

    let mut dest = Vec::with_capacity(source.len() + 8 + 4 * block_count);
    dest.extend_from_slice(&(source.len() as u32).to_le_bytes());
    dest.extend_from_slice(&(block_size as u32).to_le_bytes());

    let mut doubled = Vec::with_capacity(2 * block_size);

    for block in source.chunks(block_size) {
        let size = block.len();

        // reverse the block and lay it out twice; suffixes of the
        // first half then sort exactly like the cyclic rotations
        doubled.clear();
        doubled.extend(block.iter().rev());
        doubled.extend(block.iter().rev());

        let indices = suffix_array(&doubled);

        let start_field = dest.len();
        dest.extend_from_slice(&[0; 4]);

        let mut count = 0_u32;

        for index in indices {
            let mut index = index as usize;

            // the duplicate suffixes from the second half carry no
            // extra information
            if index < size {
                if index == 0 {
                    // this row is the unrotated block; record where it
                    // landed and wrap to the last byte
                    dest[start_field..start_field + 4].copy_from_slice(&count.to_le_bytes());
                    index = size;
                }
                dest.push(doubled[index - 1]);
                count += 1;
            }
        }
    }
    dest
}

/// Invert the transform.
pub fn decode(source: &[u8]) -> Result<Vec<u8>, CodecErrors> {
    if source.is_empty() {
        return Ok(Vec::new());
    }
    if source.len() < 8 {
        return Err(CodecErrors::TruncatedData(8, source.len()));
    }
    let dest_size = u32::from_le_bytes(source[0..4].try_into().unwrap()) as usize;
    let block_size = u32::from_le_bytes(source[4..8].try_into().unwrap()) as usize;

    if block_size == 0 || block_size > MAX_BLOCK_SIZE as usize {
        return Err(CodecErrors::Generic("block size in header out of range"));
    }
    let mut dest = Vec::with_capacity(dest_size);
    let mut counts = [0_u32; 256];
    let mut transform = vec![0_u32; block_size];

    let mut src_index = 8;

    while src_index < source.len() && dest.len() < dest_size {
        if source.len() - src_index < 4 {
            return Err(CodecErrors::TruncatedData(src_index + 4, source.len()));
        }
        let start_index =
            u32::from_le_bytes(source[src_index..src_index + 4].try_into().unwrap()) as usize;
        src_index += 4;

        let size = block_size
            .min(source.len() - src_index)
            .min(dest_size - dest.len());
        let last_column = &source[src_index..src_index + size];
        src_index += size;

        counts.fill(0);

        // transform[i] counts earlier occurrences of the same symbol,
        // the stable-sort rank within its bucket
        for (i, symbol) in last_column.iter().enumerate() {
            transform[i] = counts[usize::from(*symbol)];
            counts[usize::from(*symbol)] += 1;
        }
        // turn the histogram into exclusive prefix sums: the first
        // row index of each symbol's bucket
        let mut base = [0_u32; 256];
        let mut sum = 0_u32;

        for (symbol, count) in counts.iter().enumerate() {
            base[symbol] = sum;
            sum += count;
        }

        if start_index >= size {
            return Err(CodecErrors::Generic("block start index out of range"));
        }
        let mut index = start_index;

        for _ in 0..size {
            let symbol = last_column[index];

            dest.push(symbol);
            index = (transform[index] + base[usize::from(symbol)]) as usize;
        }
    }

    Ok(dest)
}
