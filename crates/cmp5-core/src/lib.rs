/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the cmp5 crates
//!
//! This crate provides the two low-level building blocks every codec in
//! the cmp5 family leans on
//!
//! - An MSB-first bit writer and reader built around a 32-bit accumulator,
//!   used by the Huffman and LZSS bitstreams
//! - A linear-time suffix-array builder (SA-IS), used by the
//!   Burrows-Wheeler transform and the LZSS dictionary index
//!
//! Nothing here knows about framing or codec identifiers, that lives in
//! `cmp5-codecs`.
pub mod bitstream;
pub mod suffix_array;
