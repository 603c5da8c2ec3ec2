/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reversible byte-stream codecs and the CMP5 pipeline container
//!
//! Every codec in this crate maps bytes to bytes, is byte-exact under
//! `decode(encode(x)) == x`, and carries an 8-bit identifier. The
//! [`Pipeline`](crate::pipeline::Pipeline) type composes an ordered
//! sequence of codecs into a self-describing container that records
//! which codecs to re-apply, in reverse, on decode.
//!
//! # Usage
//!
//! Compressing with a block-sorting pipeline
//!
//! ```
//! use cmp5_codecs::codec::Codec;
//! use cmp5_codecs::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::from_codecs(vec![
//!     Codec::Bwt(Default::default()),
//!     Codec::MoveToFront1,
//!     Codec::Huffman(Default::default())
//! ]);
//!
//! let compressed = pipeline.compress(b"abracadabra").unwrap();
//! let restored = Pipeline::decompress(&compressed).unwrap();
//!
//! assert_eq!(&restored, b"abracadabra");
//! ```
//!
//! The individual codecs are also usable on their own, e.g. the
//! Burrows-Wheeler transform via [`bwt::encode`] and [`bwt::decode`].
pub mod bwt;
pub mod codec;
pub mod delta;
pub mod errors;
pub mod huffman;
pub mod lzss;
pub mod mtf1;
pub mod pipeline;
pub mod rgb2planes;
pub mod rle0;
