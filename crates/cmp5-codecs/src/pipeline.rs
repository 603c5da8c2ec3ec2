/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The CMP5 pipeline container
//!
//! An ordered sequence of codecs applied front to back on compression
//! and back to front on decompression. The container records only the
//! codec identifiers; every codec frame is self-describing beyond
//! that.
//!
//! # Container layout, little-endian throughout
//!
//! | offset | size | field                                  |
//! |--------|------|----------------------------------------|
//! | 0      | 4    | magic `CMP5` (bytes `35 50 4D 43`)     |
//! | 4      | 4    | uncompressed length                    |
//! | 8      | 1    | codec count N                          |
//! | 9      | N    | codec identifiers, in encode order     |
//! | 9+N    | ...  | output of the last codec applied       |
//!
//! A codec count of zero is valid and means the payload is stored as
//! is.

use log::trace;

use crate::codec::Codec;
use crate::errors::CodecErrors;

/// `CMP5`, "CoMPre5sor data version 5", as a little-endian u32.
pub const MAGIC: u32 = 0x434D_5035;

/// Offset of the first codec identifier.
const HEADER_SIZE: usize = 4 + 4 + 1;

/// An ordered codec sequence.
///
/// Built by the caller, consumed by [`compress`](Pipeline::compress).
/// Decompression needs no pipeline, the container itself records what
/// to undo.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    codecs: Vec<Codec>
}

impl Pipeline {
    pub fn new() -> Pipeline {
        Pipeline { codecs: Vec::new() }
    }

    pub fn from_codecs(codecs: Vec<Codec>) -> Pipeline {
        Pipeline { codecs }
    }

    /// Append a codec to the end of the sequence.
    pub fn push(&mut self, codec: Codec) {
        self.codecs.push(codec);
    }

    pub fn codecs(&self) -> &[Codec] {
        &self.codecs
    }

    /// Run the pipeline over `source` and wrap the result in a
    /// container.
    pub fn compress(&self, source: &[u8]) -> Result<Vec<u8>, CodecErrors> {
        if self.codecs.len() > usize::from(u8::MAX) {
            return Err(CodecErrors::PipelineTooLong(self.codecs.len()));
        }
        let mut dest = Vec::with_capacity(HEADER_SIZE + self.codecs.len() + source.len());
        dest.extend_from_slice(&MAGIC.to_le_bytes());
        dest.extend_from_slice(&(source.len() as u32).to_le_bytes());
        dest.push(self.codecs.len() as u8);

        for codec in &self.codecs {
            dest.push(codec.identifier());
        }

        let mut compressed = source.to_vec();

        for codec in &self.codecs {
            trace!(
                "applying {}: {} bytes in",
                codec.name(),
                compressed.len()
            );
            compressed = codec.encode(&compressed);
        }
        dest.extend_from_slice(&compressed);

        Ok(dest)
    }

    /// Unwrap a container and undo its codecs in reverse order.
    pub fn decompress(source: &[u8]) -> Result<Vec<u8>, CodecErrors> {
        if source.len() < HEADER_SIZE {
            return Err(CodecErrors::TruncatedData(HEADER_SIZE, source.len()));
        }
        if source[1..4] != [0x50, 0x4D, 0x43] {
            return Err(CodecErrors::BadMagicBytes);
        }
        if source[0] != 0x35 {
            return Err(CodecErrors::UnknownVersion(source[0]));
        }
        let uncompressed_size = u32::from_le_bytes(source[4..8].try_into().unwrap()) as usize;
        let codec_count = usize::from(source[8]);

        if source.len() < HEADER_SIZE + codec_count {
            return Err(CodecErrors::TruncatedData(
                HEADER_SIZE + codec_count,
                source.len()
            ));
        }
        let identifiers = &source[HEADER_SIZE..HEADER_SIZE + codec_count];
        let mut result = source[HEADER_SIZE + codec_count..].to_vec();

        // undo the codecs back to front
        for identifier in identifiers.iter().rev() {
            let codec = Codec::from_identifier(*identifier)
                .ok_or(CodecErrors::UnknownCodec(*identifier))?;

            result = codec.decode(&result)?;
            trace!("undoing {}: {} bytes out", codec.name(), result.len());
        }

        if result.len() != uncompressed_size {
            return Err(CodecErrors::SizeMismatch(uncompressed_size, result.len()));
        }
        Ok(result)
    }
}
