/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding.
///
/// Encoding never fails; out-of-range configuration is clamped when the
/// options are built, and the encoders size their own output.
pub enum CodecErrors {
    /// The container does not start with the `CMP5` magic bytes
    BadMagicBytes,
    /// The magic matched but the version byte is not one we understand
    UnknownVersion(u8),
    /// The container names a codec identifier this build does not know
    UnknownCodec(u8),
    /// The payload is shorter than the codec's minimum frame
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes the frame needs
    /// - 2nd argument is the number of bytes actually present
    TruncatedData(usize, usize),
    /// The decoded output does not match the framed uncompressed length
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length actually produced
    SizeMismatch(usize, usize),
    /// More codecs than the container's count byte can record
    PipelineTooLong(usize),
    /// Generic message
    Generic(&'static str)
}

impl Debug for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecErrors::BadMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `CMP5` container magic")
            }
            CodecErrors::UnknownVersion(version) => {
                writeln!(f, "Unknown container version byte {version:#04x}")
            }
            CodecErrors::UnknownCodec(id) => {
                writeln!(f, "Unknown codec identifier {id}")
            }
            CodecErrors::TruncatedData(needed, found) => {
                writeln!(
                    f,
                    "Truncated data, frame needs {needed} bytes but only {found} are present"
                )
            }
            CodecErrors::SizeMismatch(expected, found) => {
                writeln!(
                    f,
                    "Uncompressed size mismatch, expected {expected} bytes but decoded {found}"
                )
            }
            CodecErrors::PipelineTooLong(count) => {
                writeln!(f, "Pipeline of {count} codecs cannot be recorded in one count byte")
            }
            CodecErrors::Generic(message) => {
                writeln!(f, "{message}")
            }
        }
    }
}

impl Display for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<&'static str> for CodecErrors {
    fn from(message: &'static str) -> Self {
        CodecErrors::Generic(message)
    }
}

impl std::error::Error for CodecErrors {}
