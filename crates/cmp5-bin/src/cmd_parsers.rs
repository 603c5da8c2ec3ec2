/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::Level;

use cmp5_codecs::bwt::BwtOptions;
use cmp5_codecs::codec::Codec;
use cmp5_codecs::lzss::LzssOptions;
use cmp5_codecs::pipeline::Pipeline;

/// What the driver has been asked to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompressMode {
    Compress,
    Decompress,
    Test,
    Benchmark
}

pub fn parse_mode(options: &ArgMatches) -> CompressMode {
    if options.get_flag("compress") {
        CompressMode::Compress
    } else if options.get_flag("decompress") {
        CompressMode::Decompress
    } else if options.get_flag("benchmark") {
        CompressMode::Benchmark
    } else {
        CompressMode::Test
    }
}

/// Collect the codec flags in the order they appeared on the command
/// line.
pub fn parse_pipeline(options: &ArgMatches) -> Pipeline {
    let mut entries: Vec<(usize, Codec)> = Vec::new();

    let mut record = |id: &str, codec: Codec| {
        if let Some(mut indices) = options.indices_of(id) {
            if let Some(position) = indices.next() {
                entries.push((position, codec));
            }
        }
    };

    if options.get_flag("rgb-split") {
        record("rgb-split", Codec::RgbToPlanes);
    }
    if options.get_flag("delta") {
        record("delta", Codec::Delta);
    }
    if let Some(block_size) = options.get_one::<u32>("bwt") {
        let codec = Codec::Bwt(BwtOptions::default().set_block_size(*block_size));

        record("bwt", codec);
    }
    if options.get_flag("mtf1") {
        record("mtf1", Codec::MoveToFront1);
    }
    if options.get_flag("rle0") {
        record("rle0", Codec::ZeroRunLength);
    }
    if options.get_flag("huffman") {
        record("huffman", Codec::Huffman(Default::default()));
    }
    if let Some(dictionary_size) = options.get_one::<u32>("lzss") {
        let bits = if *dictionary_size > 0 {
            dictionary_size.ilog2()
        } else {
            12
        };
        let codec = Codec::Lzss(LzssOptions::default().set_dictionary_bits(bits));

        record("lzss", codec);
    }

    entries.sort_by_key(|entry| entry.0);

    Pipeline::from_codecs(entries.into_iter().map(|entry| entry.1).collect())
}

/// Set up logging options.
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") || options.get_flag("verbose") {
        log_level = Level::Info;
    } else {
        log_level = Level::Error;
    }

    if simple_logger::init_with_level(log_level).is_err() {
        eprintln!("could not set up the logger");
    }
}
