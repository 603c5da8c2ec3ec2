/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

const AFTER_HELP: &str = "EXAMPLES:
  cmp5 -c --huffman ./canterbury/alice29.txt ./alice29.cmp5
  cmp5 -d ./alice29.cmp5 ./alice29.txt
  cmp5 -t --bwt=1024 --mtf1 --rle0 --huffman ./canterbury/alice29.txt
  cmp5 -c --huffman ./canterbury ./compressed
  cmp5 -c --huffman './test/*.txt' ./compressed
  cmp5 -c -v --lzss random

Pre-processing flags are applied in the order they are given on the
command line. Decompression reads the codec list from the container and
takes no codec flags. Use `random` as <input> to compress 256 KiB of
seeded pseudo-random data.";

pub fn create_cmd_args() -> Command {
    Command::new("cmp5")
        .version(env!("CARGO_PKG_VERSION"))
        .about("CoMPre5sor: composes reversible byte-stream codecs into a self-describing container")
        .after_help(AFTER_HELP)
        .next_line_help(false)
        .term_width(120)
        .arg(
            Arg::new("compress")
                .short('c')
                .long("compress")
                .help("Compress data from <input> to <output>")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Decompress data from <input> to <output>")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("test")
                .short('t')
                .long("test")
                .help("Compress and decompress <input> in memory and compare")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("benchmark")
                .short('b')
                .long("benchmark")
                .help("Like --test, with ten timed iterations per phase")
                .action(ArgAction::SetTrue)
        )
        .group(
            ArgGroup::new("mode")
                .args(["compress", "decompress", "test", "benchmark"])
                .required(true)
        )
        .args(add_codec_flags())
        .args(add_logging_options())
        .arg(
            Arg::new("input")
                .help("Input file, directory, wildcard pattern or `random`")
                .required(true)
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("output")
                .help("Output file or directory")
                .action(ArgAction::Set)
        )
}

fn add_codec_flags() -> Vec<Arg> {
    const PREPROCESS: &str = "Pre-processing";
    const ENTROPY: &str = "Entropy coders";

    vec![
        Arg::new("rgb-split")
            .long("rgb-split")
            .help_heading(PREPROCESS)
            .help("Split R8G8B8 data into color planes (size must be divisible by 3)")
            .action(ArgAction::SetTrue),
        Arg::new("delta")
            .long("delta")
            .help_heading(PREPROCESS)
            .help("Apply delta encoding")
            .action(ArgAction::SetTrue),
        Arg::new("bwt")
            .long("bwt")
            .help_heading(PREPROCESS)
            .help("Apply the Burrows-Wheeler transform, `--bwt=SIZE` picks the block size (default 65535, max 16 MiB - 1)")
            .value_name("BLOCK_SIZE")
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("65535")
            .value_parser(value_parser!(u32)),
        Arg::new("mtf1")
            .long("mtf1")
            .help_heading(PREPROCESS)
            .help("Apply move-to-front-1 encoding")
            .action(ArgAction::SetTrue),
        Arg::new("rle0")
            .long("rle0")
            .help_heading(PREPROCESS)
            .help("Apply zero run-length encoding")
            .action(ArgAction::SetTrue),
        Arg::new("huffman")
            .long("huffman")
            .help_heading(ENTROPY)
            .help("Use the static Huffman entropy coder")
            .action(ArgAction::SetTrue),
        Arg::new("lzss")
            .long("lzss")
            .help_heading(ENTROPY)
            .help("Use the LZSS coder, `--lzss=SIZE` picks the dictionary size, a power of two (default 4096)")
            .value_name("DICT_SIZE")
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("4096")
            .value_parser(value_parser!(u32)),
    ]
}

fn add_logging_options() -> [Arg; 5] {
    [
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Be verbose, same as --info"),
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display information about each processed stream")
    ]
}
