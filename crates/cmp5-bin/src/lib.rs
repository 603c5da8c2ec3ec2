/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line driver for the cmp5 toolkit
//!
//! Reads whole streams from disk (or the seeded `random` generator),
//! feeds them through a codec pipeline assembled from the command line
//! flags, and writes or verifies the result. Files, directories and
//! `*` wildcard patterns are accepted as input.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::Instant;

use log::{error, info, warn};
use simd_adler32::Adler32;

use cmp5_codecs::pipeline::Pipeline;

use crate::cmd_parsers::CompressMode;

mod cmd_args;
mod cmd_parsers;
mod file_io;

type MainResult = Result<(), Box<dyn std::error::Error>>;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let mode = cmd_parsers::parse_mode(&options);
    let pipeline = cmd_parsers::parse_pipeline(&options);

    if mode == CompressMode::Decompress && !pipeline.codecs().is_empty() {
        warn!("codec flags are ignored when decompressing, the container records the codecs");
    }
    let input = options.get_one::<String>("input").unwrap().clone();
    let output = options.get_one::<String>("output").cloned();

    if let Err(reason) = run(mode, &pipeline, &input, output.as_deref()) {
        error!("could not complete the operation: {reason}");
        exit(-1);
    }
}

fn run(mode: CompressMode, pipeline: &Pipeline, input: &str, output: Option<&str>) -> MainResult {
    let input_path = Path::new(input);

    if input == "random" || input_path.is_file() {
        let output = output.map(PathBuf::from);

        return process_stream(mode, pipeline, input, output.as_deref());
    }
    if input_path.is_dir() {
        let output_dir = resolve_output_dir(mode, output)?;

        for entry in fs::read_dir(input_path)? {
            let path = entry?.path();

            if path.is_file() {
                process_into_dir(mode, pipeline, &path, output_dir.as_deref())?;
            }
        }
        return Ok(());
    }
    // no such file or directory, maybe a wildcard pattern
    let pattern = input_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    if pattern.contains('*') {
        let directory = match input_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new(".")
        };
        let output_dir = resolve_output_dir(mode, output)?;

        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("");

            if path.is_file() && file_io::wildcard_match(pattern, name) {
                process_into_dir(mode, pipeline, &path, output_dir.as_deref())?;
            }
        }
        return Ok(());
    }
    Err(format!("file or directory `{input}` not found").into())
}

/// Compression and decompression of multiple inputs need a directory
/// to write into; the in-memory modes need none.
fn resolve_output_dir(mode: CompressMode, output: Option<&str>) -> Result<Option<PathBuf>, String> {
    match mode {
        CompressMode::Compress | CompressMode::Decompress => {
            let path = output.map(PathBuf::from);

            match path {
                Some(directory) if directory.is_dir() => Ok(Some(directory)),
                _ => Err("the output of a multi-file operation must be a directory".into())
            }
        }
        CompressMode::Test | CompressMode::Benchmark => Ok(None)
    }
}

fn process_into_dir(
    mode: CompressMode, pipeline: &Pipeline, input: &Path, output_dir: Option<&Path>
) -> MainResult {
    let output = match (output_dir, input.file_name()) {
        (Some(directory), Some(name)) => Some(directory.join(name)),
        _ => None
    };
    let input = input.to_string_lossy().into_owned();

    process_stream(mode, pipeline, &input, output.as_deref())
}

fn process_stream(
    mode: CompressMode, pipeline: &Pipeline, input: &str, output: Option<&Path>
) -> MainResult {
    let source = file_io::read_input(input)?;

    if source.is_empty() {
        warn!("no source data, skipping `{input}`");
        return Ok(());
    }

    match mode {
        CompressMode::Compress => {
            info!("input data checksum is 0x{:08x}", checksum(&source));

            let result = pipeline.compress(&source)?;

            report_compression(source.len(), result.len());
            let output = output.ok_or("an output file is required when compressing")?;
            file_io::write_output(output, &result)?;
        }
        CompressMode::Decompress => {
            let result = Pipeline::decompress(&source)?;

            info!("output data checksum is 0x{:08x}", checksum(&result));
            println!("Data decompressed to {} bytes.", result.len());

            let output = output.ok_or("an output file is required when decompressing")?;
            file_io::write_output(output, &result)?;
        }
        CompressMode::Test | CompressMode::Benchmark => {
            test_stream(mode, pipeline, &source)?;
        }
    }
    Ok(())
}

/// Adler-32 of a whole stream, for the verbose diagnostics only.
fn checksum(data: &[u8]) -> u32 {
    let mut hash = Adler32::new();

    hash.write(data);
    hash.finish()
}

fn report_compression(source_size: usize, result_size: usize) {
    let ratio = 100.0 - (result_size as f64) / (source_size as f64) * 100.0;
    let bits_per_char = (result_size as f64) * 8.0 / (source_size as f64);

    println!("Data compressed to {result_size} bytes (including header).");
    println!("Compression ratio is {ratio:.2}% ({bits_per_char:.3} bpc).");
}

/// Round-trip `source` in memory, timing the phases when benchmarking.
fn test_stream(mode: CompressMode, pipeline: &Pipeline, source: &[u8]) -> MainResult {
    let iterations = if mode == CompressMode::Benchmark { 10 } else { 1 };

    let start = Instant::now();
    let mut compressed = Vec::new();

    for _ in 0..iterations {
        compressed = pipeline.compress(source)?;
    }
    if mode == CompressMode::Benchmark {
        let millis = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

        println!("Compression took {millis:.2}ms.");
    }
    report_compression(source.len(), compressed.len());

    let start = Instant::now();
    let mut decompressed = Vec::new();

    for _ in 0..iterations {
        decompressed = Pipeline::decompress(&compressed)?;
    }
    if mode == CompressMode::Benchmark {
        let millis = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

        println!("Decompression took {millis:.2}ms.");
    }

    if decompressed.len() != source.len() {
        return Err(format!(
            "decompressed size {} does not match the input size {}",
            decompressed.len(),
            source.len()
        )
        .into());
    }
    if let Some(position) = source
        .iter()
        .zip(&decompressed)
        .position(|(a, b)| a != b)
    {
        return Err(format!("decompressed data differs from the input at byte {position}").into());
    }
    info!("compress/decompress run worked");
    Ok(())
}
