/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End-to-end scenarios for the cmp5 workspace
//!
//! Everything here exercises the public crate surfaces the way the
//! command line driver does: whole streams through whole pipelines.

#![allow(unused)]

mod conformance;
mod container;
mod scenarios;

/// The generator the scenarios share: an MSVC-style LCG mapped to
/// bytes, seed 3571.
pub fn seeded_random_data(size: usize) -> Vec<u8> {
    let mut seed = 3571_u32;

    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(214013).wrapping_add(2531011);
            (((seed >> 16) & 0x7FFF) * 255 / 0x7FFF) as u8
        })
        .collect()
}

/// A synthetic RGB image whose three planes each vary slowly.
pub fn synthetic_rgb_image(pixels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels * 3);

    for i in 0..pixels {
        data.push((i / 11) as u8);
        data.push((128 + i / 17) as u8);
        data.push((64 + i / 23) as u8);
    }
    data
}
