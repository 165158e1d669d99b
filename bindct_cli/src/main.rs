// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Demonstration driver for the reversible 8-point transform.
//!
//! Transforms a fixed 8x8 pixel block with the row-then-column forward
//! composition, prints the intermediate tables, then undoes the passes in
//! mirrored order and prints the bit-exact reconstruction. No flags, no
//! configuration.

use bindct::{BLOCK_DIM, BLOCK_SIZE, RowView, RowViewMut, fdct8, idct8};

const PIXELS: [u8; BLOCK_SIZE] = [
    208, 174, 79, 67, 10, 76, 176, 181, //
    196, 70, 116, 116, 128, 154, 78, 146, //
    164, 163, 225, 214, 213, 205, 105, 143, //
    156, 182, 218, 206, 202, 170, 87, 135, //
    165, 161, 117, 152, 142, 60, 63, 101, //
    194, 183, 200, 201, 162, 160, 95, 144, //
    210, 165, 188, 198, 126, 129, 97, 208, //
    215, 180, 135, 184, 121, 34, 137, 227,
];

/// Bias removed from each 8-bit pixel before the transform.
const PIXEL_BIAS: i32 = 128;

/// Fractional bits each sample gains before the transform and loses after
/// the inverse.
const FRACTION_BITS: u32 = 4;

fn print_block<I: IntoIterator<Item = i32>>(values: I, separator: &str) {
    let values: Vec<i32> = values.into_iter().collect();
    for row in values.as_chunks::<BLOCK_DIM>().0 {
        for value in row {
            print!("{value}{separator}");
        }
        println!();
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    #[cfg(feature = "tracing-subscriber")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let mut samples = [0i32; BLOCK_SIZE];
    for (sample, &pixel) in samples.iter_mut().zip(PIXELS.iter()) {
        *sample = (i32::from(pixel) - PIXEL_BIAS) << FRACTION_BITS;
    }

    println!("PIXELS:");
    print_block(PIXELS.iter().map(|&p| i32::from(p) - PIXEL_BIAS), ", ");

    // Forward composition: one pass per row, one per column of the
    // intermediate. Each pass transposes, so two passes restore the
    // orientation.
    let mut intermediate = [0i32; BLOCK_SIZE];
    let mut coeffs = [0i32; BLOCK_SIZE];
    for (i, lane) in intermediate
        .as_chunks_mut::<BLOCK_DIM>()
        .0
        .iter_mut()
        .enumerate()
    {
        fdct8(lane, RowView::new(&samples[i..], BLOCK_DIM));
    }
    for (i, lane) in coeffs.as_chunks_mut::<BLOCK_DIM>().0.iter_mut().enumerate() {
        fdct8(lane, RowView::new(&intermediate[i..], BLOCK_DIM));
    }

    println!("COEFFS:");
    print_block(coeffs.iter().copied(), ", ");

    // Inverse composition in mirrored order: undo the column pass first,
    // then the row pass.
    for (i, lane) in coeffs.as_chunks::<BLOCK_DIM>().0.iter().enumerate() {
        idct8(RowViewMut::new(&mut intermediate[i..], BLOCK_DIM), lane);
    }

    println!("AFTER FIRST PASS:");
    print_block(intermediate.iter().copied(), ", ");

    let mut reconstructed = [0i32; BLOCK_SIZE];
    for (i, lane) in intermediate.as_chunks::<BLOCK_DIM>().0.iter().enumerate() {
        idct8(RowViewMut::new(&mut reconstructed[i..], BLOCK_DIM), lane);
    }

    println!("OUTPUT:");
    print_block(
        reconstructed.iter().map(|&s| s >> FRACTION_BITS),
        " ",
    );

    Ok(())
}
