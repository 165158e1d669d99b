// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! 2-D 8x8 block transforms built from two passes of the 1-D kernels.
//!
//! Each forward pass reads the 8 stride-8 lanes of its input and writes its
//! outputs contiguously, which transposes the block; two passes transpose it
//! back. The inverse composition must undo the passes in mirrored order:
//! first the pass matching the forward transform's second pass, then the one
//! matching its first. Running them in the other order still produces
//! plausible-looking output but breaks the bit-exact round trip.

use crate::dct::fdct8_checked;
use crate::error::{Error, Result};
use crate::idct::idct8_checked;
use crate::lifting::{NoopCheck, OverflowCheck};
use crate::util::tracing_wrappers::*;
use crate::view::{RowView, RowViewMut};
use crate::{BLOCK_DIM, BLOCK_SIZE};

/// Forward 2-D transform of an 8x8 block: row pass, then column pass over
/// the intermediate.
pub fn fdct8x8(coeffs: &mut [i32; BLOCK_SIZE], samples: &[i32; BLOCK_SIZE]) {
    fdct8x8_checked(coeffs, samples, NoopCheck);
}

/// [`fdct8x8`] with an injectable hook observing every fixed-point multiply.
pub fn fdct8x8_checked<C: OverflowCheck>(
    coeffs: &mut [i32; BLOCK_SIZE],
    samples: &[i32; BLOCK_SIZE],
    check: C,
) {
    let mut tmp = [0i32; BLOCK_SIZE];
    for (i, row) in tmp.as_chunks_mut::<BLOCK_DIM>().0.iter_mut().enumerate() {
        fdct8_checked(row, RowView::new(&samples[i..], BLOCK_DIM), check);
    }
    for (i, row) in coeffs.as_chunks_mut::<BLOCK_DIM>().0.iter_mut().enumerate() {
        fdct8_checked(row, RowView::new(&tmp[i..], BLOCK_DIM), check);
    }
    trace!("forward 8x8 block, dc = {}", coeffs[0]);
}

/// Inverse 2-D transform of an 8x8 block, in the order mirroring
/// [`fdct8x8`].
pub fn idct8x8(samples: &mut [i32; BLOCK_SIZE], coeffs: &[i32; BLOCK_SIZE]) {
    idct8x8_checked(samples, coeffs, NoopCheck);
}

/// [`idct8x8`] with an injectable hook observing every fixed-point multiply.
pub fn idct8x8_checked<C: OverflowCheck>(
    samples: &mut [i32; BLOCK_SIZE],
    coeffs: &[i32; BLOCK_SIZE],
    check: C,
) {
    let mut tmp = [0i32; BLOCK_SIZE];
    for (i, row) in coeffs.as_chunks::<BLOCK_DIM>().0.iter().enumerate() {
        idct8_checked(RowViewMut::new(&mut tmp[i..], BLOCK_DIM), row, check);
    }
    for (i, row) in tmp.as_chunks::<BLOCK_DIM>().0.iter().enumerate() {
        idct8_checked(RowViewMut::new(&mut samples[i..], BLOCK_DIM), row, check);
    }
    trace!("inverse 8x8 block");
}

/// Slice-based [`fdct8x8`]; both slices must hold exactly 64 elements.
pub fn fdct8x8_slice(coeffs: &mut [i32], samples: &[i32]) -> Result<()> {
    let coeffs_len = coeffs.len();
    let coeffs: &mut [i32; BLOCK_SIZE] = coeffs
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(coeffs_len))?;
    let samples_len = samples.len();
    let samples: &[i32; BLOCK_SIZE] = samples
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(samples_len))?;
    fdct8x8(coeffs, samples);
    Ok(())
}

/// Slice-based [`idct8x8`]; both slices must hold exactly 64 elements.
pub fn idct8x8_slice(samples: &mut [i32], coeffs: &[i32]) -> Result<()> {
    let samples_len = samples.len();
    let samples: &mut [i32; BLOCK_SIZE] = samples
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(samples_len))?;
    let coeffs_len = coeffs.len();
    let coeffs: &[i32; BLOCK_SIZE] = coeffs
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(coeffs_len))?;
    idct8x8(samples, coeffs);
    Ok(())
}
