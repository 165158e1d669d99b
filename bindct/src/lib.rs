// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Reversible integer 8-point DCT.
//!
//! A forward type-II DCT and its bit-exact inverse, built entirely from
//! add/subtract butterflies and fixed-point lifting steps. For any sample
//! vector within the working range, `idct8(fdct8(x)) == x` element for
//! element, in pure i32 arithmetic. The coefficients carry a fixed,
//! index-dependent scale relative to an orthonormal DCT-II (the DC gain is
//! 2*sqrt(2) per 1-D pass); that scale is a property of the lifting-constant
//! set and must never be renormalized separately from the inverse.
//!
//! The [`block`] module composes the 1-D kernels into the 8x8 block
//! transform; [`view`] provides the strided access the kernels use to walk
//! rows or columns of a flat buffer.

#![deny(unsafe_code)]

pub mod block;
pub mod dct;
pub mod error;
pub mod idct;
pub mod lifting;
pub mod util;
pub mod view;

pub use block::{fdct8x8, fdct8x8_checked, fdct8x8_slice, idct8x8, idct8x8_checked, idct8x8_slice};
pub use dct::{fdct8, fdct8_checked};
pub use error::{Error, Result};
pub use idct::{idct8, idct8_checked};
pub use lifting::{AssertingCheck, LIFT_STEPS, LiftStep, NoopCheck, OverflowCheck, unbiased_rshift};
pub use view::{RowView, RowViewMut};

/// Side length of the transformed block.
pub const BLOCK_DIM: usize = 8;
/// Number of elements in a transformed block.
pub const BLOCK_SIZE: usize = BLOCK_DIM * BLOCK_DIM;

/// Largest sample magnitude the kernels support.
///
/// Derived from the 8-bit-pixel convention of the demonstration driver
/// ((pixel - 128) << 4 spans ±2^11) with headroom: at ±2^14 every internal
/// product stays below 2^29. Values outside this range are undefined
/// behavior, unchecked in the production path.
pub const MAX_SAMPLE_MAGNITUDE: i32 = 1 << 14;
