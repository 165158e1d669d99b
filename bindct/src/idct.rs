// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Inverse 8-point transform.

use crate::lifting::{NoopCheck, OverflowCheck, lift, unbiased_rshift};
use crate::view::RowViewMut;

/// Inverse 8-point transform: 8 coefficients read contiguously from `input`,
/// 8 reconstructed samples written through `output`.
///
/// Bit-exact inverse of [`crate::fdct8`]: it runs the same lifting table back
/// to front with each step's addition sign negated, undoing stage after
/// stage regardless of the rounding inside each step.
#[inline]
pub fn idct8(output: RowViewMut<'_>, input: &[i32; 8]) {
    idct8_checked(output, input, NoopCheck);
}

/// [`idct8`] with an injectable hook observing every fixed-point multiply.
pub fn idct8_checked<C: OverflowCheck>(mut output: RowViewMut<'_>, input: &[i32; 8], check: C) {
    let mut t0 = input[0];
    let mut t1 = input[1];
    let mut t2 = input[2];
    let mut t3 = input[3];
    let mut t4 = input[4];
    let mut t5 = input[5];
    let mut t6 = input[6];
    let mut t7 = input[7];
    t5 -= lift(t3, 14, check);
    t3 += lift(t5, 13, check);
    t5 -= lift(t3, 12, check);
    t7 -= lift(t1, 11, check);
    t1 += lift(t7, 10, check);
    t7 -= lift(t1, 9, check);
    t1 += t3;
    let t1h = unbiased_rshift(t1, 1);
    t3 = t1h - t3;
    t5 += t7;
    t7 = unbiased_rshift(t5, 1) - t7;
    t3 += lift(t5, 8, check);
    t5 -= lift(t3, 7, check);
    t3 -= lift(t5, 6, check);
    t6 += lift(t2, 5, check);
    t2 -= lift(t6, 4, check);
    t6 += lift(t2, 3, check);
    t0 += lift(t4, 2, check);
    t4 -= lift(t0, 1, check);
    t0 += lift(t4, 0, check);
    t4 = t2 - t4;
    let t4h = unbiased_rshift(t4, 1);
    t2 = t4h - t2;
    t6 = t0 - t6;
    let t6h = unbiased_rshift(t6, 1);
    t0 -= t6h;
    t7 = t6h - t7;
    t6 -= t7;
    t2 += unbiased_rshift(t3, 1);
    t3 = t2 - t3;
    t5 += t4h;
    t4 -= t5;
    t0 += t1h;
    t1 = t0 - t1;
    output.set(0, t0);
    output.set(1, t4);
    output.set(2, t2);
    output.set(3, t6);
    output.set(4, t7);
    output.set(5, t3);
    output.set(6, t5);
    output.set(7, t1);
}
