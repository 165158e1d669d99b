// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Forward 8-point transform.

use crate::lifting::{NoopCheck, OverflowCheck, lift, unbiased_rshift};
use crate::view::RowView;

/// Forward 8-point transform: 8 samples read through `input`, 8 coefficients
/// written contiguously to `output` with the DC term at index 0.
///
/// Callers must keep samples within ±2^14; larger values can overflow the
/// internal fixed-point multiplies, silently in this entry point. Use
/// [`fdct8_checked`] with [`crate::AssertingCheck`] to catch that in
/// verification builds.
#[inline]
pub fn fdct8(output: &mut [i32; 8], input: RowView<'_>) {
    fdct8_checked(output, input, NoopCheck);
}

/// [`fdct8`] with an injectable hook observing every fixed-point multiply.
pub fn fdct8_checked<C: OverflowCheck>(output: &mut [i32; 8], input: RowView<'_>, check: C) {
    // 31 adds, 5 shifts, 15 fixed-point multiplies. Eleven multiplies is the
    // theoretical floor for a uniformly scaled 8-point transform; the extra
    // four buy exact invertibility with orthonormal scaling: the DC pair and
    // the type-IV core each spend a 3-step lifting rotation by pi/4 where a
    // plain sqrt(2) scaling of two values would lose information to rounding.
    //
    // Initial permutation.
    let mut t0 = input.get(0);
    let mut t4 = input.get(1);
    let mut t2 = input.get(2);
    let mut t6 = input.get(3);
    let mut t7 = input.get(4);
    let mut t3 = input.get(5);
    let mut t5 = input.get(6);
    let mut t1 = input.get(7);
    // +1/-1 butterflies.
    t1 = t0 - t1;
    let t1h = unbiased_rshift(t1, 1);
    t0 -= t1h;
    t4 += t5;
    let t4h = unbiased_rshift(t4, 1);
    t5 -= t4h;
    t3 = t2 - t3;
    t2 -= unbiased_rshift(t3, 1);
    t6 += t7;
    let t6h = unbiased_rshift(t6, 1);
    t7 = t6h - t7;
    // Embedded 4-point type-II DCT.
    t0 += t6h;
    t6 = t0 - t6;
    t2 = t4h - t2;
    t4 = t2 - t4;
    // Embedded 2-point type-II DCT: rotation by pi/4.
    t0 -= lift(t4, 0, check);
    t4 += lift(t0, 1, check);
    t0 -= lift(t4, 2, check);
    // Embedded 2-point type-IV DST: rotation by 3*pi/8.
    t6 -= lift(t2, 3, check);
    t2 += lift(t6, 4, check);
    t6 -= lift(t2, 5, check);
    // Embedded 4-point type-IV DST.
    t3 += lift(t5, 6, check);
    t5 += lift(t3, 7, check);
    t3 -= lift(t5, 8, check);
    t7 = unbiased_rshift(t5, 1) - t7;
    t5 -= t7;
    t3 = t1h - t3;
    t1 -= t3;
    // Rotations by pi/16 and 3*pi/16.
    t7 += lift(t1, 9, check);
    t1 -= lift(t7, 10, check);
    t7 += lift(t1, 11, check);
    t5 += lift(t3, 12, check);
    t3 -= lift(t5, 13, check);
    t5 += lift(t3, 14, check);
    output[0] = t0;
    output[1] = t1;
    output[2] = t2;
    output[3] = t3;
    output[4] = t4;
    output[5] = t5;
    output[6] = t6;
    output[7] = t7;
}
