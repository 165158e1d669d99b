// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Strided views over flat coefficient buffers.
//!
//! The kernels read and write 8 logical elements spaced `stride` apart in a
//! caller-owned flat slice, so the same 1-D kernel can walk a row (stride 1)
//! or a column (stride = row length) of a 2-D block without copying.

use crate::error::{Error, Result};

/// The number of elements a kernel reads or writes through a view.
pub const LANE_LEN: usize = 8;

/// Read-only view of 8 elements at a fixed stride.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    data: &'a [i32],
    stride: usize,
}

impl<'a> RowView<'a> {
    /// Panics if element 7 is not addressable. For the fallible variant see
    /// [`RowView::try_new`].
    pub fn new(data: &'a [i32], stride: usize) -> Self {
        assert!(
            stride > 0 && data.len() > (LANE_LEN - 1) * stride,
            "lane out of bounds: len {} stride {stride}",
            data.len(),
        );
        Self { data, stride }
    }

    pub fn try_new(data: &'a [i32], stride: usize) -> Result<Self> {
        if stride == 0 || data.len() <= (LANE_LEN - 1) * stride {
            return Err(Error::LaneOutOfBounds {
                len: data.len(),
                stride,
            });
        }
        Ok(Self { data, stride })
    }

    #[inline(always)]
    pub fn get(self, index: usize) -> i32 {
        debug_assert!(index < LANE_LEN);
        self.data[index * self.stride]
    }
}

/// Writable view of 8 elements at a fixed stride.
#[derive(Debug)]
pub struct RowViewMut<'a> {
    data: &'a mut [i32],
    stride: usize,
}

impl<'a> RowViewMut<'a> {
    /// Panics if element 7 is not addressable. For the fallible variant see
    /// [`RowViewMut::try_new`].
    pub fn new(data: &'a mut [i32], stride: usize) -> Self {
        assert!(
            stride > 0 && data.len() > (LANE_LEN - 1) * stride,
            "lane out of bounds: len {} stride {stride}",
            data.len(),
        );
        Self { data, stride }
    }

    pub fn try_new(data: &'a mut [i32], stride: usize) -> Result<Self> {
        if stride == 0 || data.len() <= (LANE_LEN - 1) * stride {
            return Err(Error::LaneOutOfBounds {
                len: data.len(),
                stride,
            });
        }
        Ok(Self { data, stride })
    }

    #[inline(always)]
    pub fn set(&mut self, index: usize, value: i32) {
        debug_assert!(index < LANE_LEN);
        self.data[index * self.stride] = value;
    }
}
