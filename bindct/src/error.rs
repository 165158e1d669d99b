// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Lane out of bounds: need 8 elements at stride {stride} in a {len}-element buffer")]
    LaneOutOfBounds { len: usize, stride: usize },
    #[error("Invalid block length: {0}, expected 64")]
    InvalidBlockLength(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
