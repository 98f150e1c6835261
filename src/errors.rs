// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every fallible operation in the carver either completes and leaves
//! the grid consistent, or fails with one of these before touching
//! anything.

use failure::Fail;
use std::fmt;

/// Which dimension of the grid an operation was trying to shrink.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Removing a vertical seam shrinks the width.
    Width,
    /// Removing a horizontal seam shrinks the height.
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// The things that can go wrong while building or carving a grid.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// A grid must be at least one pixel in each dimension.
    #[fail(display = "a pixel grid cannot be {}x{}", width, height)]
    EmptyGrid { width: u32, height: u32 },

    /// Rows handed to `PixelGrid::from_rows` were not all the same length.
    #[fail(display = "row {} has {} pixels, expected {}", row, found, expected)]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A flat pixel buffer did not match the stated dimensions.
    #[fail(display = "expected {} pixels, found {}", expected, found)]
    PixelCount { expected: usize, found: usize },

    #[fail(
        display = "pixel ({}, {}) lies outside a {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The grid is already one pixel wide (or tall) along this axis.
    #[fail(display = "cannot remove a seam: {} is already 1", axis)]
    Degenerate { axis: Axis },

    #[fail(display = "seam has {} entries, expected {}", found, expected)]
    SeamLength { expected: usize, found: usize },

    #[fail(
        display = "seam entry {} is {}, which is not below {}",
        index, value, limit
    )]
    SeamOutOfRange { index: usize, value: u32, limit: u32 },

    #[fail(
        display = "seamcarve cannot upscale a {}x{} image to {}x{}",
        width, height, new_width, new_height
    )]
    CannotUpscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, CarveError>;
