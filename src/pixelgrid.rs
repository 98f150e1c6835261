// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! The only mutable state in the carver: a rectangular, row-major
//! field of RGB pixels that shrinks by one row or column at a time.
//! Everything that only needs to *read* the grid goes through the
//! `GridView` trait, so that the transposed `Flipper` can stand in
//! for it.

use crate::errors::{CarveError, Result};
use image::{Rgb, RgbImage};
use std::ops::Index;

/// A single RGB pixel.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// The channels in (R, G, B) order.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(p: Rgb<u8>) -> Self {
        let [red, green, blue] = p.0;
        Pixel { red, green, blue }
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(p: Pixel) -> Self {
        Rgb(p.channels())
    }
}

/// Read-only access to a rectangle of pixels.  Implementors promise
/// that `get_pixel` is valid for every `x < width()` and `y <
/// height()`, and that both dimensions are at least 1.
pub trait GridView {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_pixel(&self, x: u32, y: u32) -> Pixel;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }
}

/// A W×H table of pixels, W and H both at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Build a grid from a row-major buffer of exactly `width * height`
    /// pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyGrid { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CarveError::PixelCount {
                expected,
                found: pixels.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a table of rows.  Every row must be the same
    /// length as the first.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(CarveError::RaggedRows {
                row,
                expected: width,
                found: r.len(),
            });
        }
        PixelGrid::new(
            width as u32,
            height as u32,
            rows.into_iter().flatten().collect(),
        )
    }

    /// A grid where every pixel is the same color.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        PixelGrid::new(
            width,
            height,
            vec![pixel; width as usize * height as usize],
        )
    }

    pub fn from_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        PixelGrid::new(width, height, image.pixels().map(|p| Pixel::from(*p)).collect())
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| self[(x, y)].into())
    }

    /// Checked access to a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        if !self.in_bounds(x, y) {
            return Err(CarveError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self[(x, y)])
    }

    /// Row `y`, left to right.
    pub fn row(&self, y: u32) -> &[Pixel] {
        let start = self.get_index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    // Keep the index math in a single location.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    // Removal rewrites the buffer wholesale; the remover has already
    // checked that the new buffer is the right size.
    pub(crate) fn replace(&mut self, width: u32, height: u32, pixels: Vec<Pixel>) {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }
}

impl GridView for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        self[(x, y)]
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Pixel;

    /// Unchecked (panicking) addressing, for callers that already
    /// hold a valid coordinate.
    fn index(&self, (x, y): (u32, u32)) -> &Pixel {
        assert!(
            self.in_bounds(x, y),
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.pixels[self.get_index(x, y)]
    }
}
