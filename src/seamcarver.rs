// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! The carver owns the grid outright and is the only thing allowed to
//! change it.  Each step finds a seam on the grid as it is now and
//! removes it before the next search begins.

use crate::energy::pixel_energy;
use crate::errors::{Axis, CarveError, Result};
use crate::pixelgrid::{GridView, Pixel, PixelGrid};
use crate::seamfinder::{DualGradient, Seam, SeamFinder};
use crate::seamremover;
use log::{debug, trace};

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.
impl Axis {
    fn turn(self) -> Self {
        match self {
            Axis::Width => Axis::Height,
            Axis::Height => Axis::Width,
        }
    }
}

/// A grid being carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Takes ownership of the grid to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        self.grid.pixel(x, y)
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Hand the carved grid back, typically to be encoded.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// The dual-gradient energy of one pixel of the current grid.
    pub fn compute_energy(&self, x: u32, y: u32) -> Result<f64> {
        self.grid.pixel(x, y)?;
        Ok(pixel_energy(&self.grid, x, y))
    }

    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        seamremover::remove_vertical_seam(&mut self.grid, seam)
    }

    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        seamremover::remove_horizontal_seam(&mut self.grid, seam)
    }

    fn carve_once(&mut self, axis: Axis) -> Result<()> {
        match axis {
            Axis::Width => {
                let seam = self.find_vertical_seam();
                trace!("vertical seam {:?}", seam);
                self.remove_vertical_seam(&seam)
            }
            Axis::Height => {
                let seam = self.find_horizontal_seam();
                trace!("horizontal seam {:?}", seam);
                self.remove_horizontal_seam(&seam)
            }
        }
    }

    // The whole energy map and seam table are rebuilt for every seam.
    // Only the pixels next to the last seam actually change, so there
    // is room for caching here.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the grid.  While both dimensions are too large, vertical and
    /// horizontal seams alternate, starting with a vertical one; then
    /// whichever dimension is left is carved on its own.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = self.grid.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::EmptyGrid {
                width: new_width,
                height: new_height,
            });
        }
        if width < new_width || height < new_height {
            return Err(CarveError::CannotUpscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        debug!(
            "carving {}x{} down to {}x{}",
            width, height, new_width, new_height
        );

        let mut direction = Axis::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            trace!("B: {}, {}", self.width(), self.height());
        }
        while self.width() > new_width {
            self.carve_once(Axis::Width)?;
            trace!("W: {}, {}", self.width(), self.height());
        }
        while self.height() > new_height {
            self.carve_once(Axis::Height)?;
            trace!("H: {}, {}", self.width(), self.height());
        }

        debug!(
            "removed {} vertical and {} horizontal seams",
            width - new_width,
            height - new_height
        );
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_vertical_seam(&self) -> Seam {
        DualGradient::new(&self.grid).find_vertical_seam()
    }

    fn find_horizontal_seam(&self) -> Seam {
        DualGradient::new(&self.grid).find_horizontal_seam()
    }
}
