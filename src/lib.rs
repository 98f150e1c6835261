// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! A `PixelGrid` is shrunk one row or column at a time by finding the
//! connected path of pixels with the least dual-gradient energy and
//! cutting it out.

// #![deny(missing_docs)]

mod ternary;
mod twodmap;

pub mod energy;
pub mod errors;
pub mod flipper;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;

pub use energy::pixel_energy;
pub use errors::{Axis, CarveError, Result};
pub use pixelgrid::{GridView, Pixel, PixelGrid};
pub use seamcarver::SeamCarver;
pub use seamfinder::{horizontal_seam, vertical_seam, DualGradient, Seam, SeamFinder};
pub use seamremover::{remove_horizontal_seam, remove_vertical_seam};
