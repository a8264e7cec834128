#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time renderer
//!
//! Renders the Mandelbrot set over a fixed square grid using the
//! smooth (continuous) iteration count, then maps the results through
//! a fixed multi-stop color gradient and writes the image as a binary
//! P6 pixmap.
//!
//! The pipeline has two stages.  The first iterates `z = z^2 + c` for
//! every pixel and records a real-valued escape measure; the second
//! scans the whole array for its minimum and maximum and uses those
//! bounds to map every value onto the gradient.  Both stages split the
//! flat pixel range into equal contiguous chunks, one per worker, and
//! join all workers before moving on; the min/max scan runs serially
//! between them because every mapping worker needs the same global
//! bounds.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate num;

pub mod escape;
pub mod grid;
pub mod palette;
pub mod ppm;
pub mod render;

pub use grid::Grid;
pub use render::{RenderParams, Renderer};

use std::io;

/// Everything that can go wrong while rendering or writing an image.
/// The numeric pipeline itself is total; only the grid/worker layout
/// and the output file are fallible.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The grid and worker count cannot be combined into equal,
    /// non-overlapping index ranges.
    #[fail(display = "{}", _0)]
    BadLayout(String),

    /// The output file could not be created or written.
    #[fail(display = "image write failed: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Io(err)
    }
}
