//! Contains the Grid struct, which ties a square integral pixel grid
//! to a rectangular window on the complex plane and maps flat pixel
//! indices to complex coordinates.  The grid is row-major: index `idx`
//! names column `idx % side` and row `idx / side`.

use num::Complex;
use RenderError;

/// A square pixel grid over a window of the complex plane.  Pixel
/// (0, 0) maps onto the left-lower corner of the window; column and
/// row advance toward the right-upper corner in steps of one
/// side-length'th of the window.
#[derive(Debug)]
pub struct Grid {
    side: usize,
    leftlower: Complex<f64>,
    span: Complex<f64>,
}

impl Grid {
    /// Constructor.  Takes the side length of the square grid and the
    /// left-lower and right-upper corners of the complex window the
    /// grid is stretched over.
    pub fn new(
        side: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<Grid, RenderError> {
        if side == 0 {
            return Err(RenderError::BadLayout(
                "The grid must be at least one pixel on a side.".to_string(),
            ));
        }

        if rightupper.re < leftlower.re {
            return Err(RenderError::BadLayout(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            ));
        }

        if rightupper.im < leftlower.im {
            return Err(RenderError::BadLayout(
                "The left lower corner is not lower than the right upper corner.".to_string(),
            ));
        }

        Ok(Grid {
            side,
            leftlower,
            span: Complex::new(
                rightupper.re - leftlower.re,
                rightupper.im - leftlower.im,
            ),
        })
    }

    /// The classic Mandelbrot window, [-2, 1] x [-1.5, 1.5], over a
    /// square grid of the given side length.
    pub fn standard(side: usize) -> Result<Grid, RenderError> {
        Grid::new(side, Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5))
    }

    /// The side length of the grid, in pixels.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The total number of pixels in the grid.  Used to size the
    /// escape-count and color buffers.
    pub fn len(&self) -> usize {
        self.side * self.side
    }

    /// Describes that the grid has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Given a flat pixel index, return the complex number at the
    /// equivalent location on the complex window.
    pub fn point(&self, idx: usize) -> Complex<f64> {
        let x = (idx % self.side) as f64 / self.side as f64;
        let y = (idx / self.side) as f64 / self.side as f64;
        Complex::new(
            self.span.re * x + self.leftlower.re,
            self.span.im * y + self.leftlower.im,
        )
    }
}
