// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-stage render pipeline and its range-partitioned parallel
//! executor.  Stage one fills the escape-count array; a serial min/max
//! scan follows; stage two maps every count to a packed color.  Each
//! stage splits the flat pixel range into equal contiguous chunks and
//! hands each chunk to its own worker as a disjoint mutable slice, so
//! the workers never contend and never need a lock.  The scope join is
//! the only synchronization: nothing downstream runs until every
//! worker of the previous stage has finished.

use escape::escape_time;
use grid::Grid;
use palette::{map_to_argb, Bounds};
use RenderError;

/// Side length of the classic render, in pixels.
pub const SIDE: usize = 1000;

/// Maximum iterations per pixel.
pub const DEPTH: u32 = 200;

/// Squared escape radius (radius 20).
pub const ESCAPE2: f64 = 400.0;

/// Number of workers; each takes one contiguous chunk of the range.
pub const PARALLELISM: usize = 16;

/// Tunables for a single render.  The defaults reproduce the classic
/// 1000x1000, depth-200, sixteen-worker image; tests shrink them.
#[derive(Copy, Clone, Debug)]
pub struct RenderParams {
    /// Maximum iterations per pixel before a point is considered
    /// interior.
    pub depth: u32,
    /// Squared magnitude at which an orbit counts as escaped.
    pub escape2: f64,
    /// Worker count.  One means no workers are spawned at all; the
    /// range runs inline, with output bit-identical to the parallel
    /// path.
    pub parallelism: usize,
}

impl Default for RenderParams {
    fn default() -> RenderParams {
        RenderParams {
            depth: DEPTH,
            escape2: ESCAPE2,
            parallelism: PARALLELISM,
        }
    }
}

/// Renders one Mandelbrot image over a grid.  Once built, the
/// renderer is immutable; every buffer it produces is owned by the
/// caller, so one renderer can serve repeated runs.
pub struct Renderer {
    grid: Grid,
    params: RenderParams,
}

impl Renderer {
    /// Constructor.  Rejects layouts the static partitioning cannot
    /// cover exactly: a zero worker count, an empty grid, or a worker
    /// count that does not evenly divide the pixel count.
    pub fn new(grid: Grid, params: RenderParams) -> Result<Renderer, RenderError> {
        if params.parallelism == 0 {
            return Err(RenderError::BadLayout(
                "The worker count must be at least one.".to_string(),
            ));
        }

        if grid.is_empty() {
            return Err(RenderError::BadLayout(
                "The grid has no pixels to render.".to_string(),
            ));
        }

        if grid.len() % params.parallelism != 0 {
            return Err(RenderError::BadLayout(format!(
                "{} workers cannot evenly split a {}-pixel grid.",
                params.parallelism,
                grid.len()
            )));
        }

        Ok(Renderer { grid, params })
    }

    /// Stage one: the smooth escape count of every pixel, in flat
    /// row-major order.  Every index is written exactly once, and no
    /// value is observable until all workers have joined.
    pub fn escape_counts(&self) -> Vec<f64> {
        let mut counts = vec![0.0_f64; self.grid.len()];
        let grid = &self.grid;
        let depth = self.params.depth;
        let escape2 = self.params.escape2;
        fill_indexed(&mut counts, self.params.parallelism, move |idx| {
            escape_time(grid.point(idx), depth, escape2)
        });
        counts
    }

    /// Stage two: map every escape count to a packed 0xAARRGGBB color
    /// against the supplied global bounds.  The bounds travel by
    /// value so every worker normalizes against the same range.
    pub fn colorize(&self, counts: &[f64], bounds: Bounds) -> Vec<u32> {
        assert_eq!(counts.len(), self.grid.len());
        let mut colors = vec![0_u32; counts.len()];
        fill_indexed(&mut colors, self.params.parallelism, |idx| {
            map_to_argb(counts[idx], bounds)
        });
        colors
    }

    /// The full pipeline: escape counts, then the serial bounds scan,
    /// then colors.
    pub fn render(&self) -> Vec<u32> {
        let counts = self.escape_counts();
        let bounds = Bounds::scan(&counts);
        self.colorize(&counts, bounds)
    }

    /// Side length of the underlying grid, for the image writer.
    pub fn side(&self) -> usize {
        self.grid.side()
    }
}

/// Fill `buffer[i] = fill(i)` for every index, split across `jobs`
/// workers over equal contiguous chunks.  `chunks_mut` hands each
/// worker exclusive ownership of its slice, so the chunks cover the
/// range exactly once with no locking; the scope does not return
/// until every worker has joined.  A single job runs inline without
/// spawning.
fn fill_indexed<T, F>(buffer: &mut [T], jobs: usize, fill: F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    if jobs == 1 {
        for (idx, slot) in buffer.iter_mut().enumerate() {
            *slot = fill(idx);
        }
        return;
    }

    let job_size = buffer.len() / jobs;
    crossbeam::scope(|spawner| {
        for (n, chunk) in buffer.chunks_mut(job_size).enumerate() {
            let fill = &fill;
            spawner.spawn(move |_| {
                let beg = job_size * n;
                for (i, slot) in chunk.iter_mut().enumerate() {
                    *slot = fill(beg + i);
                }
            });
        }
    })
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_covers_every_index_exactly_once() {
        let mut buffer = vec![0_usize; 64];
        fill_indexed(&mut buffer, 4, |idx| idx);
        let expected: Vec<usize> = (0..64).collect();
        assert_eq!(buffer, expected);
    }

    #[test]
    fn fill_with_one_job_runs_inline() {
        let mut buffer = vec![0_usize; 64];
        fill_indexed(&mut buffer, 1, |idx| idx * 2);
        assert!(buffer.iter().enumerate().all(|(i, &v)| v == i * 2));
    }

    #[test]
    fn renderer_rejects_uneven_partitions() {
        let grid = Grid::standard(5).unwrap();
        let params = RenderParams {
            parallelism: 16,
            ..RenderParams::default()
        };
        assert!(Renderer::new(grid, params).is_err());
    }

    #[test]
    fn renderer_rejects_zero_workers() {
        let grid = Grid::standard(4).unwrap();
        let params = RenderParams {
            parallelism: 0,
            ..RenderParams::default()
        };
        assert!(Renderer::new(grid, params).is_err());
    }

    fn renderer(side: usize, parallelism: usize) -> Renderer {
        let params = RenderParams {
            parallelism,
            ..RenderParams::default()
        };
        Renderer::new(Grid::standard(side).unwrap(), params).unwrap()
    }

    #[test]
    fn sequential_and_parallel_counts_are_bit_identical() {
        let serial = renderer(8, 1).escape_counts();
        let parallel = renderer(8, 4).escape_counts();
        assert_eq!(serial.len(), parallel.len());
        for (a, b) in serial.iter().zip(parallel.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn sequential_and_parallel_colors_are_identical() {
        assert_eq!(renderer(8, 1).render(), renderer(8, 4).render());
    }

    #[test]
    fn render_is_reproducible() {
        let r = renderer(8, 4);
        assert_eq!(r.render(), r.render());
    }
}
