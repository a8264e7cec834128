//! The fixed color gradient and the machinery that maps raw escape
//! counts onto it: a serial min/max scan over the whole escape-count
//! array, then per-value linear interpolation between gradient stops.

/// Number of gradient intervals.  The table below has `STOPS + 1`
/// rows; interval `n` interpolates between rows `n` and `n + 1`.
pub const STOPS: usize = 18;

/// The gradient table: RGB triples with components in [0, 1], evenly
/// spaced from stop 0 to stop 18.  Blue through cyan, yellow and red,
/// back down to blue, ending on black.
pub const GRADIENT: [[f64; 3]; STOPS + 1] = [
    [0.0, 0.0, 0.5],
    [0.0, 0.0, 1.0],
    [0.0, 0.5, 1.0],
    [0.0, 1.0, 1.0],
    [0.5, 1.0, 0.5],
    [1.0, 1.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
    [0.5, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 1.0, 0.0],
    [0.5, 1.0, 0.5],
    [0.0, 1.0, 1.0],
    [0.0, 0.5, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 0.5],
    [0.0, 0.0, 0.0],
];

/// The minimum and maximum of a full escape-count array.  Computed
/// once per image, after every stage-one write has landed, and handed
/// by value to every mapping worker so they all normalize against the
/// same range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest escape count observed.
    pub min: f64,
    /// Largest escape count observed.
    pub max: f64,
}

impl Bounds {
    /// Scan the array once for its extremes.  Starting from `f64::MAX`
    /// and the smallest positive float means the first real value
    /// updates both bounds whatever its sign or magnitude.
    pub fn scan(values: &[f64]) -> Bounds {
        let mut min = f64::MAX;
        let mut max = f64::MIN_POSITIVE;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Bounds { min, max }
    }
}

/// Linear interpolation of one color channel, scaled to a byte.  The
/// truncation toward zero is deliberate; channel values stay in
/// [0, 255] because the table components stay in [0, 1].
fn interpolate(d: f64, v0: f64, v1: f64) -> u32 {
    ((d * (v1 - v0) + v0) * 255.0) as u32
}

/// Map one raw escape count to a packed 0xAARRGGBB color, alpha fixed
/// at 0xff.
///
/// The value is normalized against `bounds` onto [0, STOPS]; the
/// integer part picks the gradient interval and the fractional part
/// interpolates inside it.  A value landing exactly on `STOPS` (only
/// the maximum can) falls past the last interval and renders as
/// opaque black.  A degenerate range (`max <= min`, every value
/// identical) normalizes everything to stop 0 rather than dividing by
/// zero.
pub fn map_to_argb(x: f64, bounds: Bounds) -> u32 {
    let span = bounds.max - bounds.min;
    let t = if span > 0.0 {
        (x - bounds.min) / span * STOPS as f64
    } else {
        0.0
    };

    let bin = t as usize;
    if bin >= STOPS {
        return 0xff00_0000;
    }

    let d = t - bin as f64;
    let [r0, g0, b0] = GRADIENT[bin];
    let [r1, g1, b1] = GRADIENT[bin + 1];
    let r = interpolate(d, r0, r1);
    let g = interpolate(d, g0, g1);
    let b = interpolate(d, b0, b1);
    b | (g << 8) | (r << 16) | 0xff00_0000
}
