//! The smooth escape-time estimator.  This is our classic iterator
//! function: repeatedly square-and-add until the orbit leaves the
//! escape radius or the iteration cap is reached, then refine the raw
//! iteration count with the continuous-coloring correction so the
//! rendered image has no banding between iteration levels.

use num::Complex;

/// Iterate `z = z^2 + c` up to `depth` times, stopping early once the
/// squared magnitude of `z` reaches `escape2`, and return the smooth
/// escape measure
///
/// ```text
/// ln(k + 1 - ln(ln(max(|z|^2, escape2)) / 2) / ln 2)
/// ```
///
/// where `k` is the iteration reached.  The `max` clamp matters: when
/// the orbit never escapes, `|z|^2` at loop exit may be well below
/// `escape2`, and without the clamp the nested logarithm would be
/// handed an argument at or below 1.  Pure function, total over its
/// domain.
pub fn escape_time(c: Complex<f64>, depth: u32, escape2: f64) -> f64 {
    let mut z = Complex::new(0.0, 0.0);
    let mut magz2 = 0.0;
    let mut k = 0;

    while k < depth {
        z = z * z + c;
        magz2 = z.norm_sqr();
        if magz2 >= escape2 {
            break;
        }
        k += 1;
    }

    (f64::from(k) + 1.0 - (magz2.max(escape2).ln() / 2.0).ln() / 2.0_f64.ln()).ln()
}
