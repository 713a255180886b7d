//! Window statistics snapshot.

use serde::{Deserialize, Serialize};

/// Summary statistics of a sliding window at one point in time.
///
/// `std_dev` is the population standard deviation (divisor `count`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl WindowStats {
    /// Compute statistics over `values`.
    ///
    /// An empty input yields the default (all zero) snapshot. When every
    /// value is identical the standard deviation is exactly zero, even if
    /// rounding in the mean would otherwise leave a tiny residual.
    ///
    /// Sums run over values divided by a power of two near the largest
    /// magnitude, so any finite input gives a finite mean and deviation.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: Clone,
    {
        let iter = values.into_iter();

        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in iter.clone() {
            count += 1;
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return Self::default();
        }

        let scale = scale_for(min.abs().max(max.abs()));
        let n = count as f64;
        let scaled_mean = iter.clone().map(|v| v / scale).sum::<f64>() / n;
        let mean = scaled_mean * scale;
        let std_dev = if min == max {
            0.0
        } else {
            let variance = iter.map(|v| (v / scale - scaled_mean).powi(2)).sum::<f64>() / n;
            variance.sqrt() * scale
        };

        Self {
            count,
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Whether the window has no spread to score against.
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// Z-score of `value` against these statistics, `0.0` when degenerate.
    pub fn z_score(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            let z = (value - self.mean) / self.std_dev;
            if z.is_finite() {
                z
            } else {
                // the difference itself overflowed
                value / self.std_dev - self.mean / self.std_dev
            }
        }
    }
}

/// Power of two close to `magnitude`, never below one.
///
/// Dividing by a power of two is exact, so values in an ordinary range
/// produce the same statistics as an unscaled fold.
fn scale_for(magnitude: f64) -> f64 {
    if magnitude < 2.0 {
        1.0
    } else {
        // log2 of values near f64::MAX rounds up to 1024
        let exponent = magnitude.log2().floor().min(f64::MAX_EXP as f64 - 1.0);
        2f64.powi(exponent as i32)
    }
}
