//! Least squares line fitting over a range of points.

use ndarray::{ArrayView1, s};

use crate::{Error, PointSeries, Sum};

/// Line `y = slope * x + intercept` fitted over an inclusive range of point indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Slope of the line.
    pub slope: f64,
    /// Value of the line at `x = 0`.
    pub intercept: f64,
    /// First point index covered by the line.
    pub start: usize,
    /// Last point index covered by the line, inclusive.
    pub end: usize,
}

impl LineSegment {
    /// Construct a new line segment.
    #[must_use]
    pub const fn new(slope: f64, intercept: f64, start: usize, end: usize) -> Self {
        Self {
            slope,
            intercept,
            start,
            end,
        }
    }

    /// Evaluate the line at `x`.
    #[inline]
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Amount of points covered by the line.
    #[inline]
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Fit a line through the points `start..=end` with ordinary least squares.
///
/// A single point has no slope, it's fitted with a horizontal line through it.
/// When all x values in the range are identical the best horizontal line is returned, crossing the mean of y.
///
/// # Errors
///
/// - When `start > end` or `end` is outside of the points.
pub fn fit<S>(points: &PointSeries, start: usize, end: usize) -> Result<LineSegment, Error>
where
    S: Sum<f64>,
{
    if branches::unlikely(start > end || end >= points.len()) {
        return Err(Error::InvalidRange {
            start,
            end,
            len: points.len(),
        });
    }

    let xs = points.x().slice_move(s![start..=end]);
    let ys = points.y().slice_move(s![start..=end]);

    if start == end {
        let intercept = ys.first().copied().ok_or(Error::InvalidRange {
            start,
            end,
            len: points.len(),
        })?;

        return Ok(LineSegment::new(0.0, intercept, start, end));
    }

    let mean_x = mean::<S>(xs);
    let mean_y = mean::<S>(ys);

    let mut numerator = S::zero();
    let mut denominator = S::zero();
    xs.iter().zip(ys.iter()).for_each(|(x, y)| {
        let dx = x - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    });
    let numerator = numerator.sum();
    let denominator = denominator.sum();

    // Vertical stack of points, the slope is undefined
    if branches::unlikely(denominator == 0.0) {
        tracing::trace!(start, end, mean_y, "zero x variance, fitting horizontal line");

        return Ok(LineSegment::new(0.0, mean_y, start, end));
    }

    let slope = numerator / denominator;

    Ok(LineSegment::new(slope, mean_y - slope * mean_x, start, end))
}

/// Arithmetic mean of a non-empty view.
#[inline]
fn mean<S>(values: ArrayView1<f64>) -> f64
where
    S: Sum<f64>,
{
    let mut total = S::zero();
    values.iter().for_each(|value| total += *value);

    total.sum() / values.len() as f64
}
