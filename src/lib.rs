//! Optimal piecewise-linear segmentation.
//!
//! Partition an ordered series of `(x, y)` points into contiguous segments and fit a least squares line through
//! each of them, minimizing the sum of the mean squared errors of the fits plus a fixed penalty per segment.
//!
//! ```
//! use segfit::{Kahan, Point, PointSeries, Segmenter};
//!
//! let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 7.0), (4.0, 6.0), (5.0, 5.0)]
//!     .into_iter()
//!     .map(|(x, y)| Point::new(x, y))
//!     .collect::<PointSeries>();
//!
//! let partition = Segmenter::new()
//!     .with_penalty(2.0)
//!     .optimal_partition::<Kahan>(&points)?;
//! assert_eq!(partition.to_string(), "y=1X+0[0,2]\ny=-1X+10[3,5]\n");
//! # Ok::<(), segfit::Error>(())
//! ```

mod cost;
mod error;
mod fit;
mod optimize;
mod partition;
mod series;
mod sum;

pub use cost::mse;
pub use error::Error;
pub use fit::{LineSegment, fit};
pub use partition::Partition;
pub use series::{Point, PointSeries};
pub use sum::{Kahan, Naive, Sum};

use crate::optimize::OptimizeImpl;

/// Penalty used when none is configured.
pub const DEFAULT_PENALTY: f64 = 2.0;

/// Segmentation search.
///
/// # Defaults
///
/// - `penalty`: [`DEFAULT_PENALTY`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segmenter {
    /// Cost added for every segment.
    penalty: f64,
}

impl Segmenter {
    /// Construct a new segmenter with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            penalty: DEFAULT_PENALTY,
        }
    }

    /// Set the cost added for every segment, higher values result in fewer segments.
    #[must_use]
    pub const fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;

        self
    }

    /// Configured cost added for every segment.
    #[must_use]
    pub const fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Find the partition with the lowest total cost.
    ///
    /// When multiple partitions cost the same, the one whose last segments start earliest is returned.
    ///
    /// # Errors
    ///
    /// - When the penalty is negative or not finite.
    /// - When there are no points.
    pub fn optimal_partition<S>(&self, points: &PointSeries) -> Result<Partition, Error>
    where
        S: Sum<f64>,
    {
        if branches::unlikely(!self.penalty.is_finite() || self.penalty < 0.0) {
            return Err(Error::InvalidPenalty(self.penalty));
        }
        if branches::unlikely(points.is_empty()) {
            return Err(Error::EmptyInput);
        }

        tracing::debug!(
            points = points.len(),
            penalty = self.penalty,
            "searching optimal partition"
        );

        let partition = OptimizeImpl::<S>::new(points, self.penalty).optimize()?;

        tracing::debug!(
            segments = partition.len(),
            total_cost = partition.total_cost(),
            "found optimal partition"
        );

        Ok(partition)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the partition with the lowest total cost using compensated summation.
///
/// Shorthand for [`Segmenter::optimal_partition`] with a custom penalty.
///
/// # Errors
///
/// - When the penalty is negative or not finite.
/// - When there are no points.
pub fn optimal_partition(points: &PointSeries, penalty: f64) -> Result<Partition, Error> {
    Segmenter::new()
        .with_penalty(penalty)
        .optimal_partition::<Kahan>(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ensure the defaults are applied.
    #[test]
    fn defaults() {
        assert_eq!(Segmenter::default().penalty(), 2.0);
        assert_eq!(Segmenter::new().with_penalty(5.0).penalty(), 5.0);
    }

    /// Ensure invalid penalties are rejected.
    #[test]
    fn invalid_penalty() {
        let points = PointSeries::from(vec![Point::new(0.0, 1.0)]);

        for penalty in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    optimal_partition(&points, penalty),
                    Err(Error::InvalidPenalty(_))
                ),
                "penalty {penalty} should be rejected"
            );
        }
    }
}
