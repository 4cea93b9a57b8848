//! Cost functions.

use ndarray::{Array1, AsArray, Ix1, s};

use crate::{Error, LineSegment, PointSeries, Sum, fit::fit};

/// Mean squared error between predicted and actual values.
///
/// # Errors
///
/// - When both sides differ in length.
/// - When there are no values.
pub fn mse<'a, 'b, S>(
    predicted: impl AsArray<'a, f64, Ix1>,
    actual: impl AsArray<'b, f64, Ix1>,
) -> Result<f64, Error>
where
    S: Sum<f64>,
{
    let predicted = predicted.into();
    let actual = actual.into();

    if branches::unlikely(predicted.len() != actual.len()) {
        return Err(Error::LengthMismatch {
            left: predicted.len(),
            right: actual.len(),
        });
    }
    if branches::unlikely(predicted.is_empty()) {
        return Err(Error::EmptyInput);
    }

    let mut total = S::zero();
    predicted
        .iter()
        .zip(actual.iter())
        .for_each(|(predicted, actual)| total += (predicted - actual).powi(2));

    Ok(total.sum() / predicted.len() as f64)
}

/// Fit a line through `start..=end` and score it.
///
/// Returns the line and its cost, the mean squared error of the fit plus the penalty.
#[inline]
pub(crate) fn segment_cost<S>(
    points: &PointSeries,
    start: usize,
    end: usize,
    penalty: f64,
) -> Result<(LineSegment, f64), Error>
where
    S: Sum<f64>,
{
    let line = fit::<S>(points, start, end)?;

    // Every candidate gets its own prediction buffer
    let predicted: Array1<f64> = points
        .x()
        .slice_move(s![start..=end])
        .mapv(|x| line.predict(x));
    let actual = points.y().slice_move(s![start..=end]);

    let error = mse::<S>(&predicted, actual)?;

    Ok((line, error + penalty))
}
