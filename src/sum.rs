//! Summation strategies.

use std::ops::AddAssign;

use accurate::traits::SumAccumulator;

/// Accumulator used for every reduction in the fitting and scoring code.
///
/// Implemented for all accumulators of the `accurate` crate that can be shared between threads.
pub trait Sum<T>: SumAccumulator<T> + AddAssign<T> + Send + Sync {}

impl<T, S> Sum<T> for S where S: SumAccumulator<T> + AddAssign<T> + Send + Sync {}

/// Compensated summation, slower but keeps rounding errors from piling up.
pub type Kahan = accurate::sum::Kahan<f64>;

/// Plain floating point summation.
pub type Naive = accurate::sum::NaiveSum<f64>;
