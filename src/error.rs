//! Error types.

/// Errors that can occur during segmentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There are no points to partition.
    #[error("point series is empty, no partition exists")]
    EmptyInput,
    /// Two sequences that should be paired up differ in length.
    #[error("sequences differ in length, {left} against {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
    /// Segment range doesn't fit in the point series.
    #[error("segment range {start}..={end} is out of bounds for {len} points")]
    InvalidRange {
        /// First index of the range.
        start: usize,
        /// Last index of the range, inclusive.
        end: usize,
        /// Amount of points in the series.
        len: usize,
    },
    /// Penalty is negative or not a number.
    #[error("penalty must be finite and non-negative, got {0}")]
    InvalidPenalty(f64),
    /// Input array doesn't have an x and y column.
    #[error("expected 2 columns (x and y), got {0}")]
    InvalidShape(usize),
    /// Input line couldn't be parsed as a point.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// Line number, starting at 1.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
