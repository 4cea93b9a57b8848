//! Ordered input samples.

use std::io::BufRead;

use ndarray::{Array1, ArrayView1, AsArray, Ix1, Ix2};

use crate::Error;

/// A single `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered, read-only sequence of points.
///
/// The order defines which points are adjacent, the x values don't have to be sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSeries {
    /// Horizontal coordinates.
    xs: Array1<f64>,
    /// Vertical coordinates, same length as `xs`.
    ys: Array1<f64>,
}

impl PointSeries {
    /// Construct from a 2D array where every row is an `(x, y)` pair.
    ///
    /// # Errors
    ///
    /// - When the array doesn't have exactly two columns.
    pub fn new<'a>(points: impl AsArray<'a, f64, Ix2>) -> Result<Self, Error> {
        let points = points.into();
        if branches::unlikely(points.ncols() != 2) {
            return Err(Error::InvalidShape(points.ncols()));
        }

        Ok(Self {
            xs: points.column(0).to_owned(),
            ys: points.column(1).to_owned(),
        })
    }

    /// Construct from separate x and y columns.
    ///
    /// # Errors
    ///
    /// - When the columns differ in length.
    pub fn from_xy<'a, 'b>(
        xs: impl AsArray<'a, f64, Ix1>,
        ys: impl AsArray<'b, f64, Ix1>,
    ) -> Result<Self, Error> {
        let xs = xs.into();
        let ys = ys.into();
        if branches::unlikely(xs.len() != ys.len()) {
            return Err(Error::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
            });
        }

        Ok(Self {
            xs: xs.to_owned(),
            ys: ys.to_owned(),
        })
    }

    /// Parse lines of two whitespace-separated numbers, `"x y"`.
    ///
    /// Blank lines are skipped, file order becomes index order.
    ///
    /// # Errors
    ///
    /// - When reading fails.
    /// - When a line isn't exactly two decimal numbers.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut points = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let mut tokens = line.split_whitespace();
            let Some(x_token) = tokens.next() else {
                continue;
            };
            let Some(y_token) = tokens.next() else {
                return Err(Error::MalformedLine {
                    line: line_number,
                    reason: "expected two numbers, found one".to_owned(),
                });
            };
            if let Some(extra) = tokens.next() {
                return Err(Error::MalformedLine {
                    line: line_number,
                    reason: format!("unexpected trailing value '{extra}'"),
                });
            }

            points.push(Point::new(
                parse_coordinate(x_token, line_number)?,
                parse_coordinate(y_token, line_number)?,
            ));
        }

        Ok(Self::from(points))
    }

    /// Amount of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether there are no points at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Point at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// All horizontal coordinates.
    #[inline]
    #[must_use]
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.xs.view()
    }

    /// All vertical coordinates.
    #[inline]
    #[must_use]
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.ys.view()
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(x, y)| Point::new(*x, *y))
    }
}

impl From<Vec<Point>> for PointSeries {
    fn from(points: Vec<Point>) -> Self {
        points.into_iter().collect()
    }
}

impl FromIterator<Point> for PointSeries {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let (xs, ys): (Vec<f64>, Vec<f64>) = iter
            .into_iter()
            .map(|point| (point.x, point.y))
            .unzip();

        Self {
            xs: Array1::from(xs),
            ys: Array1::from(ys),
        }
    }
}

/// Parse a single finite number of an input line.
fn parse_coordinate(token: &str, line: usize) -> Result<f64, Error> {
    let value: f64 = token.parse().map_err(|err| Error::MalformedLine {
        line,
        reason: format!("'{token}' is not a number: {err}"),
    })?;

    if branches::unlikely(!value.is_finite()) {
        return Err(Error::MalformedLine {
            line,
            reason: format!("'{token}' is not a finite number"),
        });
    }

    Ok(value)
}
