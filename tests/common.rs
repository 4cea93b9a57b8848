//! Shared functionality between integration tests.

use std::io::Cursor;

use csv::ReaderBuilder;
use segfit::{Point, PointSeries};

/// Load `x,y` rows from a CSV text file.
#[must_use]
pub fn load_points_fixture(file: &'static str) -> PointSeries {
    // Read CSV
    let mut cursor = Cursor::new(file);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(&mut cursor);

    // Convert to points
    reader
        .deserialize::<(f64, f64)>()
        .map(|row| {
            let (x, y) = row.expect("Error deserializing CSV row");
            Point::new(x, y)
        })
        .collect()
}

/// Build a series from coordinate pairs.
#[must_use]
pub fn points(pairs: &[(f64, f64)]) -> PointSeries {
    pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
