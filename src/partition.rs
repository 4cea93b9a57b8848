//! Optimal partition result and its textual representation.

use std::fmt;

use smallvec::SmallVec;

use crate::LineSegment;

/// Ordered line segments covering every point index exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Segments in increasing start order.
    segments: SmallVec<LineSegment, 8>,
    /// Sum of the fit error and penalty of all segments.
    total_cost: f64,
}

impl Partition {
    /// Construct from segments already in start order.
    pub(crate) const fn new(segments: SmallVec<LineSegment, 8>, total_cost: f64) -> Self {
        Self {
            segments,
            total_cost,
        }
    }

    /// All segments, in increasing start order.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Amount of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether there are no segments, never the case for a computed partition.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Minimized cost, the mean squared errors of all segments plus the penalty for each of them.
    #[inline]
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Iterate over the segments in start order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineSegment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LineSegment {
    /// Renders as `y=<slope>X+<intercept>[<start>,<end>]`.
    ///
    /// Numbers use the shortest representation that parses back to the same value, so `1/3` prints all of its
    /// digits instead of being rounded to six significant ones.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "y={}X+{}[{},{}]",
            self.slope, self.intercept, self.start, self.end
        )
    }
}

impl fmt::Display for Partition {
    /// One segment per line.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            writeln!(formatter, "{segment}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    /// Check the segment text format.
    #[test]
    fn display_segment() {
        assert_eq!(
            LineSegment::new(1.5, -3.0, 2, 7).to_string(),
            "y=1.5X+-3[2,7]"
        );
        assert_eq!(LineSegment::new(0.0, 4.0, 0, 0).to_string(), "y=0X+4[0,0]");
        assert_eq!(
            LineSegment::new(0.0, 1.0 / 3.0, 0, 2).to_string(),
            "y=0X+0.3333333333333333[0,2]"
        );
    }

    /// Check the partition text format.
    #[test]
    fn display_partition() {
        let partition = Partition::new(
            smallvec![
                LineSegment::new(1.0, 0.0, 0, 2),
                LineSegment::new(-1.0, 10.0, 3, 5)
            ],
            4.0,
        );

        assert_eq!(partition.to_string(), "y=1X+0[0,2]\ny=-1X+10[3,5]\n");
        assert_eq!(partition.len(), 2);
        assert_eq!(
            partition
                .iter()
                .map(|segment| segment.start)
                .collect::<Vec<_>>(),
            vec![0, 3]
        );
    }
}
