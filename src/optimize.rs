//! Optimal partition search.

use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::{Error, LineSegment, Partition, PointSeries, Sum, cost::segment_cost};

/// From how many candidates on spreading them over threads is worth it.
#[cfg(feature = "rayon")]
const PARALLEL_CANDIDATE_THRESHOLD: usize = 64;

/// Implementation of the optimal partition search with state.
///
/// Fills the cost table from left to right, every prefix only depends on shorter prefixes.
pub struct OptimizeImpl<'a, S> {
    /// Points to partition.
    points: &'a PointSeries,
    /// Cost added for every segment.
    penalty: f64,
    /// `costs[i]` stores the minimal cost of partitioning `points[0..i]`, `costs[0]` is the empty prefix.
    costs: Vec<f64>,
    /// `last_segments[i]` stores the last segment of the optimal partition of `points[0..=i]`.
    ///
    /// Its start is the backpointer to the preceding prefix.
    last_segments: Vec<LineSegment>,
    /// All candidates for the current prefix, ordered by start index.
    candidates: Vec<Candidate>,
    /// Summation strategy.
    _sum: PhantomData<S>,
}

impl<'a, S: Sum<f64>> OptimizeImpl<'a, S> {
    /// Setup the structures.
    pub(crate) fn new(points: &'a PointSeries, penalty: f64) -> Self {
        let len = points.len();

        // The empty prefix costs nothing
        let mut costs = Vec::with_capacity(len + 1);
        costs.push(0.0);

        Self {
            points,
            penalty,
            costs,
            last_segments: Vec::with_capacity(len),
            candidates: Vec::with_capacity(len),
            _sum: PhantomData,
        }
    }

    /// Run the calculation loop.
    pub(crate) fn optimize(mut self) -> Result<Partition, Error> {
        if branches::unlikely(self.points.is_empty()) {
            return Err(Error::EmptyInput);
        }

        for end in 0..self.points.len() {
            // Reset candidates
            self.candidates.clear();

            // Only spread over threads when there's enough work
            #[cfg(feature = "rayon")]
            if should_use_threading(end + 1) {
                self.par_split_into_candidates(end)?;
            } else {
                self.split_into_candidates(end)?;
            }

            #[cfg(not(feature = "rayon"))]
            self.split_into_candidates(end)?;

            // `min_by` keeps the first of equal candidates, ties go to the earliest start
            let best = *self
                .candidates
                .iter()
                .min_by(|left, right| left.cost.total_cmp(&right.cost))
                .ok_or(Error::EmptyInput)?;

            tracing::trace!(
                end,
                start = best.segment.start,
                cost = best.cost,
                "solved prefix"
            );

            self.costs.push(best.cost);
            self.last_segments.push(best.segment);
        }

        self.reconstruct()
    }

    /// Score every start index for a segment ending at `end`.
    #[inline]
    fn split_into_candidates(&mut self, end: usize) -> Result<(), Error> {
        for start in 0..=end {
            let candidate = self.find_candidate(start, end)?;
            self.candidates.push(candidate);
        }

        Ok(())
    }

    /// Score every start index for a segment ending at `end`, spread across threads.
    ///
    /// Candidates are collected in start order so the reduction is the same as the single threaded one.
    #[cfg(feature = "rayon")]
    #[inline]
    fn par_split_into_candidates(&mut self, end: usize) -> Result<(), Error> {
        use rayon::iter::{IntoParallelIterator as _, ParallelIterator as _};

        self.candidates = (0..=end)
            .into_par_iter()
            .map(|start| self.find_candidate(start, end))
            .collect::<Result<_, _>>()?;

        Ok(())
    }

    /// Cost of the optimal partition before `start` plus a single segment over `start..=end`.
    #[inline]
    fn find_candidate(&self, start: usize, end: usize) -> Result<Candidate, Error> {
        // Prefixes are filled in order, shouldn't happen
        let Some(preceding_cost) = self.costs.get(start) else {
            branches::mark_unlikely();
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.points.len(),
            });
        };

        let (segment, cost) = segment_cost::<S>(self.points, start, end, self.penalty)?;

        Ok(Candidate {
            segment,
            cost: preceding_cost + cost,
        })
    }

    /// Follow the backpointers from the last point to the first.
    fn reconstruct(self) -> Result<Partition, Error> {
        let total_cost = self.costs.last().copied().ok_or(Error::EmptyInput)?;

        let mut segments = SmallVec::<LineSegment, 8>::new();
        let mut remaining = self.last_segments.len();
        while let Some(segment) = remaining
            .checked_sub(1)
            .and_then(|end| self.last_segments.get(end))
        {
            segments.push(*segment);
            remaining = segment.start;
        }
        segments.reverse();

        if branches::unlikely(segments.is_empty()) {
            return Err(Error::EmptyInput);
        }

        Ok(Partition::new(segments, total_cost))
    }
}

/// A possible last segment for a prefix.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Line fitted over the segment.
    segment: LineSegment,
    /// Total cost of the prefix when ending with this segment.
    cost: f64,
}

/// Whether the amount of candidates justifies starting threads.
#[cfg(feature = "rayon")]
#[inline]
const fn should_use_threading(candidates: usize) -> bool {
    candidates >= PARALLEL_CANDIDATE_THRESHOLD
}
