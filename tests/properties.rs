//! Properties that hold for every input.

mod common;

use proptest::prelude::*;
use segfit::{Kahan, Naive, Point, PointSeries, Segmenter, optimal_partition};

/// Random points, the x values are not required to be sorted.
fn point_series(max_len: usize) -> impl Strategy<Value = PointSeries> {
    prop::collection::vec((-100.0..100.0_f64, -100.0..100.0_f64), 1..max_len).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect::<PointSeries>()
    })
}

proptest! {
    #[test]
    fn segments_cover_every_index(points in point_series(40), penalty in 0.0..20.0_f64) {
        let partition = optimal_partition(&points, penalty).expect("Error segmenting");
        let segments = partition.segments();

        prop_assert!(!segments.is_empty());
        prop_assert_eq!(segments[0].start, 0);
        prop_assert_eq!(segments[segments.len() - 1].end, points.len() - 1);
        for pair in segments.windows(2) {
            prop_assert!(pair[0].start <= pair[0].end);
            prop_assert_eq!(pair[0].end + 1, pair[1].start);
        }
        prop_assert_eq!(
            segments.iter().map(|segment| segment.point_count()).sum::<usize>(),
            points.len()
        );
    }

    #[test]
    fn higher_penalty_never_adds_segments(
        points in point_series(30),
        penalty in 0.0..10.0_f64,
        increase in 0.1..10.0_f64,
    ) {
        let low = optimal_partition(&points, penalty).expect("Error segmenting");
        let high = optimal_partition(&points, penalty + increase).expect("Error segmenting");

        prop_assert!(
            high.len() <= low.len(),
            "penalty {} gave {} segments, {} gave {}",
            penalty,
            low.len(),
            penalty + increase,
            high.len()
        );
    }

    #[test]
    fn repeated_runs_are_identical(points in point_series(40), penalty in 0.0..20.0_f64) {
        let segmenter = Segmenter::new().with_penalty(penalty);
        let first = segmenter.optimal_partition::<Naive>(&points).expect("Error segmenting");
        let second = segmenter.optimal_partition::<Naive>(&points).expect("Error segmenting");

        prop_assert_eq!(first.total_cost().to_bits(), second.total_cost().to_bits());
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }
}

/// Sweeping the penalty on a fixture only ever removes segments.
#[test]
fn penalty_sweep() {
    let points = common::load_points_fixture(include_str!("three-regimes.csv"));

    let counts = [0.0, 0.5, 2.0, 10.0, 20.0, 30.0, 50.0, 100.0, 1000.0]
        .into_iter()
        .map(|penalty| {
            Segmenter::new()
                .with_penalty(penalty)
                .optimal_partition::<Kahan>(&points)
                .expect("Error segmenting")
                .len()
        })
        .collect::<Vec<_>>();

    assert!(
        counts.windows(2).all(|pair| pair[1] <= pair[0]),
        "segment counts {counts:?} are not decreasing"
    );
    assert_eq!(counts.last(), Some(&1));
}

/// Every point on its own segment is optimal without a penalty.
#[test]
fn zero_penalty() {
    let points = common::points(&[(0.0, 3.0), (1.0, -2.0), (2.0, 9.0), (3.0, 1.0)]);

    let partition = optimal_partition(&points, 0.0).expect("Error segmenting");
    assert_eq!(partition.total_cost(), 0.0);
}
