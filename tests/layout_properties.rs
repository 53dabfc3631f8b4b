//! Property-based tests for masonry placement invariants.
//!
//! Tests validate:
//! 1. Placement matches an independent shortest-column simulation
//! 2. Column skew is bounded by the tallest item plus spacing
//! 3. Replaying the same heights yields identical frames
//! 4. Orchestrated passes are stable across cache hits and parallel estimation

use masonry_grid::layout::{
    CancellationToken, GridConfig, GridGeometry, HeightEstimator, LayoutOrchestrator,
    MasonryLayoutProvider, MonospaceMeasure, PassOutcome, ReplayHeights,
};
use masonry_grid::model::{EdgeInsets, Frame, Item};
use proptest::prelude::*;

/// Geometry whose column width is exactly `column_width`.
fn geometry(columns: usize, spacing: f64, column_width: f64) -> GridGeometry {
    GridGeometry {
        columns,
        inter_item_spacing: spacing,
        total_width: column_width * columns as f64 + spacing * (columns - 1) as f64,
        content_insets: EdgeInsets::default(),
    }
}

/// Straightforward greedy simulation to compare against.
fn simulate(columns: usize, spacing: f64, column_width: f64, heights: &[f64]) -> (Vec<Frame>, Vec<f64>) {
    let mut column_heights = vec![0.0_f64; columns];
    let mut frames = Vec::new();
    for &height in heights {
        let mut column = 0;
        for c in 1..columns {
            if column_heights[c] < column_heights[column] {
                column = c;
            }
        }
        let y = column_heights[column].round();
        frames.push(Frame::new(
            (column_width + spacing) * column as f64,
            y,
            column_width,
            height,
        ));
        column_heights[column] = y + height + spacing;
    }
    (frames, column_heights)
}

fn integer_heights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..500).prop_map(f64::from), 0..60)
}

// ===== Property 1: Greedy Simulation Equivalence =====

proptest! {
    #[test]
    fn placement_matches_greedy_simulation(
        columns in 1usize..6,
        spacing in (0u32..32).prop_map(f64::from),
        column_width in (1u32..300).prop_map(f64::from),
        heights in integer_heights(),
    ) {
        let mut provider =
            MasonryLayoutProvider::new(geometry(columns, spacing, column_width), ReplayHeights::new(&heights))
                .unwrap();
        let frames = provider.place_all(0..heights.len());
        let (expected_frames, expected_columns) = simulate(columns, spacing, column_width, &heights);

        prop_assert_eq!(frames, expected_frames);
        prop_assert_eq!(provider.column_heights(), &expected_columns[..]);
        let expected_max = expected_columns.iter().copied().fold(0.0, f64::max);
        prop_assert_eq!(provider.max_column_height(), expected_max);
    }
}

// ===== Property 2: Bounded Skew =====

proptest! {
    #[test]
    fn column_skew_is_bounded(
        columns in 1usize..6,
        spacing in (0u32..32).prop_map(f64::from),
        heights in integer_heights(),
    ) {
        let mut provider =
            MasonryLayoutProvider::new(geometry(columns, spacing, 100.0), ReplayHeights::new(&heights))
                .unwrap();
        provider.place_all(0..heights.len());

        let column_heights = provider.column_heights();
        let max = column_heights.iter().copied().fold(f64::MIN, f64::max);
        let min = column_heights.iter().copied().fold(f64::MAX, f64::min);
        let tallest = heights.iter().copied().fold(0.0, f64::max);

        prop_assert!(
            max - min <= tallest + spacing,
            "skew {} exceeds {} + {}", max - min, tallest, spacing
        );
    }
}

// ===== Property 3: Idempotent Replay =====

proptest! {
    #[test]
    fn replaying_heights_is_deterministic(
        columns in 1usize..6,
        heights in prop::collection::vec(0.0f64..400.0, 0..60),
    ) {
        let run = || {
            MasonryLayoutProvider::new(geometry(columns, 8.0, 120.0), ReplayHeights::new(&heights))
                .unwrap()
                .place_all(0..heights.len())
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn every_frame_sits_on_a_column(
        columns in 1usize..6,
        heights in prop::collection::vec(0.0f64..400.0, 1..40),
    ) {
        let spacing = 10.0;
        let column_width = 90.0;
        let mut provider =
            MasonryLayoutProvider::new(geometry(columns, spacing, column_width), ReplayHeights::new(&heights))
                .unwrap();

        for frame in provider.place_all(0..heights.len()) {
            prop_assert_eq!(frame.width, column_width);
            let column = frame.x / (column_width + spacing);
            prop_assert_eq!(column.fract(), 0.0);
            prop_assert!((column as usize) < columns);
            prop_assert_eq!(frame.y.fract(), 0.0, "y is rounded");
        }
    }
}

// ===== Property 4: Orchestrated Passes =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cached_and_parallel_passes_match_first_pass(
        columns in 1usize..5,
        width in 120.0f64..1200.0,
        count in 0usize..40,
    ) {
        let items = Item::sample(count);
        let config = GridConfig { columns, ..GridConfig::default() };
        let mut orchestrator =
            LayoutOrchestrator::new(config, HeightEstimator::<MonospaceMeasure>::default());

        let first = orchestrator.layout(&items, width).unwrap();
        let cached = orchestrator.layout(&items, width).unwrap();
        prop_assert_eq!(&first, &cached);

        let mut fresh =
            LayoutOrchestrator::new(config, HeightEstimator::<MonospaceMeasure>::default());
        let parallel = fresh
            .layout_concurrent(&items, width, &CancellationToken::new())
            .unwrap();
        prop_assert_eq!(parallel, PassOutcome::Completed(first));
    }
}
