// Host-side tests for the placement lattice.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/error.rs");
}
mod config {
    include!("../src/config.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}

use config::ImageDescriptor;
use geometry::*;

fn img(source: &str) -> ImageDescriptor {
    ImageDescriptor {
        source: source.to_string(),
        alt_text: format!("alt {}", source),
    }
}

#[test]
fn placement_count_is_segments_times_rows() {
    let images = vec![img("a"), img("b")];
    for segments in [1_u32, 2, 7, 16, 35, 60] {
        let placements = build_placements(&images, segments).unwrap();
        assert_eq!(placements.len(), segments as usize * ROWS_PER_COLUMN);
    }
}

#[test]
fn thirty_five_segments_three_images() {
    let images = vec![img("a"), img("b"), img("c")];
    let placements = build_placements(&images, 35).unwrap();
    assert_eq!(placements.len(), 175);

    // Round-robin over 175 slots: each image appears 58 or 59 times.
    for source in ["a", "b", "c"] {
        let count = placements.iter().filter(|p| p.source == source).count();
        assert!(
            (58..=59).contains(&count),
            "source {} appeared {} times",
            source,
            count
        );
    }

    // No generation-adjacent duplicates with three distinct sources.
    for pair in placements.windows(2) {
        assert_ne!(pair[0].source, pair[1].source);
    }
}

#[test]
fn adjacent_duplicates_in_the_pool_are_swapped_apart() {
    // The pool itself contains an adjacent duplicate pair.
    let images = vec![img("a"), img("a"), img("b"), img("c")];
    let placements = build_placements(&images, 8).unwrap();
    for pair in placements.windows(2) {
        assert_ne!(pair[0].source, pair[1].source);
    }
}

#[test]
fn single_image_cycles_with_duplicates() {
    let images = vec![img("only")];
    let placements = build_placements(&images, 5).unwrap();
    assert_eq!(placements.len(), 25);
    assert!(placements.iter().all(|p| p.source == "only"));
}

#[test]
fn fewer_images_than_slots_cycles_the_pool() {
    let images = vec![img("a"), img("b")];
    let placements = build_placements(&images, 8).unwrap();
    assert!(placements.iter().all(|p| p.source == "a" || p.source == "b"));
    let a_count = placements.iter().filter(|p| p.source == "a").count();
    assert_eq!(a_count, 20); // exactly half of 40 slots
}

#[test]
fn deterministic_for_same_inputs() {
    let images = vec![img("a"), img("a"), img("b")];
    let first = build_placements(&images, 12).unwrap();
    let second = build_placements(&images, 12).unwrap();
    assert_eq!(first, second);
}

#[test]
fn column_offsets_are_centred_at_zero() {
    let images = vec![img("a")];
    let placements = build_placements(&images, 35).unwrap();
    let min = placements.iter().map(|p| p.column_offset).min().unwrap();
    let max = placements.iter().map(|p| p.column_offset).max().unwrap();
    assert_eq!(min, -17);
    assert_eq!(max, 17);
}

#[test]
fn columns_alternate_row_sets() {
    let images = vec![img("a")];
    let placements = build_placements(&images, 4).unwrap();
    let rows_for = |column: usize| -> Vec<i32> {
        placements[column * ROWS_PER_COLUMN..(column + 1) * ROWS_PER_COLUMN]
            .iter()
            .map(|p| p.row_offset)
            .collect()
    };
    assert_eq!(rows_for(0), vec![-4, -2, 0, 2, 4]);
    assert_eq!(rows_for(1), vec![-3, -1, 1, 3, 5]);
    assert_eq!(rows_for(2), vec![-4, -2, 0, 2, 4]);
    assert_eq!(rows_for(3), vec![-3, -1, 1, 3, 5]);
}

#[test]
fn every_tile_spans_two_units() {
    let images = vec![img("a"), img("b")];
    let placements = build_placements(&images, 6).unwrap();
    assert!(placements.iter().all(|p| p.span_x == 2 && p.span_y == 2));
}

#[test]
fn empty_image_list_is_rejected() {
    let err = build_placements(&[], 10).unwrap_err();
    assert!(matches!(err, error::GalleryError::Configuration(_)));
}

#[test]
fn zero_segments_is_rejected() {
    let err = build_placements(&[img("a")], 0).unwrap_err();
    assert!(matches!(err, error::GalleryError::Configuration(_)));
}
