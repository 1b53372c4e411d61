mod coords;
mod error;
mod levels;
mod pressure;
pub(crate) mod types;

pub use error::LayoutError;
pub use types::*;

use coords::*;
use levels::*;
use pressure::*;

use crate::config::{LayoutConfig, compare_by_specs};
use crate::ir::{Column, Segment};
use std::cmp::Ordering;

/// Lay out every column of a document. Columns are independent: no segment in
/// one column ever reads another column's state.
pub fn layout_columns(
    columns: &[Column],
    config: &LayoutConfig,
) -> Result<Vec<ColumnLayout>, LayoutError> {
    columns
        .iter()
        .map(|col| layout_column(&col.segments, config))
        .collect()
}

/// Lay out one column using the tie-break ordering from `config.order`.
pub fn layout_column(
    segs: &[Segment],
    config: &LayoutConfig,
) -> Result<ColumnLayout, LayoutError> {
    let specs = &config.order;
    layout_column_with(segs, |a, b| compare_by_specs(a, b, specs))
}

/// Lay out one column with a caller-supplied tie-break comparator.
///
/// The comparator decides both the primary ordering (which segment claims the
/// earlier level when extents tie) and how coordinate chains are resolved when
/// forward pressures tie. The pass never mutates its input; results are
/// index-aligned with `segs`, and re-running on the same input yields the same
/// output.
pub fn layout_column_with<C>(segs: &[Segment], tie_break: C) -> Result<ColumnLayout, LayoutError>
where
    C: Fn(&Segment, &Segment) -> Ordering,
{
    validate(segs)?;

    // the caller-facing order is the stability source of truth; work over a
    // sorted index permutation instead of reordering the input
    let mut ordered: Vec<usize> = (0..segs.len()).collect();
    ordered.sort_by(|&a, &b| tie_break(&segs[a], &segs[b]));

    let levels = build_levels(segs, &ordered);

    let mut states = vec![SegState::default(); segs.len()];
    for (li, level) in levels.iter().enumerate() {
        for &idx in level {
            states[idx].level = li;
        }
    }

    index_forward_segs(segs, &levels, &mut states);

    if let Some(level0) = levels.first() {
        // every later-level segment is in some level-0 segment's forward
        // closure (first-fit guarantees a collision with each earlier level),
        // so driving from level 0 covers the whole column
        for &idx in level0 {
            compute_pressure(&mut states, idx);
        }
        for &idx in level0 {
            assign_coords(segs, &mut states, &tie_break, idx, 0, 0.0);
        }
    }

    let geoms = states
        .into_iter()
        .map(|state| SegGeom {
            level: state.level,
            forward: state.forward,
            forward_pressure: state.forward_pressure.unwrap_or(0),
            backward_coord: state.backward_coord.unwrap_or(0.0),
            forward_coord: state.forward_coord.unwrap_or(1.0),
        })
        .collect();

    Ok(ColumnLayout { segs: geoms })
}

fn validate(segs: &[Segment]) -> Result<(), LayoutError> {
    for seg in segs {
        if !seg.top.is_finite() || !seg.bottom.is_finite() {
            return Err(LayoutError::NonFiniteExtent {
                id: seg.id.clone(),
            });
        }
        if seg.bottom <= seg.top {
            return Err(LayoutError::InvertedSegment {
                id: seg.id.clone(),
                top: seg.top,
                bottom: seg.bottom,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(id: &str, start_min: i64, end_min: i64) -> Segment {
        Segment::new(id, start_min, end_min, start_min as f32, end_min as f32)
    }

    fn layout(segs: &[Segment]) -> ColumnLayout {
        layout_column(segs, &LayoutConfig::default()).expect("layout failed")
    }

    fn assert_coords(geom: &SegGeom, backward: f32, forward: f32) {
        assert!(
            (geom.backward_coord - backward).abs() < 1e-6,
            "backward {} != {}",
            geom.backward_coord,
            backward
        );
        assert!(
            (geom.forward_coord - forward).abs() < 1e-6,
            "forward {} != {}",
            geom.forward_coord,
            forward
        );
    }

    #[test]
    fn empty_column_is_fine() {
        let layout = layout(&[]);
        assert!(layout.segs.is_empty());
    }

    #[test]
    fn non_overlapping_segments_all_claim_full_width() {
        // 9-10, 10-11, 11-12
        let segs = vec![seg("a", 540, 600), seg("b", 600, 660), seg("c", 660, 720)];
        let layout = layout(&segs);
        for geom in &layout.segs {
            assert_eq!(geom.level, 0);
            assert_coords(geom, 0.0, 1.0);
        }
    }

    #[test]
    fn two_identical_segments_split_evenly() {
        // 9-11 twice: level 0 gets [0, 0.5], level 1 gets [0.5, 1]
        let segs = vec![seg("a", 540, 660), seg("b", 540, 660)];
        let layout = layout(&segs);
        assert_eq!(layout.segs[0].level, 0);
        assert_eq!(layout.segs[1].level, 1);
        assert_coords(&layout.segs[0], 0.0, 0.5);
        assert_coords(&layout.segs[1], 0.5, 1.0);
    }

    #[test]
    fn spanning_segment_shares_with_two_disjoint_neighbors() {
        // a(9-12) overlaps b(9-10) and c(11-12); b and c don't overlap each
        // other, so both land in level 1 and share the outer strip.
        let segs = vec![seg("a", 540, 720), seg("b", 540, 600), seg("c", 660, 720)];
        let layout = layout(&segs);
        assert_eq!(layout.segs[0].level, 0);
        assert_eq!(layout.segs[1].level, 1);
        assert_eq!(layout.segs[2].level, 1);
        assert_eq!(layout.segs[0].forward_pressure, 1);
        assert_coords(&layout.segs[0], 0.0, 0.5);
        assert_coords(&layout.segs[1], 0.5, 1.0);
        assert_coords(&layout.segs[2], 0.5, 1.0);
    }

    #[test]
    fn three_deep_stack_splits_in_thirds() {
        let segs = vec![seg("a", 540, 720), seg("b", 540, 700), seg("c", 540, 680)];
        let layout = layout(&segs);
        assert_eq!(layout.segs[0].forward_pressure, 2);
        assert_coords(&layout.segs[0], 0.0, 1.0 / 3.0);
        assert_coords(&layout.segs[1], 1.0 / 3.0, 2.0 / 3.0);
        assert_coords(&layout.segs[2], 2.0 / 3.0, 1.0);
    }

    #[test]
    fn coordinates_stay_in_bounds() {
        let segs = vec![
            seg("a", 540, 720),
            seg("b", 540, 620),
            seg("c", 560, 640),
            seg("d", 600, 700),
            seg("e", 610, 720),
            seg("f", 615, 655),
        ];
        let layout = layout(&segs);
        for geom in &layout.segs {
            assert!(geom.backward_coord >= 0.0);
            assert!(geom.forward_coord <= 1.0);
            assert!(geom.span() >= 0.0);
        }
    }

    #[test]
    fn pressure_exceeds_every_forward_segment() {
        let segs = vec![
            seg("a", 540, 720),
            seg("b", 540, 620),
            seg("c", 560, 640),
            seg("d", 600, 700),
            seg("e", 610, 720),
        ];
        let layout = layout(&segs);
        for geom in &layout.segs {
            for &f in &geom.forward {
                assert!(geom.forward_pressure >= layout.segs[f].forward_pressure + 1);
            }
        }
    }

    #[test]
    fn pass_is_idempotent() {
        let segs = vec![
            seg("a", 540, 720),
            seg("b", 540, 620),
            seg("c", 560, 640),
            seg("d", 600, 700),
        ];
        let first = layout(&segs);
        let second = layout(&segs);
        for (a, b) in first.segs.iter().zip(&second.segs) {
            assert_eq!(a.level, b.level);
            assert_eq!(a.forward_pressure, b.forward_pressure);
            assert_eq!(a.backward_coord, b.backward_coord);
            assert_eq!(a.forward_coord, b.forward_coord);
        }
    }

    #[test]
    fn results_align_with_input_order_not_sorted_order() {
        // b sorts before a (earlier start) but the output stays input-aligned
        let segs = vec![seg("a", 600, 660), seg("b", 540, 600)];
        let layout = layout(&segs);
        assert_eq!(layout.segs.len(), 2);
        assert_coords(&layout.segs[0], 0.0, 1.0);
        assert_coords(&layout.segs[1], 0.0, 1.0);
    }

    #[test]
    fn inverted_extent_is_rejected() {
        let mut bad = seg("a", 540, 600);
        bad.bottom = bad.top - 1.0;
        let err = layout_column(&[bad], &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvertedSegment { .. }));
    }

    #[test]
    fn non_finite_extent_is_rejected() {
        let mut bad = seg("a", 540, 600);
        bad.bottom = f32::NAN;
        let err = layout_column(&[bad], &LayoutConfig::default()).unwrap_err();
        assert_eq!(err, LayoutError::NonFiniteExtent { id: "a".into() });
    }

    #[test]
    fn custom_tie_break_decides_level_order() {
        // identical extents; reverse-id ordering puts b in level 0
        let segs = vec![seg("a", 540, 660), seg("b", 540, 660)];
        let layout =
            layout_column_with(&segs, |x, y| y.id.cmp(&x.id)).expect("layout failed");
        assert_eq!(layout.segs[1].level, 0);
        assert_eq!(layout.segs[0].level, 1);
        assert_coords(&layout.segs[1], 0.0, 0.5);
        assert_coords(&layout.segs[0], 0.5, 1.0);
    }

    #[test]
    fn columns_are_laid_out_independently() {
        let columns = vec![
            Column {
                segments: vec![seg("a", 540, 660), seg("b", 540, 660)],
            },
            Column {
                segments: vec![seg("a", 540, 600)],
            },
        ];
        let layouts = layout_columns(&columns, &LayoutConfig::default()).unwrap();
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].segs[0].level, 0);
        assert_eq!(layouts[0].segs[1].level, 1);
        assert_coords(&layouts[1].segs[0], 0.0, 1.0);
    }
}
