use crate::config::LayoutConfig;
use crate::ir::{Direction, Segment};
use crate::layout::SegGeom;
use serde::Serialize;

/// Positioning values for one laid-out segment, ready to be applied as CSS.
/// `left` and `right` are inset fractions of the column width measured from
/// the matching edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStyle {
    pub left: f32,
    pub right: f32,
    /// Later-stacked segments render above earlier ones (level is 0-based,
    /// z-index 1-based).
    pub z_index: u32,
    /// Trailing margin in pixels, reserved in overlap mode so stacked
    /// segments leave the resize icon underneath visible. `margin-right` in
    /// left-to-right mode, `margin-left` in right-to-left mode.
    pub margin_trailing: f32,
    /// Segment sits above level 0, i.e. rendered inset into another event.
    pub inset: bool,
    /// Segment is too short for its full title; render condensed.
    pub condensed: bool,
}

/// Translate normalized coordinates into edge offsets for one segment.
pub fn box_style(seg: &Segment, geom: &SegGeom, config: &LayoutConfig) -> BoxStyle {
    let backward_coord = geom.backward_coord;
    let mut forward_coord = geom.forward_coord;

    if config.slot_event_overlap {
        // double the width, but never past the far edge
        forward_coord = (backward_coord + (forward_coord - backward_coord) * 2.0).min(1.0);
    }

    let (left, right) = match config.direction {
        Direction::Ltr => (backward_coord, 1.0 - forward_coord),
        Direction::Rtl => (1.0 - forward_coord, backward_coord),
    };

    let margin_trailing = if config.slot_event_overlap && geom.forward_pressure > 0 {
        config.resizer_margin
    } else {
        0.0
    };

    BoxStyle {
        left,
        right,
        z_index: geom.level as u32 + 1,
        margin_trailing,
        inset: geom.level > 0,
        condensed: !config.for_print && seg.bottom - seg.top < config.condensed_height,
    }
}
