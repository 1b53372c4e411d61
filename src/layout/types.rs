use serde::Serialize;

/// Resolved horizontal geometry for one segment. Index-aligned with the input
/// slice the column was laid out from.
///
/// `backward_coord` and `forward_coord` are normalized to [0, 1]:
/// `backward_coord` maps to the left side in left-to-right mode and the right
/// side in right-to-left mode, `forward_coord` the opposite side.
#[derive(Debug, Clone, Serialize)]
pub struct SegGeom {
    /// Stacking tier. Segments in the same level never overlap in time.
    pub level: usize,
    /// Indices (into the same column) of segments in later levels that
    /// overlap this one in time.
    pub forward: Vec<usize>,
    /// Length of the longest forward-collision chain starting here.
    pub forward_pressure: u32,
    pub backward_coord: f32,
    pub forward_coord: f32,
}

impl SegGeom {
    /// Fraction of the column width this segment claims before any overlap
    /// adjustment.
    pub fn span(&self) -> f32 {
        self.forward_coord - self.backward_coord
    }
}

/// Geometry for every segment of one column, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnLayout {
    pub segs: Vec<SegGeom>,
}

/// Per-pass working state for one segment. All derived fields start unset and
/// are written exactly once, in the order level, forward, pressure, coords.
/// `Option` is the memo sentinel: a computed pressure of zero is a legitimate
/// terminal value and must not read as "not yet done".
#[derive(Debug, Clone, Default)]
pub(crate) struct SegState {
    pub level: usize,
    pub forward: Vec<usize>,
    pub forward_pressure: Option<u32>,
    pub forward_coord: Option<f32>,
    pub backward_coord: Option<f32>,
}
