use thiserror::Error;

/// Contract violations in the input geometry. The layout itself is a total
/// function over well-formed input, so these are the only failure modes; the
/// engine fails fast instead of producing a silently corrupted layout.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("segment `{id}` has inverted vertical extent: top {top} >= bottom {bottom}")]
    InvertedSegment { id: String, top: f32, bottom: f32 },

    #[error("segment `{id}` has a non-finite vertical extent")]
    NonFiniteExtent { id: String },
}
