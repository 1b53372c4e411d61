use serde::{Deserialize, Serialize};

/// Writing direction of the grid. Decides which side the backward coordinate
/// maps to when geometry is translated to box offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ltr" | "LTR" => Some(Self::Ltr),
            "rtl" | "RTL" => Some(Self::Rtl),
            _ => None,
        }
    }
}

/// One visual occurrence of an event within a single time-column.
///
/// `top` and `bottom` are the vertical extent already resolved by the caller's
/// time-to-pixel mapping; the engine only requires `bottom > top`. `start`,
/// `end`, and `order` are opaque ordering payload used for tie-breaks and are
/// never interpreted as times by the engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub start: i64,
    pub end: i64,
    pub top: f32,
    pub bottom: f32,
    #[serde(default)]
    pub order: i64,
}

impl Segment {
    pub fn new(id: &str, start: i64, end: i64, top: f32, bottom: f32) -> Self {
        Self {
            id: id.to_string(),
            start,
            end,
            top,
            bottom,
            order: 0,
        }
    }

    /// Ordering payload duration, used by the `Duration` order field.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// All segments that share one vertical time-column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Column {
    pub segments: Vec<Segment>,
}

/// Top-level input document: one entry per rendered column, left to right.
/// Columns are laid out independently of each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub columns: Vec<Column>,
}
