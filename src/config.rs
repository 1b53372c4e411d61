use crate::ir::{Direction, Segment};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

/// One tie-break key. Specs are applied in order until one discriminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Start,
    End,
    Duration,
    Order,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub field: OrderField,
    #[serde(default)]
    pub descending: bool,
}

impl OrderSpec {
    pub fn asc(field: OrderField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn desc(field: OrderField) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// Compare two segments by a list of field specs, first discriminating spec
/// wins. Equal under every spec means `Equal`; the caller's stable sort keeps
/// the incoming order in that case.
pub fn compare_by_specs(a: &Segment, b: &Segment, specs: &[OrderSpec]) -> Ordering {
    for spec in specs {
        let ord = match spec.field {
            OrderField::Start => a.start.cmp(&b.start),
            OrderField::End => a.end.cmp(&b.end),
            OrderField::Duration => a.duration().cmp(&b.duration()),
            OrderField::Order => a.order.cmp(&b.order),
            OrderField::Id => a.id.cmp(&b.id),
        };
        let ord = if spec.descending { ord.reverse() } else { ord };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub direction: Direction,
    /// When true, later-stacked segments visually cover earlier ones (doubled
    /// width, capped at the far edge) instead of splitting the column.
    pub slot_event_overlap: bool,
    /// Trailing margin reserved in overlap mode so stacked segments don't
    /// cover the resize affordance of the segment underneath.
    pub resizer_margin: f32,
    /// Segments shorter than this vertical extent get the `condensed` hint.
    pub condensed_height: f32,
    pub for_print: bool,
    /// Tie-break ordering applied before level assignment and inside the
    /// coordinate pass when pressures tie.
    pub order: Vec<OrderSpec>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            slot_event_overlap: true,
            resizer_margin: 20.0,
            condensed_height: 30.0,
            for_print: false,
            order: vec![
                OrderSpec::asc(OrderField::Start),
                OrderSpec::desc(OrderField::Duration),
                OrderSpec::asc(OrderField::Order),
                OrderSpec::asc(OrderField::Id),
            ],
        }
    }
}

/// Load a config file, or the defaults when no path is given. Accepts strict
/// JSON first and falls back to JSON5 for hand-written files.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config = match serde_json::from_str::<LayoutConfig>(&contents) {
        Ok(config) => config,
        Err(_) => json5::from_str::<LayoutConfig>(&contents)?,
    };
    Ok(config)
}
