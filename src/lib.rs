#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod style;

pub use config::{LayoutConfig, OrderField, OrderSpec, load_config};
pub use ir::{Column, Direction, Document, Segment};
pub use layout::{
    ColumnLayout, LayoutError, SegGeom, layout_column, layout_column_with, layout_columns,
};
pub use style::{BoxStyle, box_style};

#[cfg(feature = "cli")]
pub use cli::run;
