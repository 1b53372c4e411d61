use crate::config::LayoutConfig;
use crate::ir::Document;
use crate::layout::ColumnLayout;
use crate::style::{BoxStyle, box_style};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub columns: Vec<ColumnDump>,
}

#[derive(Debug, Serialize)]
pub struct ColumnDump {
    pub index: usize,
    pub segs: Vec<SegDump>,
}

#[derive(Debug, Serialize)]
pub struct SegDump {
    pub id: String,
    pub level: usize,
    pub forward_pressure: u32,
    pub backward_coord: f32,
    pub forward_coord: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BoxStyle>,
}

impl LayoutDump {
    /// Build a dump from a document and its per-column layouts. When
    /// `with_styles` is set each segment also carries its resolved box style.
    pub fn from_layouts(
        doc: &Document,
        layouts: &[ColumnLayout],
        config: &LayoutConfig,
        with_styles: bool,
    ) -> Self {
        let columns = doc
            .columns
            .iter()
            .zip(layouts)
            .enumerate()
            .map(|(index, (col, layout))| {
                let segs = col
                    .segments
                    .iter()
                    .zip(&layout.segs)
                    .map(|(seg, geom)| SegDump {
                        id: seg.id.clone(),
                        level: geom.level,
                        forward_pressure: geom.forward_pressure,
                        backward_coord: geom.backward_coord,
                        forward_coord: geom.forward_coord,
                        style: with_styles.then(|| box_style(seg, geom, config)),
                    })
                    .collect();
                ColumnDump { index, segs }
            })
            .collect();

        LayoutDump { columns }
    }
}

pub fn write_layout_dump(
    path: &Path,
    doc: &Document,
    layouts: &[ColumnLayout],
    config: &LayoutConfig,
    with_styles: bool,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layouts(doc, layouts, config, with_styles);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
