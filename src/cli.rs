use crate::config::load_config;
use crate::ir::Document;
use crate::layout::layout_columns;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tgl", version, about = "Time-grid overlap layout engine")]
pub struct Args {
    /// Input events file (JSON document with columns) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "geometry")]
    pub output_format: OutputFormat,

    /// Config JSON/JSON5 file (direction, ordering, overlap mode)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    /// Raw levels, pressures, and normalized coordinates
    Geometry,
    /// Geometry plus resolved box styles (offsets, z-index, margins)
    Boxes,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let doc: Document = match serde_json::from_str(&input) {
        Ok(doc) => doc,
        Err(_) => json5::from_str(&input)?,
    };

    let layouts = layout_columns(&doc.columns, &config)?;
    let with_styles = matches!(args.output_format, OutputFormat::Boxes);

    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &doc, &layouts, &config, with_styles)?,
        None => {
            let dump = LayoutDump::from_layouts(&doc, &layouts, &config, with_styles);
            let json = serde_json::to_string_pretty(&dump)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
