use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use abigen_chrono::FoundationType;
use abigen_core::parse_type_records;
use abigen_names::TypeNames;

use super::{CommandError, finish, render};
use crate::cli::OutputFormat;
use crate::palette::Palette;

pub struct NamesArgs {
    pub types_path: PathBuf,
    pub foundation: bool,
    pub format: OutputFormat,
    pub palette: Palette,
}

pub fn run(args: NamesArgs) {
    finish(load_types(&args.types_path).and_then(|json| render(&args, &json)));
}

/// Render names for the records in `json`.
pub fn render(args: &NamesArgs, json: &str) -> Result<String, CommandError> {
    let mut records = parse_type_records(json)?;
    if args.foundation {
        records.extend(FoundationType::records());
    }
    tracing::debug!(count = records.len(), "loaded type records");

    let names: Vec<TypeNames> = records.iter().map(TypeNames::of).collect();
    match args.format {
        OutputFormat::Text => Ok(render_text(&names, args.palette)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)? + "\n"),
    }
}

fn render_text(names: &[TypeNames], p: Palette) -> String {
    names
        .iter()
        .map(|n| render::type_names(n, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn load_types(path: &Path) -> Result<String, CommandError> {
    let read_err = |source| CommandError::Read {
        path: path.display().to_string(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}
