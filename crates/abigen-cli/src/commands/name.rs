use abigen_core::TypeRecord;
use abigen_names::TypeNames;

use super::{CommandError, finish, render};
use crate::cli::OutputFormat;
use crate::palette::Palette;

pub struct NameArgs {
    pub record: TypeRecord,
    pub format: OutputFormat,
    pub palette: Palette,
}

pub fn run(args: NameArgs) {
    finish(render(&args));
}

pub fn render(args: &NameArgs) -> Result<String, CommandError> {
    args.record.validate()?;
    tracing::debug!(record = ?args.record, "naming type");

    let names = TypeNames::of(&args.record);
    match args.format {
        OutputFormat::Text => Ok(render::type_names(&names, args.palette)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)? + "\n"),
    }
}
