//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("abigen")
        .about("ABI type names and timestamp conversions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(name_command())
        .subcommand(names_command())
        .subcommand(time_command())
}

/// Names for a single type given on the command line.
pub fn name_command() -> Command {
    Command::new("name")
        .about("Print qualified and mangled names of one type")
        .override_usage(
            "\
  abigen name -n <NAMESPACE> -t <NAME> [-a <N>] [-c <CATEGORY>]",
        )
        .after_help(
            r#"EXAMPLES:
  abigen name -n A.B -t C                      # A.B.C / A_CB_CC
  abigen name -n A.B -t 'Map`2' -a 2           # generic: __FMap_2
  abigen name -n X -t Y -c delegate -f json    # JSON output"#,
        )
        .arg(namespace_arg())
        .arg(type_name_arg())
        .arg(arity_arg())
        .arg(category_arg())
        .arg(format_arg())
        .arg(color_arg())
}

/// Names for every record of a JSON type list.
pub fn names_command() -> Command {
    Command::new("names")
        .about("Print qualified and mangled names for a JSON type list")
        .override_usage(
            "\
  abigen names <FILE> [--foundation]
  abigen names - < types.json",
        )
        .after_help(
            r#"INPUT:
  [{ "namespace": "A.B", "name": "C", "generic_arity": 0, "category": "class" }]

EXAMPLES:
  abigen names types.json
  abigen names types.json --foundation -f json"#,
        )
        .arg(types_path_arg())
        .arg(foundation_arg())
        .arg(format_arg())
        .arg(color_arg())
}

/// Tick clock conversions.
pub fn time_command() -> Command {
    Command::new("time")
        .about("Convert between ticks, raw timestamps and POSIX seconds")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("now")
                .about("Current host time")
                .arg(format_arg())
                .arg(color_arg()),
        )
        .subcommand(
            Command::new("to-posix")
                .about("Ticks since 1601 to POSIX seconds")
                .arg(ticks_arg())
                .arg(format_arg())
                .arg(color_arg()),
        )
        .subcommand(
            Command::new("from-posix")
                .about("POSIX seconds to ticks since 1601")
                .arg(seconds_arg())
                .arg(format_arg())
                .arg(color_arg()),
        )
        .subcommand(
            Command::new("words")
                .about("Split a raw timestamp into low/high 32-bit words")
                .arg(raw_arg())
                .arg(format_arg())
                .arg(color_arg()),
        )
}
