//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use abigen_core::Category;
use clap::{Arg, ArgAction, value_parser};

/// Type namespace (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .short('n')
        .long("namespace")
        .value_name("NAMESPACE")
        .required(true)
        .help("Dotted namespace, e.g. Sample.Space")
}

/// Bare type name (--name).
pub fn type_name_arg() -> Arg {
    Arg::new("name")
        .short('t')
        .long("name")
        .value_name("NAME")
        .required(true)
        .help("Type name, including any `N arity suffix")
}

/// Generic parameter count (--arity).
pub fn arity_arg() -> Arg {
    Arg::new("arity")
        .short('a')
        .long("arity")
        .value_name("N")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Number of generic parameters")
}

/// Type category (--category).
pub fn category_arg() -> Arg {
    Arg::new("category")
        .short('c')
        .long("category")
        .value_name("CATEGORY")
        .default_value("class")
        .value_parser(Category::ALL.map(Category::as_str))
        .help("Type category")
}

/// JSON type list (positional).
pub fn types_path_arg() -> Arg {
    Arg::new("types_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON array of type records ('-' for stdin)")
}

/// Append foundation time types (--foundation).
pub fn foundation_arg() -> Arg {
    Arg::new("foundation")
        .long("foundation")
        .action(ArgAction::SetTrue)
        .help("Also list Windows.Foundation.TimeSpan and DateTime")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Signed tick count (positional).
pub fn ticks_arg() -> Arg {
    Arg::new("ticks")
        .value_name("TICKS")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help("100ns ticks since 1601-01-01")
}

/// POSIX seconds (positional).
pub fn seconds_arg() -> Arg {
    Arg::new("seconds")
        .value_name("SECONDS")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help("Seconds since 1970-01-01")
}

/// Raw unsigned timestamp (positional).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .value_name("RAW")
        .required(true)
        .value_parser(value_parser!(u64))
        .help("Raw 64-bit timestamp")
}
