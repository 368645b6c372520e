//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use abigen_core::{Category, TypeRecord};
use clap::ArgMatches;

use super::OutputFormat;
use crate::commands::name::NameArgs;
use crate::commands::names::NamesArgs;
use crate::commands::time::{TimeAction, TimeArgs};
use crate::palette::ColorChoice;

pub struct NameParams {
    pub namespace: String,
    pub name: String,
    pub arity: usize,
    pub category: Category,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl NameParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            namespace: m.get_one::<String>("namespace").cloned().unwrap_or_default(),
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            arity: m.get_one::<usize>("arity").copied().unwrap_or(0),
            category: parse_category(m),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<NameParams> for NameArgs {
    fn from(p: NameParams) -> Self {
        Self {
            record: TypeRecord::new(p.namespace, p.name, p.arity, p.category),
            format: p.format,
            palette: p.color.palette(),
        }
    }
}

pub struct NamesParams {
    pub types_path: PathBuf,
    pub foundation: bool,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl NamesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            types_path: m
                .get_one::<PathBuf>("types_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            foundation: m.get_flag("foundation"),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<NamesParams> for NamesArgs {
    fn from(p: NamesParams) -> Self {
        Self {
            types_path: p.types_path,
            foundation: p.foundation,
            format: p.format,
            palette: p.color.palette(),
        }
    }
}

pub struct TimeParams {
    pub action: TimeAction,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl TimeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let (action, sub) = match m.subcommand() {
            Some(("now", sub)) => (TimeAction::Now, sub),
            Some(("to-posix", sub)) => (
                TimeAction::ToPosix(sub.get_one::<i64>("ticks").copied().unwrap_or(0)),
                sub,
            ),
            Some(("from-posix", sub)) => (
                TimeAction::FromPosix(sub.get_one::<i64>("seconds").copied().unwrap_or(0)),
                sub,
            ),
            Some(("words", sub)) => (
                TimeAction::Words(sub.get_one::<u64>("raw").copied().unwrap_or(0)),
                sub,
            ),
            _ => unreachable!("clap should have caught this"),
        };

        Self {
            action,
            format: parse_format(sub),
            color: parse_color(sub),
        }
    }
}

impl From<TimeParams> for TimeArgs {
    fn from(p: TimeParams) -> Self {
        Self {
            action: p.action,
            format: p.format,
            palette: p.color.palette(),
        }
    }
}

fn parse_category(m: &ArgMatches) -> Category {
    m.get_one::<String>("category")
        .and_then(|s| Category::from_name(s))
        .unwrap_or(Category::Class)
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<String>("color")
        .and_then(|s| ColorChoice::from_name(s))
        .unwrap_or_default()
}
