//! Text rendering shared by the name and time commands.

use std::fmt::Write;

use abigen_chrono::{Clock, FileTimeWords, TimePoint};
use abigen_names::TypeNames;
use serde::Serialize;

use crate::palette::Palette;

/// One type's names as an aligned text block.
pub fn type_names(names: &TypeNames, p: Palette) -> String {
    let mut out = String::new();
    writeln!(out, "{}{}{}", p.qualified, names.qualified, p.reset).unwrap();
    field(&mut out, "mangled", &names.mangled, p);
    field(&mut out, "nested", &names.mangled_nested, p);
    out
}

/// Every view of one instant.
#[derive(Debug, Serialize)]
pub struct TimeReport {
    pub ticks: i64,
    pub raw: u64,
    pub posix_seconds: i64,
    pub rfc3339: Option<String>,
}

impl TimeReport {
    pub fn of(time: TimePoint) -> Self {
        Self {
            ticks: time.ticks(),
            raw: Clock::to_raw(time),
            posix_seconds: Clock::to_posix_seconds(time),
            rfc3339: time.to_chrono().map(|dt| dt.to_rfc3339()),
        }
    }

    pub fn render(&self, p: Palette) -> String {
        let mut out = String::new();
        field(&mut out, "ticks", &self.ticks.to_string(), p);
        field(&mut out, "raw", &self.raw.to_string(), p);
        field(&mut out, "posix", &self.posix_seconds.to_string(), p);
        field(
            &mut out,
            "rfc3339",
            self.rfc3339.as_deref().unwrap_or("out of range"),
            p,
        );
        out
    }
}

/// Raw timestamp split into its two 32-bit words.
#[derive(Debug, Serialize)]
pub struct WordsReport {
    pub raw: u64,
    pub low: u32,
    pub high: u32,
}

impl WordsReport {
    pub fn of(raw: u64, words: FileTimeWords) -> Self {
        Self {
            raw,
            low: words.low,
            high: words.high,
        }
    }

    pub fn render(&self, p: Palette) -> String {
        let mut out = String::new();
        field(&mut out, "raw", &format!("{:#018x}", self.raw), p);
        field(&mut out, "low", &format!("{:#010x}", self.low), p);
        field(&mut out, "high", &format!("{:#010x}", self.high), p);
        out
    }
}

fn field(out: &mut String, label: &str, value: &str, p: Palette) {
    writeln!(
        out,
        "  {}{:<8}{} {}{}{}",
        p.label, label, p.reset, p.value, value, p.reset
    )
    .unwrap();
}
