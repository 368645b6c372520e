use abigen_chrono::{Clock, FileTime, TimePoint};

use super::render::{TimeReport, WordsReport};
use super::{CommandError, finish};
use crate::cli::OutputFormat;
use crate::palette::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeAction {
    Now,
    /// Ticks since 1601.
    ToPosix(i64),
    /// Seconds since 1970.
    FromPosix(i64),
    Words(u64),
}

pub struct TimeArgs {
    pub action: TimeAction,
    pub format: OutputFormat,
    pub palette: Palette,
}

pub fn run(args: TimeArgs) {
    finish(render(&args));
}

pub fn render(args: &TimeArgs) -> Result<String, CommandError> {
    let time = match args.action {
        TimeAction::Now => Clock::now(),
        TimeAction::ToPosix(ticks) => TimePoint::from_ticks(ticks),
        TimeAction::FromPosix(seconds) => Clock::from_posix_seconds(seconds),
        TimeAction::Words(raw) => {
            let report = WordsReport::of(raw, FileTime::new(raw).to_words());
            return match args.format {
                OutputFormat::Text => Ok(report.render(args.palette)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
            };
        }
    };
    tracing::debug!(action = ?args.action, ticks = time.ticks(), "time conversion");

    let report = TimeReport::of(time);
    match args.format {
        OutputFormat::Text => Ok(report.render(args.palette)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
    }
}
