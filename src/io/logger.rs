//! Colored stderr logger behind the `log` facade

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    max_level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    // Allow print for user-facing log output
    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => Color::BrightRed,
            Level::Warn => Color::BrightYellow,
            Level::Info => Color::BrightCyan,
            Level::Debug => Color::BrightMagenta,
            Level::Trace => Color::BrightGreen,
        };

        eprintln!("{} {}", record.level().as_str().color(color), record.args());
    }

    fn flush(&self) {}
}

/// Install the stderr logger; `quiet` restricts output to warnings and errors
///
/// Installing twice is a no-op, so repeated calls from tests are harmless.
pub fn init(quiet: bool) {
    let max_level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    log::set_max_level(max_level);
    let _ = log::set_boxed_logger(Box::new(StderrLogger { max_level }));
}
