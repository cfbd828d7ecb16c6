//! Line rendering and output
//!
//! A [`Logger`] turns a severity, a call site and a message template into a
//! single console line:
//!
//! ```text
//! [INFO] 2026-01-03 12:00:00 Worker.run(worker.rs:12) : started
//! ```

use chrono::{DateTime, Local};
use std::io::{self, Write};

use crate::args::{LogArg, substitute};
use crate::callsite::{CallSite, UNKNOWN_FILE, UNKNOWN_METHOD};
use crate::config::LoggerConfig;
use crate::severity::Severity;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const RESET: &str = "\x1b[0m";

/// Call-site-aware console logger
#[derive(Debug, Clone, Default)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LoggerConfig {
        &mut self.config
    }

    /// Render the line for a call, or `None` if the caller is filtered out
    pub fn render(&self, severity: Severity, site: &CallSite, template: &str, args: &[&dyn LogArg]) -> Option<String> {
        self.render_at(severity, site, template, args, Local::now())
    }

    /// Render the line for a call with an explicit timestamp
    pub fn render_at(
        &self,
        severity: Severity,
        site: &CallSite,
        template: &str,
        args: &[&dyn LogArg],
        now: DateTime<Local>,
    ) -> Option<String> {
        if !self.config.admits(site.declaring_type()) {
            return None;
        }

        let message = substitute(template, args);
        let identity = if self.config.show_packages {
            site.declaring_type()
        } else {
            site.simple_type_name()
        };

        let line = format!(
            "[{}] {} {}.{}({}:{}) : {}",
            severity.label(),
            now.format(TIMESTAMP_FORMAT),
            identity,
            site.method(),
            site.file(),
            site.line(),
            message
        );

        Some(self.colorize(severity, line))
    }

    fn colorize(&self, severity: Severity, line: String) -> String {
        match severity.ansi_code() {
            Some(code) if self.config.colors => format!("\x1b[{}m{}{}", code, line, RESET),
            _ => line,
        }
    }

    /// Write the line for a call to `out`
    pub fn emit_to<W: Write>(
        &self,
        out: &mut W,
        severity: Severity,
        site: &CallSite,
        template: &str,
        args: &[&dyn LogArg],
    ) -> io::Result<()> {
        match self.render(severity, site, template, args) {
            Some(line) => writeln!(out, "{}", line),
            None => Ok(()),
        }
    }

    /// Write the line for a call to stdout.
    ///
    /// Write failures are dropped; logging never fails the caller.
    pub fn emit(&self, severity: Severity, site: &CallSite, template: &str, args: &[&dyn LogArg]) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = self.emit_to(&mut handle, severity, site, template, args);
    }

    /// Render a record coming from the `log` facade.
    ///
    /// The record target stands in for the declaring type, so the package
    /// filters see the same key here as in [`log::Log::enabled`].
    pub fn render_record_at(&self, record: &log::Record<'_>, now: DateTime<Local>) -> Option<String> {
        let site = record_site(record);
        let message = record.args().to_string();
        self.render_at(Severity::from_log_level(record.level()), &site, &message, &[], now)
    }
}

fn record_site(record: &log::Record<'_>) -> CallSite {
    CallSite::new(
        record.target(),
        UNKNOWN_METHOD,
        record.file().unwrap_or(UNKNOWN_FILE),
        record.line().unwrap_or(0),
    )
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.config.admits(metadata.target())
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Some(line) = self.render_record_at(record, Local::now()) {
            let stdout = io::stdout();
            let _ = writeln!(stdout.lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}
