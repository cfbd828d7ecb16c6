//! Call-site-aware console logging
//!
//! Each line names the code that logged it:
//!
//! ```text
//! [WARNING] 2026-01-03 12:00:00 Worker.run(worker.rs:12) : retrying 3
//! ```
//!
//! ```rust,ignore
//! ezlog::add_package_filter("acme::core");
//! ezlog::warning!("retrying %s", attempts);
//! ```

mod args;
mod callsite;
mod config;
mod emitter;
mod facade;
mod global;
mod macros;
mod severity;

pub use args::{LogArg, NULL_TEXT, PLACEHOLDER, Shown, display, substitute};
pub use callsite::{CallSite, UNKNOWN_FILE, UNKNOWN_METHOD};
pub use config::LoggerConfig;
pub use emitter::Logger;
pub use facade::init;
pub use global::{add_package_filter, configure, emit, enable_package_display, logger, package_filters, show_packages};
pub use severity::Severity;
