//! Process-wide default logger
//!
//! The level macros without a `logger:` argument log through this instance.
//! It is meant to be configured once at startup and read afterwards.

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::args::LogArg;
use crate::callsite::CallSite;
use crate::config::LoggerConfig;
use crate::emitter::Logger;
use crate::severity::Severity;

static GLOBAL: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::default()));

fn read() -> RwLockReadGuard<'static, Logger> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Logger> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

/// Show full declaring type paths on every following line
pub fn enable_package_display() {
    write().config_mut().show_packages = true;
}

/// Same as [`enable_package_display`]
pub fn show_packages() {
    enable_package_display();
}

/// Only log calls whose declaring type starts with one of the added prefixes
pub fn add_package_filter(prefix: impl Into<String>) {
    write().config_mut().package_filters.push(prefix.into());
}

/// Prefixes added so far, in insertion order
pub fn package_filters() -> Vec<String> {
    read().config().package_filters.clone()
}

/// Replace the whole process-wide configuration
pub fn configure(config: LoggerConfig) {
    *write() = Logger::new(config);
}

/// Snapshot of the process-wide logger
pub fn logger() -> Logger {
    read().clone()
}

/// Log one call through the process-wide logger
pub fn emit(severity: Severity, site: &CallSite, template: &str, args: &[&dyn LogArg]) {
    read().emit(severity, site, template, args);
}

pub(crate) fn with_logger<R>(f: impl FnOnce(&Logger) -> R) -> R {
    f(&read())
}
