//! Integration tests for call-site-aware logging
//!
//! These tests verify the full path from a call in application code to the
//! rendered console line:
//! - Capturing the enclosing type and method
//! - Package filtering on the captured type
//! - Timestamp, label and color of the line

use chrono::{Local, NaiveDateTime};
use ezlog::{CallSite, LogArg, Logger, LoggerConfig, Severity};
use lazy_regex::regex_captures;

mod acme {
    pub mod core {
        use ezlog::CallSite;

        pub struct Worker;

        impl Worker {
            pub fn run(&self) -> CallSite {
                ezlog::callsite!()
            }
        }
    }

    pub mod other {
        use ezlog::CallSite;

        pub struct Thing;

        impl Thing {
            pub fn go(&self) -> CallSite {
                ezlog::callsite!()
            }
        }
    }
}

fn plain_logger(config: LoggerConfig) -> Logger {
    Logger::new(config.with_colors(false))
}

/// Render `template` from this function's own call site
fn render_here(logger: &Logger, template: &str, args: &[&dyn LogArg]) -> Option<String> {
    logger.render(Severity::Info, &ezlog::callsite!(), template, args)
}

#[test]
fn test_captures_method_in_impl() {
    let site = acme::core::Worker.run();
    assert_eq!(site.declaring_type(), "call_site_logging::acme::core::Worker");
    assert_eq!(site.simple_type_name(), "Worker");
    assert_eq!(site.method(), "run");
    assert_eq!(site.file(), "call_site_logging.rs");
}

#[test]
fn test_captures_free_function() {
    let site = ezlog::callsite!();
    assert_eq!(site.declaring_type(), module_path!());
    assert_eq!(site.method(), "test_captures_free_function");
    assert_eq!(site.line(), line!() - 3);
}

#[test]
fn test_closure_reports_enclosing_function() {
    let capture = || ezlog::callsite!();
    let site = capture();
    assert_eq!(site.method(), "test_closure_reports_enclosing_function");
}

#[test]
fn test_identity_short_and_full() {
    let site = acme::core::Worker.run();

    let short = plain_logger(LoggerConfig::default())
        .render(Severity::Info, &site, "m", &[])
        .expect("Line should render");
    assert!(short.contains(" Worker.run(call_site_logging.rs:"));

    let full = plain_logger(LoggerConfig::default().with_packages_shown())
        .render(Severity::Info, &site, "m", &[])
        .expect("Line should render");
    assert!(full.contains(" call_site_logging::acme::core::Worker.run(call_site_logging.rs:"));
}

#[test]
fn test_package_filter_on_captured_type() {
    let logger = plain_logger(LoggerConfig::default().with_package_filter("call_site_logging::acme::core"));
    let worker = acme::core::Worker.run();
    let thing = acme::other::Thing.go();

    assert!(logger.render(Severity::Info, &worker, "m", &[]).is_some());
    assert!(logger.render(Severity::Info, &thing, "m", &[]).is_none());

    let open = plain_logger(LoggerConfig::default());
    assert!(open.render(Severity::Info, &thing, "m", &[]).is_some());
}

#[test]
fn test_message_substitution() {
    let logger = plain_logger(LoggerConfig::default());
    let none: Option<&str> = None;

    let line = render_here(&logger, "Value: %s, %s", &[&42, &none]).expect("Line should render");
    assert!(line.ends_with(" : Value: 42, null"));

    let line = render_here(&logger, "got %s", &[&"a$b"]).expect("Line should render");
    assert!(line.ends_with(" : got a§b"));
    assert!(!line.contains("a$b"));

    let line = render_here(&logger, "only %s", &[&1, &2]).expect("Line should render");
    assert!(line.ends_with(" : only 1"));

    let line = render_here(&logger, "%s and %s", &[]).expect("Line should render");
    assert!(line.ends_with(" : %s and %s"));
}

#[test]
fn test_timestamp_is_local_time_of_call() {
    let logger = plain_logger(LoggerConfig::default());
    let before = Local::now().naive_local();
    let line = render_here(&logger, "tick", &[]).expect("Line should render");

    let (_, stamp) = regex_captures!(r"^\[INFO\] (\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) ", &line)
        .expect("Line should start with label and timestamp");
    let parsed = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").expect("Timestamp should parse");
    let drift = (parsed - before).num_seconds().abs();
    assert!(drift <= 2, "timestamp {} drifted {}s", stamp, drift);
}

#[test]
fn test_label_and_color_per_severity() {
    let logger = Logger::new(LoggerConfig::default());
    let site = CallSite::new("acme::Worker", "run", "worker.rs", 1);

    for severity in Severity::ALL {
        let line = logger.render(severity, &site, "m", &[]).expect("Line should render");
        let label = format!("[{}] ", severity.label());
        match severity.ansi_code() {
            Some(code) => {
                assert!(line.starts_with(&format!("\x1b[{}m{}", code, label)));
                assert!(line.ends_with("\x1b[0m"));
            }
            None => {
                assert!(line.starts_with(&label));
                assert!(!line.contains('\x1b'));
            }
        }
    }
}

#[test]
fn test_same_call_site_renders_identically() {
    let logger = plain_logger(LoggerConfig::default());
    let lines: Vec<String> = (0..2)
        .map(|_| {
            logger
                .render(Severity::Warning, &ezlog::callsite!(), "repeat %s", &[&7])
                .expect("Line should render")
        })
        .collect();

    // Drop "[WARNING] <date> <time> " before comparing
    let strip = |line: &str| line.splitn(4, ' ').nth(3).map(str::to_string);
    assert_eq!(strip(&lines[0]), strip(&lines[1]));
    assert!(lines[0].contains("(call_site_logging.rs:"));
}
