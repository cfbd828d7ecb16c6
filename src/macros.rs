//! Level entry points
//!
//! Every macro captures the call site where it is written, then logs through
//! either the process-wide logger or an explicit one:
//!
//! ```rust,ignore
//! ezlog::info!("Loaded %s entries from %s", count, path);
//! ezlog::error!(logger: my_logger, "Lost connection to %s", peer);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    (logger: $logger:expr, $severity:expr, $template:expr $(, $arg:expr)*) => {
        $crate::Logger::emit(
            &$logger,
            $severity,
            &$crate::callsite!(),
            $template,
            &[$(&$arg as &dyn $crate::LogArg),*],
        )
    };
    ($severity:expr, $template:expr $(, $arg:expr)*) => {
        $crate::emit(
            $severity,
            &$crate::callsite!(),
            $template,
            &[$(&$arg as &dyn $crate::LogArg),*],
        )
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(logger: $logger, $crate::Severity::Debug, $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!($crate::Severity::Debug, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(logger: $logger, $crate::Severity::Info, $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!($crate::Severity::Info, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(logger: $logger, $crate::Severity::Warning, $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!($crate::Severity::Warning, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(logger: $logger, $crate::Severity::Error, $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!($crate::Severity::Error, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! success {
    (logger: $logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(logger: $logger, $crate::Severity::Success, $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!($crate::Severity::Success, $template $(, $arg)*)
    };
}
