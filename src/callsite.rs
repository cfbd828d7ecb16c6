//! Call-site capture
//!
//! A [`CallSite`] names the code that issued a logging call: the declaring
//! type (or module, for free functions), the method, the source file and the
//! line. It is produced at the call site by [`callsite!`](crate::callsite),
//! which reads the enclosing function's path through `std::any::type_name`.

use std::fmt;
use std::path::Path;

/// Method name used when the enclosing function cannot be determined
pub const UNKNOWN_METHOD: &str = "<unknown>";

/// File name used when the source file is not known
pub const UNKNOWN_FILE: &str = "<unknown>";

const CLOSURE_SEGMENT: &str = "{{closure}}";

/// Source location of a logging call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    declaring_type: String,
    method: String,
    file: String,
    line: u32,
}

impl CallSite {
    /// Build a call site from already-resolved parts.
    ///
    /// `file` may be a full path; only its final component is kept.
    pub fn new(declaring_type: impl Into<String>, method: impl Into<String>, file: &str, line: u32) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            method: method.into(),
            file: file_name(file),
            line,
        }
    }

    /// Build a call site from the path of the enclosing function.
    ///
    /// `function_path` is what [`function_path!`](crate::function_path)
    /// yields, e.g. `acme::core::Worker::run`. The declaring type is the path
    /// without its last segment. When the path is too short to split,
    /// `module_path` is used as the declaring type and the method is unknown.
    pub fn from_function_path(module_path: &str, function_path: &str, file: &str, line: u32) -> Self {
        let mut segments = split_path(function_path);
        while segments.last() == Some(&CLOSURE_SEGMENT) {
            segments.pop();
        }

        match segments.split_last() {
            Some((method, owner)) if !owner.is_empty() => {
                let declaring_type = self_type(&owner.join("::"));
                Self::new(declaring_type, *method, file, line)
            }
            _ => {
                log::debug!("Could not resolve enclosing function from '{}'", function_path);
                Self::new(module_path, UNKNOWN_METHOD, file, line)
            }
        }
    }

    /// Fully-qualified path of the declaring type or module
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// Last `::` segment of the declaring type
    pub fn simple_type_name(&self) -> &str {
        split_path(&self.declaring_type)
            .last()
            .copied()
            .unwrap_or(self.declaring_type.as_str())
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({}:{})", self.declaring_type, self.method, self.file, self.line)
    }
}

fn file_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

/// Split a path on `::`, ignoring separators nested inside `<...>`.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = path.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments.retain(|segment| !segment.is_empty());
    segments
}

/// `<acme::Worker as acme::Task>` resolves to `acme::Worker`
fn self_type(owner: &str) -> String {
    match owner.strip_prefix('<').and_then(|inner| inner.strip_suffix('>')) {
        Some(inner) => inner.split(" as ").next().unwrap_or(inner).to_string(),
        None => owner.to_string(),
    }
}

/// Path of the enclosing function, e.g. `acme::core::Worker::run`.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Capture the [`CallSite`] of the code this macro is expanded in.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::from_function_path(::std::module_path!(), $crate::function_path!(), ::std::file!(), ::std::line!())
    };
}
