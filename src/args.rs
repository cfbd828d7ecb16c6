//! Message arguments and `%s` substitution

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// Placeholder replaced by each argument in turn
pub const PLACEHOLDER: &str = "%s";

/// Text written for an absent argument
pub const NULL_TEXT: &str = "null";

/// A value that can be substituted into a message template.
///
/// `None` means the value is absent and is printed as `null`.
pub trait LogArg {
    fn log_text(&self) -> Option<String>;
}

macro_rules! impl_log_arg_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LogArg for $ty {
                fn log_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_log_arg_display!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl LogArg for Cow<'_, str> {
    fn log_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl LogArg for fmt::Arguments<'_> {
    fn log_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl LogArg for Path {
    fn log_text(&self) -> Option<String> {
        Some(self.display().to_string())
    }
}

impl LogArg for PathBuf {
    fn log_text(&self) -> Option<String> {
        Some(self.display().to_string())
    }
}

impl<T: LogArg> LogArg for Option<T> {
    fn log_text(&self) -> Option<String> {
        self.as_ref().and_then(LogArg::log_text)
    }
}

impl<T: LogArg + ?Sized> LogArg for &T {
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T: LogArg + ?Sized> LogArg for Box<T> {
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T: LogArg + ?Sized> LogArg for Rc<T> {
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T: LogArg + ?Sized> LogArg for Arc<T> {
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

/// Adapter for any [`Display`] type without its own [`LogArg`] impl
pub struct Shown<T>(pub T);

impl<T: Display> LogArg for Shown<T> {
    fn log_text(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Wrap a [`Display`] value so it can be passed as a log argument
pub fn display<T: Display>(value: T) -> Shown<T> {
    Shown(value)
}

/// Replace `%s` placeholders with the arguments, in order.
///
/// Each argument takes the first placeholder of the message built so far,
/// including text inserted by earlier arguments. `$` inside an argument is
/// written as `§`. Leftover placeholders stay as they are and leftover
/// arguments are dropped.
pub fn substitute(template: &str, args: &[&dyn LogArg]) -> String {
    let mut message = template.to_string();

    for arg in args {
        let Some(pos) = message.find(PLACEHOLDER) else {
            continue;
        };
        let text = match arg.log_text() {
            Some(text) => text.replace('$', "§"),
            None => NULL_TEXT.to_string(),
        };
        message.replace_range(pos..pos + PLACEHOLDER.len(), &text);
    }

    message
}
