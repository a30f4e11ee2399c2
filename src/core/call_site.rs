//! Call-site descriptor

use std::panic::Location;

/// Function name reported when the caller could not be resolved
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Where a log call was made
///
/// Usually produced by the [`call_site!`](crate::call_site) macro, which
/// captures the enclosing function as well. [`CallSite::caller`] relies on
/// `#[track_caller]` and can only recover file, line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            function,
            line,
            column,
        }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(
            location.file(),
            UNKNOWN_FUNCTION,
            location.line(),
            location.column(),
        )
    }

    /// Last component of the file path
    pub fn file_name(&self) -> &'static str {
        let file = self.file;
        file.rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(file)
    }
}

/// Strip the helper suffixes left by `type_name` when resolving a function path
#[doc(hidden)]
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::__f").unwrap_or(path);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}
