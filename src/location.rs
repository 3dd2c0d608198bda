//! Source locations for check results.

use std::fmt;

/// A call-site position, captured at compile time by [`tloc!`](crate::tloc).
///
/// Displays as the single token `file@line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.file, self.line)
    }
}

/// The [`Location`] of the macro invocation.
#[macro_export]
macro_rules! tloc {
    () => {
        $crate::Location::new(file!(), line!())
    };
}
