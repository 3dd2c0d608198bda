//! Internal error types.
//!
//! The engine never hands these to test authors: assertion failures travel as
//! report text and the process exit code. They exist so configuration parsing
//! and the demo program can use `?` like the rest of the crate.

use miette::Diagnostic;
use thiserror::Error;

/// Failure to resolve a configuration value from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("environment variable `{key}` is not set")]
    #[diagnostic(help("export {key}=<value> before running the test"))]
    Missing { key: String },

    #[error("environment variable `{key}` has non-integer value {value:?}")]
    #[diagnostic(help("{key} must start with a base-10 integer, e.g. {key}=3"))]
    NotAnInteger { key: String, value: String },
}

/// Errors surfaced by the demo program before any check runs.
#[cfg(feature = "demo")]
#[derive(Debug, Error, Diagnostic)]
pub enum DemoError {
    #[error("exit code {0} is reserved for assertion failures")]
    #[diagnostic(help("pick any code other than 1"))]
    ReservedExitCode(i32),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
