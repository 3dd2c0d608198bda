//! TestMe: an embeddable assertion-and-reporting engine for standalone test
//! programs.
//!
//! A test program is an ordinary binary with a `main`. It declares checks
//! with the `t*!` macros; each check evaluates its operands once, prints a
//! `✓` line on stdout when it holds, and otherwise prints a `✗` block on
//! stderr and exits with status 1 (or, with `TESTME_SLEEP` set, suspends so a
//! debugger can attach).
//!
//! ```rust,no_run
//! use testme::*;
//!
//! fn main() {
//!     teqi!(2 + 3, 5, "sum check");
//!     tcontains!("hello world", "world");
//!     for i in 0..tdepth() {
//!         tgtei!(i, 0);
//!     }
//! }
//! ```

pub mod check;
#[cfg(feature = "demo")]
pub mod cli;
pub mod config;
pub mod disposition;
pub mod error;
pub mod location;
mod macros;
pub mod render;
pub mod report;

pub use crate::config::{tdepth, tget, tgeti, thas, tverbose, Environment, MapEnv, ProcessEnv};
pub use crate::disposition::Disposition;
pub use crate::error::ConfigError;
pub use crate::location::Location;
pub use crate::render::{Address, AsAddress, StrOperand, Truthy};
pub use crate::report::{CheckResult, OutputBuffer, OutputSink, Reporter};
