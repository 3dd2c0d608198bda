//! Defines the command-line arguments and subcommands for the demo program.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "testme-demo",
    version,
    about = "A standalone test program exercising the TestMe check constructs."
)]
pub struct DemoArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available demo scenarios.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every typed check construct with passing operands.
    Types,
    /// Run boolean, containment and match checks with and without messages.
    Api {
        /// Follow the passing checks with a failing one.
        #[arg(long)]
        expect_fail: bool,
    },
    /// Check a sum; `--broken` checks a wrong one and then prints `unreachable`.
    Sum {
        #[arg(long)]
        broken: bool,
    },
    /// Reach a branch guarded by `tfail!`, or with `--null` a failing `tnull!`.
    Fail {
        #[arg(long)]
        null: bool,
    },
    /// Run TESTME_DEPTH passing checks.
    Depth {
        /// Fail with a diagnostic unless TESTME_DEPTH holds an integer.
        #[arg(long)]
        require: bool,
    },
    /// Run a few passing checks, then exit early with an author-chosen code.
    Exit {
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        code: i32,
    },
}
