//! The demo test program.
//!
//! Each subcommand is a small standalone test written against the public
//! check constructs, so the engine can be driven end to end in a real process
//! (exit codes, stream routing, suspend-on-failure).

use std::ffi::{c_long, c_longlong};
use std::{process, ptr};

use clap::Parser;

use crate::cli::args::{Command, DemoArgs};
use crate::config::{self, tdepth, tverbose, ProcessEnv, DEPTH_VAR};
use crate::disposition::FAILURE_EXIT_CODE;
use crate::error::DemoError;
use crate::render::Address;

pub mod args;

/// Exit status for argument or setup errors; distinct from check failures.
pub const USAGE_EXIT_CODE: i32 = 2;

/// The main entry point for the demo program.
pub fn run() {
    let args = DemoArgs::parse();

    if let Err(report) = dispatch(args.command) {
        eprintln!("{:?}", report);
        process::exit(USAGE_EXIT_CODE);
    }
}

fn dispatch(command: Command) -> miette::Result<()> {
    match command {
        Command::Types => run_types(),
        Command::Api { expect_fail } => run_api(expect_fail),
        Command::Sum { broken } => run_sum(broken),
        Command::Fail { null } => run_fail(null),
        Command::Depth { require } => run_depth(require)?,
        Command::Exit { code } => run_exit(code)?,
    }
    Ok(())
}

fn run_types() {
    let i_val: i32 = 42;
    let l_val: c_long = 1_234_567;
    let ll_val: c_longlong = 9_876_543_210;
    let z_val: usize = 1024;
    let u_val: u32 = 0xFF;
    let i_ptr: *const i32 = &i_val;
    let null_ptr: *const i32 = ptr::null();

    crate::teqi!(i_val, 42, "Integer equality test");
    crate::tneqi!(i_val, 0, "Integer inequality test");
    crate::teql!(l_val, 1_234_567, "Long equality test");
    crate::tneql!(l_val, 0, "Long inequality test");
    crate::teqll!(ll_val, 9_876_543_210, "Long long equality test");
    crate::tneqll!(ll_val, 0, "Long long inequality test");
    crate::teqz!(z_val, 1024, "Size equality test");
    crate::tneqz!(z_val, 0, "Size inequality test");
    crate::tequ!(u_val, 0xFF, "Unsigned equality test");
    crate::tnequ!(u_val, 0, "Unsigned inequality test");

    crate::teqp!(null_ptr, Address::NULL, "Pointer NULL equality test");
    crate::tneqp!(i_ptr, Address::NULL, "Pointer non-NULL inequality test");
    crate::tnull!(null_ptr, "Pointer should be NULL");
    crate::tnotnull!(i_ptr, "Pointer should not be NULL");

    crate::tgti!(i_val, 0, "Integer greater than test");
    crate::tgtl!(l_val, 1_000_000, "Long greater than test");
    crate::tgtll!(ll_val, 1, "Long long greater than test");
    crate::tgtz!(z_val, 512, "Size greater than test");
    crate::tgtu!(u_val, 0, "Unsigned greater than test");

    crate::tgtei!(i_val, 42, "Integer greater than or equal test");
    crate::tgtel!(l_val, 1_234_567, "Long greater than or equal test");
    crate::tgtell!(ll_val, 9_876_543_210, "Long long greater than or equal test");
    crate::tgtez!(z_val, 1024, "Size greater than or equal test");
    crate::tgteu!(u_val, 0xFF, "Unsigned greater than or equal test");

    crate::tlti!(i_val, 100, "Integer less than test");
    crate::tltl!(l_val, 10_000_000, "Long less than test");
    crate::tltll!(ll_val, 10_000_000_000, "Long long less than test");
    crate::tltz!(z_val, 2048, "Size less than test");
    crate::tltu!(u_val, 0x100, "Unsigned less than test");

    crate::tltei!(i_val, 42, "Integer less than or equal test");
    crate::tltel!(l_val, 1_234_567, "Long less than or equal test");
    crate::tltell!(ll_val, 9_876_543_210, "Long long less than or equal test");
    crate::tltez!(z_val, 1024, "Size less than or equal test");
    crate::tlteu!(u_val, 0xFF, "Unsigned less than or equal test");

    crate::tmatch!("hello", "hello", "String match test");
    crate::tcontains!("hello world", "world", "String contains test");
    crate::ttrue!(1, "True test");
    crate::tfalse!(0, "False test");

    crate::teq!(i_val, 42, "Legacy teq test");
    crate::tneq!(i_val, 0, "Legacy tneq test");
    crate::tassert!(i_val == 42, "Legacy tassert test");

    println!("All checks complete");
}

fn run_api(expect_fail: bool) {
    let v = 3;

    crate::tinfo!("Using the check api ...\n");
    crate::ttrue!(v == 3);
    crate::ttrue!(v == 3, "Should be 3");
    crate::tfalse!(v == 5, "Should not be 5");
    crate::tcontains!("Hello World", "World", "Message for the world");
    crate::tmatch!("World", "World", "Message for the world");
    crate::tmatch!(None::<&str>, None::<&str>, "Two nulls match");
    crate::tnotnull!(&v, "A reference is never null");

    if expect_fail {
        let v = v + 2;
        crate::ttrue!(v == 3, "Should not be 3");
        println!("unreachable");
    }
    println!("All api checks complete");
}

fn run_sum(broken: bool) {
    if broken {
        crate::teqi!(2 + 2, 5);
        println!("unreachable");
    } else {
        crate::teqi!(2 + 3, 5, "sum check");
    }
}

fn run_fail(null: bool) {
    let value = 3;
    crate::tnotnull!(&value, "value is addressable");
    if null {
        crate::tnull!(&value, "a live reference is never null");
    } else {
        crate::tfail!("reached the error branch with {}", value);
    }
    println!("unreachable");
}

fn run_depth(require: bool) -> Result<(), DemoError> {
    let depth = if require {
        config::try_get_int_in(&ProcessEnv, DEPTH_VAR)?
    } else {
        tdepth()
    };

    if tverbose() {
        crate::tdebug!("VERBOSE: running {} iterations\n", depth);
    }
    for i in 0..depth {
        crate::tltei!(i, depth, "iteration {} within depth", i);
    }
    if depth == 0 {
        crate::tskip!("Depth is 0, nothing to scale\n");
    }
    println!("Depth {} complete", depth);
    Ok(())
}

fn run_exit(code: i32) -> Result<(), DemoError> {
    if code == FAILURE_EXIT_CODE {
        return Err(DemoError::ReservedExitCode(code));
    }

    crate::teq!(1, 1, "Basic equality");
    crate::tneq!(1, 2, "Basic inequality");
    crate::ttrue!(1 == 1, "Basic truth");
    crate::tfalse!(1 == 2, "Basic falsehood");
    crate::twrite!("Message before exit\n");

    process::exit(code);
}
