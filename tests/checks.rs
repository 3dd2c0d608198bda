//! Library-level tests for the check constructs.
//!
//! Failing checks end the process, so failure formatting is exercised through
//! a `Reporter` with an in-memory environment and sink; the `t*!` macros are
//! exercised only with passing operands.

use std::cell::Cell;
use std::ffi::c_long;

use testme::check::{self, Comparison};
use testme::config::SLEEP_VAR;
use testme::render::{Int, LongLong, Pointer, Size, Unsigned};
use testme::report::NullSink;
use testme::*;

fn bump(counter: &Cell<i32>) -> i32 {
    counter.set(counter.get() + 1);
    counter.get()
}

fn capture(results: &[CheckResult]) -> (OutputBuffer, Vec<Option<Disposition>>) {
    let mut reporter = Reporter::new(MapEnv::new(), OutputBuffer::new());
    let decisions = results.iter().map(|r| reporter.report(r)).collect();
    let (_, sink) = reporter.into_parts();
    (sink, decisions)
}

#[cfg(test)]
mod single_evaluation_tests {
    use super::*;

    #[test]
    fn test_integer_operands_evaluated_once() {
        let counter = Cell::new(0);
        teqi!(bump(&counter), 1);
        assert_eq!(counter.get(), 1);
        tgtei!(bump(&counter), 2, "value {} checked", counter.get());
        assert_eq!(counter.get(), 2);
        tneqi!(bump(&counter), bump(&counter));
        assert_eq!(counter.get(), 4);
    }

    #[test]
    fn test_string_operands_evaluated_once() {
        let counter = Cell::new(0);
        let make = |s: &'static str| {
            bump(&counter);
            s.to_string()
        };
        tmatch!(make("abc"), make("abc"));
        tcontains!(make("hello world"), make("world"));
        assert_eq!(counter.get(), 4);
    }

    #[test]
    fn test_boolean_and_null_operands_evaluated_once() {
        let counter = Cell::new(0);
        ttrue!(bump(&counter) == 1);
        tfalse!(bump(&counter) == 0);
        let value = 5;
        tnotnull!({
            bump(&counter);
            &value
        });
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_pointer_operands_evaluated_once() {
        let counter = Cell::new(0);
        let value = 9;
        let addressed = || {
            bump(&counter);
            &value
        };
        teqp!(addressed(), addressed());
        tneqp!(addressed(), Address::NULL, "checked {} times", counter.get());
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_string_operands_are_borrowed() {
        let name = String::from("abc");
        let result = Some(String::from("status: ok"));
        tmatch!(name, "abc");
        tcontains!(result, "ok");
        tmatch!(result, Some("status: ok"));
        assert_eq!(name.len(), 3);
        assert_eq!(result.as_deref(), Some("status: ok"));
    }
}

#[cfg(test)]
mod construct_tests {
    use super::*;

    #[test]
    fn test_passing_constructs_across_categories() {
        let long: c_long = 1_234_567;
        let bytes = vec![0u8; 16];
        let value = 7;
        let owned = String::from("needle in a haystack");

        teql!(long, 1_234_567);
        teqll!(9_876_543_210, 9_876_543_210);
        teqz!(bytes.len(), 16, "buffer of {} bytes", 16);
        tequ!(0xFFu32, 255);
        teqp!(&value, &value);
        tneqp!(&value, Address::NULL);
        tnull!(None::<&i32>);
        tcontains!(&owned, "needle");
        tcontains!(Some(owned.as_str()), Some("hay"));
        tmatch!(None::<String>, None::<&str>);
        ttrue!(Some(3));
        tfalse!(0u8);
        tltez!(bytes.len(), 16,);
        teq!(1, 1);
        tassert!(true);
    }

    #[test]
    fn test_sum_check_example() {
        let (sink, decisions) = capture(&[check::compare::<Int>(
            Comparison::Eq,
            tloc!(),
            2 + 3,
            5,
            Some("sum check".into()),
        )]);
        assert_eq!(decisions, vec![None]);
        assert_eq!(sink.out, "✓ sum check\n");
        assert!(sink.err.is_empty());
    }

    #[test]
    fn test_failed_sum_block() {
        let here = Location::new("tests/sum.rs", 3);
        let (sink, decisions) = capture(&[check::compare::<Int>(
            Comparison::Eq,
            here,
            2 + 2,
            5,
            None,
        )]);
        assert_eq!(decisions, vec![Some(Disposition::Exit(1))]);
        assert!(sink.out.is_empty());
        assert_eq!(
            sink.err,
            "✗ Test failed at tests/sum.rs@3\nExpected: 5\nReceived: 4\n"
        );
    }

    #[test]
    fn test_null_strings_render_null_token() {
        let here = Location::new("t.rs", 1);
        let (sink, _) = capture(&[check::exact_match(here, Some("a"), None, None)]);
        assert_eq!(sink.err_lines()[1], "Expected: (NULL)");
        assert_eq!(sink.err_lines()[2], "Received: a");
    }

    #[test]
    fn test_contains_reports_haystack_and_needle() {
        let here = Location::new("t.rs", 2);
        let (sink, _) = capture(&[check::contains(
            here,
            Some("Hello World"),
            Some("Cruel"),
            Some("Message for the cruel world".into()),
        )]);
        assert_eq!(
            sink.err_lines(),
            vec![
                "✗ Test failed at t.rs@2: Message for the cruel world",
                "Expected: Cruel",
                "Received: Hello World",
            ]
        );
    }

    #[test]
    fn test_each_pass_is_one_line_each_fail_three() {
        let here = Location::new("t.rs", 9);
        let results = [
            check::compare::<Size>(Comparison::Lt, here, 1, 2, None),
            check::compare::<Unsigned>(Comparison::Gt, here, 1, 2, None),
            check::compare::<LongLong>(Comparison::Ne, here, 3, 4, None),
            check::truth(here, false, true, None),
            check::fail(here, Some("unreachable".into())),
        ];
        let (sink, decisions) = capture(&results);
        assert_eq!(sink.out_lines().len(), 2);
        assert_eq!(sink.err_lines().len(), 9);
        assert_eq!(decisions.iter().filter(|d| d.is_some()).count(), 3);
        for block in sink.err_lines().chunks(3) {
            assert!(block[0].starts_with("✗ "));
            assert!(block[1].starts_with("Expected: "));
            assert!(block[2].starts_with("Received: "));
        }
    }

    #[test]
    fn test_pointer_rendering_in_reports() {
        let value = 1;
        let here = Location::new("t.rs", 4);
        let r = check::compare::<Pointer>(
            Comparison::Eq,
            here,
            (&value).address(),
            Address::NULL,
            None,
        );
        assert!(!r.outcome);
        assert_eq!(r.expected.as_deref(), Some("0x0"));
        assert!(r.received.as_deref().unwrap_or_default().starts_with("0x"));
    }

    #[test]
    fn test_sleep_flag_is_reread_for_each_failure() {
        let failure = check::fail(Location::new("t.rs", 5), None);
        let mut reporter = Reporter::new(MapEnv::new().with(SLEEP_VAR, "1"), NullSink);
        assert!(matches!(
            reporter.report(&failure),
            Some(Disposition::Suspend(_))
        ));
        reporter.env_mut().remove(SLEEP_VAR);
        assert_eq!(reporter.report(&failure), Some(Disposition::Exit(1)));
    }
}

#[cfg(test)]
mod config_accessor_tests {
    use super::*;

    // Variable names are unique to this module so parallel tests never race.
    #[test]
    fn test_process_accessors_read_live_environment() {
        let key = "TESTME_CHECKS_INT";
        std::env::remove_var(key);
        assert_eq!(tgeti(key, 41), 41);
        std::env::set_var(key, "7");
        assert_eq!(tgeti(key, 41), 7);
        assert!(thas(key));
        std::env::set_var(key, "not a number");
        assert_eq!(tgeti(key, 41), 0);
        assert!(!thas(key));
        std::env::remove_var(key);
    }

    #[test]
    fn test_process_string_accessor() {
        let key = "TESTME_CHECKS_STR";
        std::env::remove_var(key);
        assert_eq!(tget(key, "fallback"), "fallback");
        std::env::set_var(key, "set");
        assert_eq!(tget(key, "fallback"), "set");
        std::env::remove_var(key);
    }
}
