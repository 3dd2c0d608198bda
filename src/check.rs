//! Check evaluation.
//!
//! Each function receives operands that the calling macro has already
//! evaluated and bound, computes the outcome, and renders both sides into a
//! [`CheckResult`]. Nothing here is ever handed an unevaluated expression.

use crate::location::Location;
use crate::render::{render_bool, Address, Category, Pointer};
use crate::report::CheckResult;

/// Binary relation applied as `received <op> expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    pub fn holds<T: PartialOrd>(self, received: &T, expected: &T) -> bool {
        match self {
            Comparison::Eq => received == expected,
            Comparison::Ne => received != expected,
            Comparison::Gt => received > expected,
            Comparison::Ge => received >= expected,
            Comparison::Lt => received < expected,
            Comparison::Le => received <= expected,
        }
    }
}

/// Compares two values of category `C`.
pub fn compare<C: Category>(
    op: Comparison,
    location: Location,
    received: C::Value,
    expected: C::Value,
    message: Option<String>,
) -> CheckResult {
    let outcome = op.holds(&received, &expected);
    CheckResult::new(
        outcome,
        location,
        Some(C::render(expected)),
        Some(C::render(received)),
        message,
    )
}

/// Exact match: both null, or both present and byte-identical.
pub fn exact_match(
    location: Location,
    received: Option<&str>,
    expected: Option<&str>,
    message: Option<String>,
) -> CheckResult {
    let outcome = match (received, expected) {
        (None, None) => true,
        (Some(r), Some(e)) => r.as_bytes() == e.as_bytes(),
        _ => false,
    };
    CheckResult::new(
        outcome,
        location,
        expected.map(String::from),
        received.map(String::from),
        message,
    )
}

/// Containment: both present and `needle` occurs in `haystack`.
pub fn contains(
    location: Location,
    haystack: Option<&str>,
    needle: Option<&str>,
    message: Option<String>,
) -> CheckResult {
    let outcome = matches!((haystack, needle), (Some(h), Some(n)) if h.contains(n));
    CheckResult::new(
        outcome,
        location,
        needle.map(String::from),
        haystack.map(String::from),
        message,
    )
}

/// Boolean check: passes when `value` equals `wanted`.
pub fn truth(location: Location, value: bool, wanted: bool, message: Option<String>) -> CheckResult {
    CheckResult::new(
        value == wanted,
        location,
        Some(render_bool(wanted).to_string()),
        Some(render_bool(value).to_string()),
        message,
    )
}

/// Null check: passes when `address` is null exactly when `want_null` is set.
pub fn null(
    location: Location,
    address: Address,
    want_null: bool,
    message: Option<String>,
) -> CheckResult {
    let expected = if want_null { "null" } else { "non-null" };
    CheckResult::new(
        address.is_null() == want_null,
        location,
        Some(expected.to_string()),
        Some(Pointer::render(address)),
        message,
    )
}

/// Unconditional failure.
pub fn fail(location: Location, message: Option<String>) -> CheckResult {
    CheckResult::new(
        false,
        location,
        Some(String::new()),
        Some("test failed".to_string()),
        message,
    )
}

#[cfg(test)]
mod check_tests {
    use super::*;
    use crate::render::{Int, Size, Unsigned};

    fn here() -> Location {
        Location::new("check.rs", 1)
    }

    #[test]
    fn test_compare_renders_received_and_expected() {
        let r = compare::<Int>(Comparison::Eq, here(), 4, 5, None);
        assert!(!r.outcome);
        assert_eq!(r.expected.as_deref(), Some("5"));
        assert_eq!(r.received.as_deref(), Some("4"));
    }

    #[test]
    fn test_ordering_relations() {
        assert!(compare::<Int>(Comparison::Gt, here(), 3, 2, None).outcome);
        assert!(!compare::<Int>(Comparison::Gt, here(), 2, 2, None).outcome);
        assert!(compare::<Int>(Comparison::Ge, here(), 2, 2, None).outcome);
        assert!(compare::<Size>(Comparison::Lt, here(), 1, 2, None).outcome);
        assert!(compare::<Size>(Comparison::Le, here(), 2, 2, None).outcome);
        assert!(!compare::<Size>(Comparison::Le, here(), 3, 2, None).outcome);
    }

    #[test]
    fn test_unsigned_never_sign_extends() {
        // As a signed value u32::MAX would be -1 < 0.
        assert!(compare::<Unsigned>(Comparison::Gt, here(), u32::MAX, 0, None).outcome);
    }

    #[test]
    fn test_exact_match_null_handling() {
        assert!(exact_match(here(), None, None, None).outcome);
        assert!(exact_match(here(), Some("a"), Some("a"), None).outcome);
        assert!(!exact_match(here(), Some("a"), None, None).outcome);
        assert!(!exact_match(here(), None, Some("a"), None).outcome);
        assert!(!exact_match(here(), Some("a"), Some("b"), None).outcome);
    }

    #[test]
    fn test_contains_null_handling() {
        assert!(contains(here(), Some("hello world"), Some("world"), None).outcome);
        assert!(contains(here(), Some("same"), Some("same"), None).outcome);
        assert!(contains(here(), Some("abc"), Some(""), None).outcome);
        assert!(!contains(here(), None, Some("a"), None).outcome);
        assert!(!contains(here(), Some("a"), None, None).outcome);
        assert!(!contains(here(), Some("Hello World"), Some("Cruel"), None).outcome);
    }

    #[test]
    fn test_truth_reports_actual_value() {
        let r = truth(here(), true, false, None);
        assert!(!r.outcome);
        assert_eq!(r.expected.as_deref(), Some("false"));
        assert_eq!(r.received.as_deref(), Some("true"));
    }

    #[test]
    fn test_null_checks() {
        let value = 1;
        let addr = crate::render::AsAddress::address(&&value);
        assert!(null(here(), Address::NULL, true, None).outcome);
        assert!(!null(here(), addr, true, None).outcome);
        assert!(null(here(), addr, false, None).outcome);
        assert_eq!(
            null(here(), Address::NULL, false, None).received.as_deref(),
            Some("0x0")
        );
    }

    #[test]
    fn test_fail_always_fails() {
        let r = fail(here(), Some("unreachable".into()));
        assert!(!r.outcome);
        assert_eq!(r.received.as_deref(), Some("test failed"));
    }
}
