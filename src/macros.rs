//! Call-site check constructs.
//!
//! Every construct binds each operand to a local exactly once before the
//! comparison, so an operand with side effects runs once no matter how often
//! its value is compared or rendered. All constructs accept an optional
//! trailing `format!`-style message:
//!
//! ```rust,no_run
//! use testme::*;
//!
//! teqi!(2 + 3, 5);
//! teqi!(2 + 3, 5, "sum check");
//! tcontains!("hello world", "world", "greeting should mention {}", "world");
//! ```
//!
//! The first operand is the value under test ("received"), the second the
//! reference value ("expected"). A failing check exits the process with
//! status 1 unless `TESTME_SLEEP` is set.

// ============================================================================
// INTERNAL EXPANSION HELPERS
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __tmsg {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::std::format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tcompare {
    (@go $cat:ident, $op:ident, $a:expr, $b:expr, $msg:expr) => {{
        let received: <$crate::render::$cat as $crate::render::Category>::Value = $a;
        let expected: <$crate::render::$cat as $crate::render::Category>::Value = $b;
        $crate::report::treport($crate::check::compare::<$crate::render::$cat>(
            $crate::check::Comparison::$op,
            $crate::tloc!(),
            received,
            expected,
            $msg,
        ));
    }};
    ($cat:ident, $op:ident, $a:expr, $b:expr $(,)?) => {
        $crate::__tcompare!(@go $cat, $op, $a, $b, $crate::__tmsg!())
    };
    ($cat:ident, $op:ident, $a:expr, $b:expr, $($msg:tt)+) => {
        $crate::__tcompare!(@go $cat, $op, $a, $b, $crate::__tmsg!($($msg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tcompare_ptr {
    (@go $op:ident, $a:expr, $b:expr, $msg:expr) => {{
        let received = $crate::render::AsAddress::address(&$a);
        let expected = $crate::render::AsAddress::address(&$b);
        $crate::report::treport($crate::check::compare::<$crate::render::Pointer>(
            $crate::check::Comparison::$op,
            $crate::tloc!(),
            received,
            expected,
            $msg,
        ));
    }};
    ($op:ident, $a:expr, $b:expr $(,)?) => {
        $crate::__tcompare_ptr!(@go $op, $a, $b, $crate::__tmsg!())
    };
    ($op:ident, $a:expr, $b:expr, $($msg:tt)+) => {
        $crate::__tcompare_ptr!(@go $op, $a, $b, $crate::__tmsg!($($msg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tstr {
    (@go $check:ident, $a:expr, $b:expr, $msg:expr) => {{
        let first = &$a;
        let second = &$b;
        $crate::report::treport($crate::check::$check(
            $crate::tloc!(),
            $crate::render::StrOperand::as_opt_str(&first),
            $crate::render::StrOperand::as_opt_str(&second),
            $msg,
        ));
    }};
    ($check:ident, $a:expr, $b:expr $(,)?) => {
        $crate::__tstr!(@go $check, $a, $b, $crate::__tmsg!())
    };
    ($check:ident, $a:expr, $b:expr, $($msg:tt)+) => {
        $crate::__tstr!(@go $check, $a, $b, $crate::__tmsg!($($msg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ttruth {
    (@go $want:literal, $e:expr, $msg:expr) => {{
        let value: bool = $crate::render::Truthy::truthy(&$e);
        $crate::report::treport($crate::check::truth($crate::tloc!(), value, $want, $msg));
    }};
    ($want:literal, $e:expr $(,)?) => {
        $crate::__ttruth!(@go $want, $e, $crate::__tmsg!())
    };
    ($want:literal, $e:expr, $($msg:tt)+) => {
        $crate::__ttruth!(@go $want, $e, $crate::__tmsg!($($msg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tnull {
    (@go $want:literal, $p:expr, $msg:expr) => {{
        let address = $crate::render::AsAddress::address(&$p);
        $crate::report::treport($crate::check::null($crate::tloc!(), address, $want, $msg));
    }};
    ($want:literal, $p:expr $(,)?) => {
        $crate::__tnull!(@go $want, $p, $crate::__tmsg!())
    };
    ($want:literal, $p:expr, $($msg:tt)+) => {
        $crate::__tnull!(@go $want, $p, $crate::__tmsg!($($msg)+))
    };
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Checks two `i32` values are equal.
///
/// Example: `teqi!(count, 5, "Should have processed 5 items");`
#[macro_export]
macro_rules! teqi {
    ($($args:tt)+) => { $crate::__tcompare!(Int, Eq, $($args)+) };
}

/// Checks two `i32` values differ.
#[macro_export]
macro_rules! tneqi {
    ($($args:tt)+) => { $crate::__tcompare!(Int, Ne, $($args)+) };
}

/// Checks two `c_long` values are equal.
#[macro_export]
macro_rules! teql {
    ($($args:tt)+) => { $crate::__tcompare!(Long, Eq, $($args)+) };
}

/// Checks two `c_long` values differ.
#[macro_export]
macro_rules! tneql {
    ($($args:tt)+) => { $crate::__tcompare!(Long, Ne, $($args)+) };
}

/// Checks two `c_longlong` values are equal.
#[macro_export]
macro_rules! teqll {
    ($($args:tt)+) => { $crate::__tcompare!(LongLong, Eq, $($args)+) };
}

/// Checks two `c_longlong` values differ.
#[macro_export]
macro_rules! tneqll {
    ($($args:tt)+) => { $crate::__tcompare!(LongLong, Ne, $($args)+) };
}

/// Checks two sizes are equal.
///
/// Example: `teqz!(buf.len(), 1024, "Length should match");`
#[macro_export]
macro_rules! teqz {
    ($($args:tt)+) => { $crate::__tcompare!(Size, Eq, $($args)+) };
}

/// Checks two sizes differ.
#[macro_export]
macro_rules! tneqz {
    ($($args:tt)+) => { $crate::__tcompare!(Size, Ne, $($args)+) };
}

/// Checks two `u32` values are equal.
#[macro_export]
macro_rules! tequ {
    ($($args:tt)+) => { $crate::__tcompare!(Unsigned, Eq, $($args)+) };
}

/// Checks two `u32` values differ.
#[macro_export]
macro_rules! tnequ {
    ($($args:tt)+) => { $crate::__tcompare!(Unsigned, Ne, $($args)+) };
}

/// Checks two addresses are identical.
///
/// Operands may be raw pointers, references, `Option<&T>`, `NonNull<T>` or
/// an [`Address`](crate::Address).
#[macro_export]
macro_rules! teqp {
    ($($args:tt)+) => { $crate::__tcompare_ptr!(Eq, $($args)+) };
}

/// Checks two addresses differ.
#[macro_export]
macro_rules! tneqp {
    ($($args:tt)+) => { $crate::__tcompare_ptr!(Ne, $($args)+) };
}

// ============================================================================
// ORDERING
// ============================================================================

/// Checks `a > b` for `i32`.
#[macro_export]
macro_rules! tgti {
    ($($args:tt)+) => { $crate::__tcompare!(Int, Gt, $($args)+) };
}

/// Checks `a > b` for `c_long`.
#[macro_export]
macro_rules! tgtl {
    ($($args:tt)+) => { $crate::__tcompare!(Long, Gt, $($args)+) };
}

/// Checks `a > b` for `c_longlong`.
#[macro_export]
macro_rules! tgtll {
    ($($args:tt)+) => { $crate::__tcompare!(LongLong, Gt, $($args)+) };
}

/// Checks `a > b` for sizes.
#[macro_export]
macro_rules! tgtz {
    ($($args:tt)+) => { $crate::__tcompare!(Size, Gt, $($args)+) };
}

/// Checks `a > b` for `u32`.
#[macro_export]
macro_rules! tgtu {
    ($($args:tt)+) => { $crate::__tcompare!(Unsigned, Gt, $($args)+) };
}

/// Checks `a >= b` for `i32`.
#[macro_export]
macro_rules! tgtei {
    ($($args:tt)+) => { $crate::__tcompare!(Int, Ge, $($args)+) };
}

/// Checks `a >= b` for `c_long`.
#[macro_export]
macro_rules! tgtel {
    ($($args:tt)+) => { $crate::__tcompare!(Long, Ge, $($args)+) };
}

/// Checks `a >= b` for `c_longlong`.
#[macro_export]
macro_rules! tgtell {
    ($($args:tt)+) => { $crate::__tcompare!(LongLong, Ge, $($args)+) };
}

/// Checks `a >= b` for sizes.
#[macro_export]
macro_rules! tgtez {
    ($($args:tt)+) => { $crate::__tcompare!(Size, Ge, $($args)+) };
}

/// Checks `a >= b` for `u32`.
#[macro_export]
macro_rules! tgteu {
    ($($args:tt)+) => { $crate::__tcompare!(Unsigned, Ge, $($args)+) };
}

/// Checks `a < b` for `i32`.
#[macro_export]
macro_rules! tlti {
    ($($args:tt)+) => { $crate::__tcompare!(Int, Lt, $($args)+) };
}

/// Checks `a < b` for `c_long`.
#[macro_export]
macro_rules! tltl {
    ($($args:tt)+) => { $crate::__tcompare!(Long, Lt, $($args)+) };
}

/// Checks `a < b` for `c_longlong`.
#[macro_export]
macro_rules! tltll {
    ($($args:tt)+) => { $crate::__tcompare!(LongLong, Lt, $($args)+) };
}

/// Checks `a < b` for sizes.
#[macro_export]
macro_rules! tltz {
    ($($args:tt)+) => { $crate::__tcompare!(Size, Lt, $($args)+) };
}

/// Checks `a < b` for `u32`.
#[macro_export]
macro_rules! tltu {
    ($($args:tt)+) => { $crate::__tcompare!(Unsigned, Lt, $($args)+) };
}

/// Checks `a <= b` for `i32`.
#[macro_export]
macro_rules! tltei {
    ($($args:tt)+) => { $crate::__tcompare!(Int, Le, $($args)+) };
}

/// Checks `a <= b` for `c_long`.
#[macro_export]
macro_rules! tltel {
    ($($args:tt)+) => { $crate::__tcompare!(Long, Le, $($args)+) };
}

/// Checks `a <= b` for `c_longlong`.
#[macro_export]
macro_rules! tltell {
    ($($args:tt)+) => { $crate::__tcompare!(LongLong, Le, $($args)+) };
}

/// Checks `a <= b` for sizes.
#[macro_export]
macro_rules! tltez {
    ($($args:tt)+) => { $crate::__tcompare!(Size, Le, $($args)+) };
}

/// Checks `a <= b` for `u32`.
#[macro_export]
macro_rules! tlteu {
    ($($args:tt)+) => { $crate::__tcompare!(Unsigned, Le, $($args)+) };
}

// ============================================================================
// STRINGS, NULLS, BOOLEANS
// ============================================================================

/// Checks two strings match exactly. Two nulls (`None`) match; a null never
/// matches a present string.
///
/// Example: `tmatch!(name, "expected", "Name should match");`
#[macro_export]
macro_rules! tmatch {
    ($($args:tt)+) => { $crate::__tstr!(exact_match, $($args)+) };
}

/// Checks `haystack` contains `needle`. Fails if either is null.
///
/// Example: `tcontains!(result, "success", "API call should succeed");`
#[macro_export]
macro_rules! tcontains {
    ($($args:tt)+) => { $crate::__tstr!(contains, $($args)+) };
}

/// Checks an address is null.
#[macro_export]
macro_rules! tnull {
    ($($args:tt)+) => { $crate::__tnull!(true, $($args)+) };
}

/// Checks an address is not null.
#[macro_export]
macro_rules! tnotnull {
    ($($args:tt)+) => { $crate::__tnull!(false, $($args)+) };
}

/// Checks an expression is truthy.
///
/// Example: `ttrue!(connection.is_active(), "Connection should be active");`
#[macro_export]
macro_rules! ttrue {
    ($($args:tt)+) => { $crate::__ttruth!(true, $($args)+) };
}

/// Checks an expression is falsy.
#[macro_export]
macro_rules! tfalse {
    ($($args:tt)+) => { $crate::__ttruth!(false, $($args)+) };
}

/// Fails unconditionally, e.g. on a code path that must not be reached.
#[macro_export]
macro_rules! tfail {
    ($($msg:tt)*) => {
        $crate::report::treport($crate::check::fail($crate::tloc!(), $crate::__tmsg!($($msg)*)))
    };
}

// ============================================================================
// LEGACY ALIASES
// ============================================================================

/// Older name for [`teqi!`].
#[macro_export]
macro_rules! teq {
    ($($args:tt)+) => { $crate::teqi!($($args)+) };
}

/// Older name for [`tneqi!`].
#[macro_export]
macro_rules! tneq {
    ($($args:tt)+) => { $crate::tneqi!($($args)+) };
}

/// Older name for [`ttrue!`].
#[macro_export]
macro_rules! tassert {
    ($($args:tt)+) => { $crate::ttrue!($($args)+) };
}

// ============================================================================
// AUTHOR OUTPUT
// ============================================================================

/// Prints informational text to stdout (no newline added) and flushes.
#[macro_export]
macro_rules! tinfo {
    ($($arg:tt)*) => { $crate::report::twrite_fmt(::std::format_args!($($arg)*)) };
}

/// Prints debug text to stdout (no newline added) and flushes.
#[macro_export]
macro_rules! tdebug {
    ($($arg:tt)*) => { $crate::report::twrite_fmt(::std::format_args!($($arg)*)) };
}

/// Prints a note about skipped conditions to stdout and flushes.
#[macro_export]
macro_rules! tskip {
    ($($arg:tt)*) => { $crate::report::twrite_fmt(::std::format_args!($($arg)*)) };
}

/// Writes raw text to stdout and flushes.
#[macro_export]
macro_rules! twrite {
    ($($arg:tt)*) => { $crate::report::twrite_fmt(::std::format_args!($($arg)*)) };
}
