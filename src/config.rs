//! Environment configuration readers.
//!
//! Every accessor performs a fresh lookup; nothing is cached, so a test matrix
//! that changes `TESTME_DEPTH` between runs (or mid-run) is seen immediately.
//!
//! Two forms are provided:
//!
//! - free functions (`tget`, `tgeti`, `thas`, `tdepth`, `tverbose`) that read
//!   the live process environment, for test authors;
//! - `*_in` forms taking an [`Environment`], used by the engine itself and by
//!   tests that need a deterministic environment ([`MapEnv`]).

use std::collections::HashMap;

use crate::error::ConfigError;

/// Test-defined thoroughness scale.
pub const DEPTH_VAR: &str = "TESTME_DEPTH";
/// Presence switches failure disposition from exit to suspend-for-debugger.
pub const SLEEP_VAR: &str = "TESTME_SLEEP";
/// Read by test authors only, to toggle extra diagnostic printing.
pub const VERBOSE_VAR: &str = "TESTME_VERBOSE";
/// Disables glyph coloring on terminals.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Source of string-keyed configuration values.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;

    /// Presence-only check; the value is not inspected.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are still "set"; keep them visible lossily.
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// In-memory environment for deterministic tests of the engine.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parses a base-10 integer prefix with C `atoi` leniency.
///
/// Leading whitespace and one sign are skipped, digits are consumed up to the
/// first non-digit, and out-of-range values saturate at the `i32` bounds.
/// Returns `None` when no digit follows the optional sign.
pub fn parse_leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);

    let mut seen = false;
    let mut acc: i64 = 0;
    for d in digits {
        seen = true;
        acc = acc.saturating_mul(10).saturating_add(i64::from(d - b'0'));
        if acc > i64::from(i32::MAX) + 1 {
            acc = i64::from(i32::MAX) + 1;
        }
    }
    if !seen {
        return None;
    }
    let signed = if negative { -acc } else { acc };
    Some(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Parses `value` (read from `key`) as an integer.
pub fn parse_int(key: &str, value: &str) -> Result<i32, ConfigError> {
    parse_leading_int(value).ok_or_else(|| ConfigError::NotAnInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Strict integer lookup: distinguishes an unset variable from a bad value.
pub fn try_get_int_in(env: &dyn Environment, key: &str) -> Result<i32, ConfigError> {
    let value = env.var(key).ok_or_else(|| ConfigError::Missing {
        key: key.to_string(),
    })?;
    parse_int(key, &value)
}

// ============================================================================
// ACCESSORS
// ============================================================================

/// String value of `key`, or `default` if unset.
pub fn get_in(env: &dyn Environment, key: &str, default: &str) -> String {
    env.var(key).unwrap_or_else(|| default.to_string())
}

/// Integer value of `key`, or `default` if unset.
///
/// A set but non-numeric value reads as `0`, the same as `atoi`.
pub fn get_int_in(env: &dyn Environment, key: &str, default: i32) -> i32 {
    match try_get_int_in(env, key) {
        Ok(v) => v,
        Err(ConfigError::Missing { .. }) => default,
        Err(ConfigError::NotAnInteger { .. }) => 0,
    }
}

/// True if `key` holds a nonzero integer.
pub fn has_in(env: &dyn Environment, key: &str) -> bool {
    get_int_in(env, key, 0) != 0
}

pub fn depth_in(env: &dyn Environment) -> i32 {
    get_int_in(env, DEPTH_VAR, 0)
}

pub fn verbose_in(env: &dyn Environment) -> bool {
    has_in(env, VERBOSE_VAR)
}

/// Value of environment variable `key`, or `default` if unset.
pub fn tget(key: &str, default: &str) -> String {
    get_in(&ProcessEnv, key, default)
}

/// Environment variable `key` as an integer, or `default` if unset.
pub fn tgeti(key: &str, default: i32) -> i32 {
    get_int_in(&ProcessEnv, key, default)
}

/// True if environment variable `key` is a nonzero integer.
pub fn thas(key: &str) -> bool {
    has_in(&ProcessEnv, key)
}

/// The externally supplied test depth (`TESTME_DEPTH`), defaulting to 0.
///
/// Tests use it to scale their own thoroughness: iteration counts, recursion
/// depth, payload sizes.
pub fn tdepth() -> i32 {
    depth_in(&ProcessEnv)
}

/// True if `TESTME_VERBOSE` is a nonzero integer.
pub fn tverbose() -> bool {
    verbose_in(&ProcessEnv)
}
