//! Report formatting and routing.
//!
//! A passing check becomes one `✓` line on stdout; a failing check becomes a
//! `✗` line followed by `Expected:` and `Received:` lines on stderr. Both are
//! flushed immediately so they interleave in real time with captured logs.
//! That textual shape is what downstream log scrapers depend on.

use std::fmt;
use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::{Environment, ProcessEnv, NO_COLOR_VAR};
use crate::disposition::Disposition;
use crate::location::Location;

/// Upper bound, in bytes, for the message line and for each value line.
pub const MAX_BUFFER: usize = 4096;

/// Substituted when an expected or received text is absent.
pub const NULL_TEXT: &str = "(NULL)";

// ============================================================================
// CHECK RESULTS
// ============================================================================

/// The outcome of one check, consumed immediately by a [`Reporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub outcome: bool,
    pub location: Location,
    pub expected: Option<String>,
    pub received: Option<String>,
    pub message: Option<String>,
}

impl CheckResult {
    pub fn new(
        outcome: bool,
        location: Location,
        expected: Option<String>,
        received: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            outcome,
            location,
            expected,
            received,
            message,
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome
    }

    /// The custom message, if one was given and is non-empty.
    fn custom_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// The text following the glyph on the first line.
    ///
    /// A custom message passes through verbatim on success and is prefixed
    /// with the failure location otherwise.
    pub fn headline(&self) -> String {
        let line = match (self.outcome, self.custom_message()) {
            (true, Some(msg)) => msg.to_string(),
            (true, None) => format!("Test passed at {}", self.location),
            (false, Some(msg)) => format!("Test failed at {}: {}", self.location, msg),
            (false, None) => format!("Test failed at {}", self.location),
        };
        truncate_bounded(&line, MAX_BUFFER).to_string()
    }
}

/// Cuts `text` to at most `max` bytes without splitting a character.
pub fn truncate_bounded(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn value_text(value: Option<&str>) -> &str {
    truncate_bounded(value.unwrap_or(NULL_TEXT), MAX_BUFFER)
}

/// Body of the stdout line for a passing check (after the glyph).
pub fn format_pass(result: &CheckResult) -> String {
    format!("{}\n", result.headline())
}

/// Body of the stderr block for a failing check (after the glyph).
pub fn format_fail(result: &CheckResult) -> String {
    format!(
        "{}\nExpected: {}\nReceived: {}\n",
        result.headline(),
        value_text(result.expected.as_deref()),
        value_text(result.received.as_deref()),
    )
}

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// The two output streams a report can go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// Leading marker of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Pass,
    Fail,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Pass => "✓",
            Glyph::Fail => "✗",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Pass => Color::Green,
            Glyph::Fail => Color::Red,
        }
    }
}

/// Destination for report text.
pub trait OutputSink {
    /// Writes `glyph`, a space, then `body`, and flushes.
    fn emit(&mut self, stream: Stream, glyph: Glyph, body: &str);

    /// Writes free-form text and flushes.
    fn write(&mut self, stream: Stream, text: &str);
}

/// Whether glyphs are colored on each stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportStyle {
    pub color_out: bool,
    pub color_err: bool,
}

impl ReportStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    /// Colors only terminals, and never when `NO_COLOR` is set, so captured
    /// output always starts with the bare glyph.
    pub fn detect(env: &dyn Environment) -> Self {
        let allowed = !env.is_set(NO_COLOR_VAR);
        Self {
            color_out: allowed && atty::is(atty::Stream::Stdout),
            color_err: allowed && atty::is(atty::Stream::Stderr),
        }
    }

    fn choice(self, stream: Stream) -> ColorChoice {
        let colored = match stream {
            Stream::Out => self.color_out,
            Stream::Err => self.color_err,
        };
        if colored {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

/// StdioSink: writes to the real stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioSink {
    style: ReportStyle,
}

impl StdioSink {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    fn open(&self, stream: Stream) -> StandardStream {
        let choice = self.style.choice(stream);
        match stream {
            Stream::Out => StandardStream::stdout(choice),
            Stream::Err => StandardStream::stderr(choice),
        }
    }
}

impl OutputSink for StdioSink {
    fn emit(&mut self, stream: Stream, glyph: Glyph, body: &str) {
        let mut out = self.open(stream);
        let _ = out.set_color(ColorSpec::new().set_fg(Some(glyph.color())).set_bold(true));
        let _ = write!(out, "{}", glyph.symbol());
        let _ = out.reset();
        let _ = write!(out, " {}", body);
        let _ = out.flush();
    }

    fn write(&mut self, stream: Stream, text: &str) {
        let mut out = self.open(stream);
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

/// OutputBuffer: collects both streams into strings for testing.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    pub out: String,
    pub err: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out_lines(&self) -> Vec<&str> {
        self.out.lines().collect()
    }

    pub fn err_lines(&self) -> Vec<&str> {
        self.err.lines().collect()
    }

    fn target(&mut self, stream: Stream) -> &mut String {
        match stream {
            Stream::Out => &mut self.out,
            Stream::Err => &mut self.err,
        }
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, stream: Stream, glyph: Glyph, body: &str) {
        let target = self.target(stream);
        target.push_str(glyph.symbol());
        target.push(' ');
        target.push_str(body);
    }

    fn write(&mut self, stream: Stream, text: &str) {
        self.target(stream).push_str(text);
    }
}

/// A null output sink for running checks without output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _stream: Stream, _glyph: Glyph, _body: &str) {}
    fn write(&mut self, _stream: Stream, _text: &str) {}
}

// ============================================================================
// REPORTER
// ============================================================================

/// Routes check results to a sink and decides the fate of failures.
///
/// The environment is consulted afresh for every failure.
pub struct Reporter<E: Environment, S: OutputSink> {
    env: E,
    sink: S,
}

impl<E: Environment, S: OutputSink> Reporter<E, S> {
    pub fn new(env: E, sink: S) -> Self {
        Self { env, sink }
    }

    /// Emits `result` and, for a failure, returns the disposition to apply.
    pub fn report(&mut self, result: &CheckResult) -> Option<Disposition> {
        if result.passed() {
            self.sink.emit(Stream::Out, Glyph::Pass, &format_pass(result));
            None
        } else {
            self.sink.emit(Stream::Err, Glyph::Fail, &format_fail(result));
            Some(Disposition::decide(&self.env))
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_parts(self) -> (E, S) {
        (self.env, self.sink)
    }
}

/// Reports `result` on the process streams and applies the disposition.
///
/// On failure this either exits the process with status 1 or blocks for the
/// debugger interval, depending on `TESTME_SLEEP` at the time of the call.
pub fn treport(result: CheckResult) {
    let style = ReportStyle::detect(&ProcessEnv);
    let mut reporter = Reporter::new(ProcessEnv, StdioSink::new(style));
    if let Some(disposition) = reporter.report(&result) {
        disposition.apply();
    }
}

/// Writes author output to stdout and flushes; backs `tinfo!` and friends.
pub fn twrite_fmt(args: fmt::Arguments<'_>) {
    let text = args.to_string();
    StdioSink::default().write(Stream::Out, &text);
}
