//! Shared setup for `fem-value` tests.
//!
//! Tests annotated with `#[fem_testhelpers::test]` get a tracing subscriber
//! and colored panic backtraces installed before their body runs, and their
//! log lines are grouped under a span named after the test. The log
//! filter is read from `FEM_LOG` (a `tracing_subscriber` targets string such
//! as `fem_value=debug`); without it everything down to `TRACE` is shown.

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]

pub use fem_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter for tests.
pub const LOG_ENV: &str = "FEM_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

fn log_filter() -> Targets {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

/// Backtrace frames from the test harness and panic machinery.
const NOISE_FRAMES: &[&str] = &[
    "test::run_test",
    "test::__rust_begin_short_backtrace",
    "std::panicking::",
    "std::panic::",
    "core::panicking::",
    "core::ops::function::FnOnce::call_once",
];

fn install_backtrace_printer() {
    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Medium)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| {
                frame
                    .name
                    .as_deref()
                    .is_none_or(|name| !NOISE_FRAMES.iter().any(|p| name.starts_with(p)))
            })
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::Auto,
        )));
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;
    install_backtrace_printer();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(false)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(log_filter())
        .try_init()
        .ok();
});

/// Set up tracing and panic output for a test.
///
/// Safe to call from every test: initialization happens once per process.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

/// Runs [`setup`] and enters a span carrying the test name.
///
/// `#[fem_testhelpers::test]` calls this first thing in every test body; the
/// span closes when the returned guard drops at the end of the test.
#[must_use = "the span closes as soon as the guard is dropped"]
pub fn enter(name: &'static str) -> tracing::span::EnteredSpan {
    setup();
    tracing::info_span!("test", name).entered()
}

/// An error type that panics when it's built (such as when you use `?`
/// to coerce to it)
#[derive(Debug)]
pub struct IPanic;

impl<E> From<E> for IPanic
where
    E: core::error::Error + Send + Sync,
{
    #[track_caller]
    fn from(value: E) -> Self {
        panic!("from: {}: {value}", core::panic::Location::caller())
    }
}
