//! Tracing subscriber setup: console formatter and initialisation.
use std::io::IsTerminal as _;

use super::logger::{SKIP_TARGET, STAGE_TARGET, SUCCESS_TARGET};
use super::utils::strip_ansi;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
pub(super) struct MessageExtractor {
    pub(super) message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits installer-style
/// console output.
///
/// When `color` is false every ANSI escape, including ones embedded in the
/// message itself, is dropped.
pub(super) struct InstallerFormatter {
    pub(super) color: bool,
}

impl InstallerFormatter {
    /// Render one event as a single console line (without trailing newline).
    pub(super) fn render(&self, level: tracing::Level, target: &str, msg: &str) -> String {
        let line = match level {
            tracing::Level::ERROR => format!("\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => format!("\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == STAGE_TARGET => {
                format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO if target == SUCCESS_TARGET => {
                format!("  \x1b[32m✓ {msg}\x1b[0m")
            }
            tracing::Level::INFO if target == SKIP_TARGET => format!("  \x1b[33m⊘ {msg}\x1b[0m"),
            tracing::Level::INFO => format!("  {msg}"),
            _ => format!("  \x1b[2m{msg}\x1b[0m"),
        };
        if self.color { line } else { strip_ansi(&line) }
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for InstallerFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            self.render(*metadata.level(), metadata.target(), &extractor.message)
        )
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout. Debug
/// messages are shown only when `verbose` is set. Must be called once at
/// program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let formatter = InstallerFormatter {
        color: std::io::stdout().is_terminal(),
    };

    let console_layer = fmt::layer()
        .event_format(formatter)
        .with_writer(make_writer)
        .with_filter(console_level);

    tracing_subscriber::registry().with(console_layer).init();
}
