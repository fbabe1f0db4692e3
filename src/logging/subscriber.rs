//! Tracing subscriber setup: stderr formatter and initialisation.
use tracing_subscriber::EnvFilter;

/// Environment variable holding an [`EnvFilter`] directive, e.g. `debug` or
/// `magisk_applets=trace`.
pub const LOG_ENV: &str = "MAGISK_LOG";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
    fields: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push_str(&format!(" {}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push_str(&format!(" {}={value}", field.name()));
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that prefixes every line with
/// the name the process was invoked under.
struct AppletFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for AppletFormatter
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
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let MessageExtractor { message, fields } = extractor;
        let line = render(
            *event.metadata().level(),
            &super::prefix(),
            &format!("{message}{fields}"),
            writer.has_ansi_escapes(),
        );
        writeln!(writer, "{line}")
    }
}

/// One formatted log line, without the trailing newline.
///
/// Errors and warnings carry an `ERROR`/`WARN` label; debug and trace output
/// is dimmed. Colour is only emitted when `ansi` is set.
fn render(level: tracing::Level, prefix: &str, body: &str, ansi: bool) -> String {
    match (level, ansi) {
        (tracing::Level::ERROR, true) => format!("{prefix}\x1b[31mERROR\x1b[0m {body}"),
        (tracing::Level::ERROR, false) => format!("{prefix}ERROR {body}"),
        (tracing::Level::WARN, true) => format!("{prefix}\x1b[33mWARN\x1b[0m {body}"),
        (tracing::Level::WARN, false) => format!("{prefix}WARN {body}"),
        (tracing::Level::INFO, _) | (_, false) => format!("{prefix}{body}"),
        (_, true) => format!("{prefix}\x1b[2m{body}\x1b[0m"),
    }
}

/// Build the level filter from [`LOG_ENV`], defaulting to `warn`.
///
/// An unparseable directive falls back to the default rather than failing.
pub(super) fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the global [`tracing`] subscriber writing to stderr.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_subscriber() {
    use std::io::IsTerminal as _;
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _};
    use tracing_subscriber::util::SubscriberInitExt as _;

    let console_layer = fmt::layer()
        .event_format(AppletFormatter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(console_layer).try_init().ok();
}
