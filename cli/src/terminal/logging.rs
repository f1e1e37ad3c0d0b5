use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Compact single-line formatter for diagnostic events.
pub struct EdffixFormatter;

impl<S, N> FormatEvent<S, N> for EdffixFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let tag: ColoredString = match *event.metadata().level() {
            Level::TRACE => "trace".dimmed(),
            Level::DEBUG => "debug".blue(),
            Level::INFO => "info".green(),
            Level::WARN => "warn".yellow().bold(),
            Level::ERROR => "error".red().bold(),
        };

        write!(writer, "{tag}: ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the subscriber. `RUST_LOG` selects the level (default `warn`);
/// diagnostics go to stderr so status lines stay clean on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(EdffixFormatter)
        .init();
}
