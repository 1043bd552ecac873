use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Diagnostic line layout: a right-aligned lowercase level tag, a dim
/// colon, then the event fields.
pub struct ArchivrFormatter;

impl<S, N> FormatEvent<S, N> for ArchivrFormatter
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
        let (tag, paint): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("trace", |s| s.dimmed()),
                Level::DEBUG => ("debug", |s| s.cyan()),
                Level::INFO => (" info", |s| s.green()),
                Level::WARN => (" warn", |s| s.yellow().bold()),
                Level::ERROR => ("error", |s| s.red().bold()),
            };

        write!(writer, "{}{} ", paint(tag.into()), ":".bright_black())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Diagnostics go to stderr; user-facing lines print directly to stdout
/// through the print module.
pub fn init(quiet: u8) {
    let default_level = if quiet > 0 { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ArchivrFormatter)
        .with_writer(std::io::stderr)
        .init();
}
