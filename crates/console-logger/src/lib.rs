//! Console Logger
//!
//! A `tracing` layer that formats events into single lines and writes them
//! to the browser console, picking `console.error/warn/info/log/debug` by level.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Destination for formatted log lines
pub trait ConsoleSink: Send + Sync + 'static {
    fn emit(&self, level: Level, line: &str);
}

/// Browser devtools console
#[derive(Clone, Copy, Debug, Default)]
pub struct WebConsole;

impl ConsoleSink for WebConsole {
    fn emit(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::log_1(&line),
            Level::TRACE => web_sys::console::debug_1(&line),
        }
    }
}

/// Layer that renders every event it sees into its sink
pub struct ConsoleLayer<S> {
    sink: S,
}

impl<S: ConsoleSink> ConsoleLayer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: ConsoleSink,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let line = format_line(meta.level(), meta.target(), &fields.finish());
        self.sink.emit(*meta.level(), &line);
    }
}

/// Collects the `message` field plus any `key=value` pairs
#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: String,
}

impl FieldCollector {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.extra.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.extra,
            (false, false) => format!("{} {}", self.message, self.extra),
        }
    }

    fn push_extra(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.extra.is_empty() {
            self.extra.push(' ');
        }
        let _ = write!(self.extra, "{}={}", name, value);
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_extra(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_extra(field.name(), format_args!("{:?}", value));
        }
    }
}

/// Format one console line: `LEVEL target: message`
pub fn format_line(level: &Level, target: &str, body: &str) -> String {
    format!("{:<5} {}: {}", level.as_str(), target, body)
}

/// Install the console layer as the global subscriber.
///
/// Later calls are ignored so a hot-reloaded module cannot panic here.
pub fn init(max_level: Level) {
    let installed = tracing_subscriber::registry()
        .with(ConsoleLayer::new(WebConsole).with_filter(LevelFilter::from_level(max_level)))
        .try_init();
    if installed.is_err() {
        tracing::debug!("console logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemorySink {
        lines: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl ConsoleSink for MemorySink {
        fn emit(&self, level: Level, line: &str) {
            self.lines.lock().unwrap().push((level, line.to_string()));
        }
    }

    fn capture(max_level: Level, f: impl FnOnce()) -> Vec<(Level, String)> {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry()
            .with(ConsoleLayer::new(sink.clone()).with_filter(LevelFilter::from_level(max_level)));
        tracing::subscriber::with_default(subscriber, f);
        let lines = sink.lines.lock().unwrap().clone();
        lines
    }

    #[test]
    fn test_format_line_pads_level() {
        assert_eq!(format_line(&Level::INFO, "app", "ready"), "INFO  app: ready");
        assert_eq!(format_line(&Level::ERROR, "app", "boom"), "ERROR app: boom");
    }

    #[test]
    fn test_event_message_and_fields() {
        let lines = capture(Level::TRACE, || {
            tracing::info!(target: "portfolio", section = "skills", visible = true, "reveal changed");
        });

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::INFO);
        assert_eq!(lines[0].1, "INFO  portfolio: reveal changed section=skills visible=true");
    }

    #[test]
    fn test_fields_without_message() {
        let lines = capture(Level::TRACE, || {
            tracing::warn!(target: "portfolio", anchor = "about");
        });

        assert_eq!(lines[0].1, "WARN  portfolio: anchor=about");
    }

    #[test]
    fn test_level_filter_drops_verbose_events() {
        let lines = capture(Level::INFO, || {
            tracing::debug!("hidden");
            tracing::trace!("hidden");
            tracing::error!("shown");
        });

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::ERROR);
    }
}
