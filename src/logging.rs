//! Leveled, colorized log output and the one-time startup banner.
//!
//! Rendering is owned entirely by the tracing subscriber; the rest of
//! the plugin only emits leveled records. The filter sits behind a
//! reload handle so the threshold can follow the `LogLevel` setting once
//! the configuration table is loaded.

use crate::settings::TypedValue;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

const BANNER: &str = r#"
                ____          __
   _________ _/ / /_  ______/ /
  / ___/ __ `/ / / / / / __  /
 / /  / /_/ / / / /_/ / /_/ /
/_/   \__,_/_/_/\__, /\__,_/
               /____/"#;

/// Handle to the active log filter.
///
/// Used to retarget the runtime threshold after the configuration table
/// is loaded.
pub struct LogHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LogHandle {
    /// Handle with no attached subscriber; level changes are dropped.
    /// For hosts (and tests) that own their own subscriber.
    pub fn noop() -> Self {
        Self { reload: None }
    }

    /// Swaps the runtime threshold.
    pub fn set_level(&self, level: Level) {
        if let Some(ref handle) = self.reload {
            let _ = handle.reload(EnvFilter::new(level.to_string()));
        }
    }
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over the passed default when set.
pub fn init(default_level: &str) -> LogHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    LogHandle {
        reload: Some(handle),
    }
}

/// Recognizes a log level from a configuration value.
///
/// Accepts level names ("warn" and "warning" both work) or the numeric
/// order 0-4 from trace to error. Anything else leaves the default
/// threshold in place.
pub fn parse_level(value: &TypedValue) -> Option<Level> {
    match value {
        TypedValue::Text(s) => match s.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        },
        TypedValue::Integer(n) => match n {
            0 => Some(Level::TRACE),
            1 => Some(Level::DEBUG),
            2 => Some(Level::INFO),
            3 => Some(Level::WARN),
            4 => Some(Level::ERROR),
            _ => None,
        },
        _ => None,
    }
}

/// Writes the one-time startup banner straight to stdout.
///
/// The banner is presentation rather than a log record, so it bypasses
/// the subscriber and its threshold.
pub fn print_banner() {
    println!("{}", BANNER);
    println!("        a rally mini-game server plugin");
    println!("                 v{}", env!("CARGO_PKG_VERSION"));
    println!();
}
