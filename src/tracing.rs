//! Logging setup.
//!
//! stdout belongs to the MCP transport, so every subscriber writes to stderr
//! (or the test writer under `cargo test`).

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Environment variable selecting the log line format.
pub const LOG_FORMAT_ENV: &str = "DOCX_SEARCH_LOG_FORMAT";

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Compact,
    Json,
    Test,
}

impl LogFormat {
    fn from_env() -> Self {
        if running_under_test() {
            Self::Test
        } else if std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
            Self::Json
        } else {
            Self::Compact
        }
    }

    const fn default_level(self) -> tracing::Level {
        match self {
            Self::Test => tracing::Level::DEBUG,
            Self::Compact | Self::Json => tracing::Level::INFO,
        }
    }
}

fn running_under_test() -> bool {
    std::env::var_os("NEXTEST").is_some() || std::env::var_os("CARGO_TARGET_TMPDIR").is_some()
}

/// Install the global subscriber once; later calls are no-ops.
///
/// `RUST_LOG` directives are honored on top of the default level.
pub fn init() {
    INIT.call_once(|| {
        let format = LogFormat::from_env();
        let filter = EnvFilter::from_default_env().add_directive(format.default_level().into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        let result = match format {
            LogFormat::Test => builder.compact().with_test_writer().try_init(),
            LogFormat::Json => builder.json().with_writer(std::io::stderr).try_init(),
            LogFormat::Compact => builder.compact().with_writer(std::io::stderr).try_init(),
        };

        if let Err(e) = result {
            eprintln!("docx-search-mcp: logging disabled: {}", e);
        }
    });
}
