//! Tracing setup for debugging the validator.
//!
//! The subscriber is only installed when `NOMCHECK_LOG` (or `RUST_LOG`) is
//! set. `NOMCHECK_LOG_FORMAT=json` switches to one JSON object per event.
//!
//! ```bash
//! NOMCHECK_LOG=debug nomcheck check types.json
//! NOMCHECK_LOG="nomcheck_lib::analyze=trace" NOMCHECK_LOG_FORMAT=json nomcheck check types.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        Self::parse(&std::env::var("NOMCHECK_LOG_FORMAT").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `NOMCHECK_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("NOMCHECK_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global subscriber. Output goes to stderr so it never mixes
/// with `--format json` on stdout.
pub fn init_tracing() {
    let has_own_log = std::env::var("NOMCHECK_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
