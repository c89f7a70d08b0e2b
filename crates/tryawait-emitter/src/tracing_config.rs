//! Tracing configuration for hosts embedding the transform.
//!
//! The library never installs a subscriber itself; a host calls
//! [`init_tracing`] once during startup.
//!
//! Supports three output formats controlled by `TRYAWAIT_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ```bash
//! TRYAWAIT_LOG=debug TRYAWAIT_LOG_FORMAT=tree my-host build
//! TRYAWAIT_LOG="tryawait_emitter::transforms=trace" my-host build
//! ```
//!
//! The subscriber is only initialised when `TRYAWAIT_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `TRYAWAIT_LOG_FORMAT` value. Unknown values fall back to text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TRYAWAIT_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `TRYAWAIT_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TRYAWAIT_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TRYAWAIT_LOG` nor `RUST_LOG` is set, or when a
/// global subscriber is already installed. Output goes to stderr.
pub fn init_tracing() {
    let has_own_log = std::env::var("TRYAWAIT_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    // `try_init` so a host that already installed a subscriber keeps it.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
