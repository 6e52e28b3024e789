//! Logging for `dmsctl`.
//!
//! Diagnostics go to stderr; stdout carries only command output. Without
//! `RUST_LOG`, `--verbose` decides the filter and `--json` the line format.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// Verbose mode opens up the client's per-call events and the tool's own
/// debug lines; everything else stays at warnings.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,dms_client=debug,dmsctl=debug"
    } else {
        "warn"
    }
}

/// Install the stderr subscriber. Returns false if one was already set.
pub fn init_tracing(json: bool, verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let lines = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry.with(lines.json()).try_init()
    } else {
        registry.with(lines).try_init()
    };
    installed.is_ok()
}
