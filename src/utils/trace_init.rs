use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default
/// `info` filter. Calling it again is a no-op.
pub fn init_tracing() {
    if INITIALISED.set(()).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // another subscriber may already own the global slot (e.g. a test harness)
    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}
