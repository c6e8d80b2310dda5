//! Connect four (workspace facade crate).
//!
//! Re-exports the member crates under `connect_four::{types,core,adapter,engine,term}`
//! so the binaries, integration tests, and benches share one import path.

pub use connect_four_adapter as adapter;
pub use connect_four_core as core;
pub use connect_four_engine as engine;
pub use connect_four_term as term;
pub use connect_four_types as types;

/// Install the `tracing` subscriber shared by both binaries.
///
/// Diagnostics go to stderr so the game display on stdout stays readable.
/// Verbosity follows `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
