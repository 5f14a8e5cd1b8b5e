//! Prints a specification report for a fixed list of sample engines.
//!
//! Logging goes to stderr and is controlled through `RUST_LOG`
//! (default `warn`).

use std::{
    error::Error,
    io::{self, BufWriter, Write},
};

use tracing::info;
use tracing_subscriber::EnvFilter;

use engine_specs::report::{sample_engines, write_report};

/// Initialize the tracing system for logging
fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_tracing();

    let engines = sample_engines();
    info!(count = engines.len(), "built sample engines");

    let mut out = BufWriter::new(io::stdout().lock());
    write_report(&mut out, &engines)?;
    out.flush()?;
    Ok(())
}
