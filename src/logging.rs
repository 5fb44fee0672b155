//! Logger setup shared by the binaries.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install the global logger.
///
/// `RUST_LOG` overrides `default_filter`. With `log_path` set, records are
/// appended to that file instead of stderr.
pub fn init(log_path: Option<&Path>, default_filter: &str) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}
