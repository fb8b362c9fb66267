//! Prints the configured color maps as literal array declarations.
//!
//! ```bash
//! cargo run --bin gen_color_maps_source > matplotlib_color_maps.py
//! ```

use std::io::{self, BufWriter};

use anyhow::Context;
use cmapgen::{source, BuiltinRegistry, GeneratorConfig};
use log::info;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the generated text only.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = GeneratorConfig::load().context("Failed to load generator configuration")?;
    info!(
        "Emitting {} declarations at resolution {}",
        config.names.len(),
        config.resolution
    );

    let registry = BuiltinRegistry::new();
    let mut out = BufWriter::new(io::stdout().lock());
    source::emit(&registry, &config.names, config.resolution, &mut out)
        .context("Failed to emit color map declarations")?;

    Ok(())
}
