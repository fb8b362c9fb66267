//! Samples the configured color maps and writes `matplotlib_color_maps.npz`.
//!
//! ```bash
//! cargo run --bin gen_color_maps_npz
//! ```

use anyhow::Context;
use cmapgen::{Archive, BuiltinRegistry, GeneratorConfig};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = GeneratorConfig::load().context("Failed to load generator configuration")?;
    info!(
        "Sampling {} color maps at resolution {}",
        config.names.len(),
        config.resolution
    );

    let registry = BuiltinRegistry::new();
    let archive = Archive::build(&registry, &config.archive_names(), config.resolution)
        .context("Failed to sample color maps")?;

    archive
        .write(&config.archive_path)
        .with_context(|| format!("Failed to write {}", config.archive_path.display()))?;

    Ok(())
}
