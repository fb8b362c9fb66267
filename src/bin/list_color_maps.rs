//! Lists the color maps stored in an archive, sorted and comma separated.
//!
//! ```bash
//! cargo run --bin list_color_maps -- [path/to/matplotlib_color_maps.npz]
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use cmapgen::config::DEFAULT_ARCHIVE_PATH;
use cmapgen::Archive;
use log::debug;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_PATH));
    debug!("Reading {}", path.display());

    let archive =
        Archive::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut names: Vec<&str> = archive.names().collect();
    names.sort_unstable();
    println!("{}", names.join(", "));

    Ok(())
}
