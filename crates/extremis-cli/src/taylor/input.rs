use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::{Path, PathBuf};

use extremis_taylor::config::SeriesConfig;

use crate::util::load_json_config;

/// Load a `SeriesConfig` from an optional JSON file and apply overrides.
pub fn load_series_config(
    config_path: Option<&Path>,
    order: Option<u32>,
    size: Option<usize>,
) -> Result<SeriesConfig> {
    let mut config: SeriesConfig = load_json_config(config_path)?;

    if let Some(order) = order {
        config.order = order;
    }
    if let Some(size) = size {
        if config.matrix.is_some() {
            anyhow::bail!("--size cannot be combined with an explicit matrix in the config file");
        }
        config.size = size;
    }

    config
        .base_matrix()
        .context("Invalid matrix in series configuration")?;
    Ok(config)
}

pub fn from_arguments(matches: &ArgMatches) -> Result<SeriesConfig> {
    load_series_config(
        matches.get_one::<PathBuf>("config").map(|p| p.as_path()),
        matches.get_one::<u32>("order").copied(),
        matches.get_one::<usize>("size").copied(),
    )
}
