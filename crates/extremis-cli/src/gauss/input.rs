use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::{Path, PathBuf};

use extremis_gauss::config::GaussConfig;

use crate::util::load_json_config;

/// Load a `GaussConfig` from an optional JSON file and apply overrides.
pub fn load_gauss_config(
    config_path: Option<&Path>,
    scale: Option<f64>,
    cache_size: Option<usize>,
) -> Result<GaussConfig> {
    let mut config: GaussConfig = load_json_config(config_path)?;

    if let Some(scale) = scale {
        config.scale = scale;
    }
    if let Some(cache_size) = cache_size {
        config.cache_size = cache_size;
    }

    config.validate().context("Invalid Gaussian lattice configuration")?;
    Ok(config)
}

pub fn from_arguments(matches: &ArgMatches) -> Result<GaussConfig> {
    load_gauss_config(
        matches.get_one::<PathBuf>("config").map(|p| p.as_path()),
        matches.get_one::<f64>("scale").copied(),
        matches.get_one::<usize>("cache_size").copied(),
    )
}
