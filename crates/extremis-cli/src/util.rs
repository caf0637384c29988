use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

pub fn validate_json_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("json") => {}
        _ => anyhow::bail!("Config file must have a .json extension: {:?}", path),
    }

    if !path.exists() {
        anyhow::bail!("Config file does not exist: {:?}", path);
    }

    Ok(())
}

/// Read a JSON config, or fall back to `T::default()` when no path is given.
pub fn load_json_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };
    validate_json_file(path)?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}
