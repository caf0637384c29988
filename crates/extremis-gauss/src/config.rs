use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_SIZE;
use crate::error::GaussError;

/// Settings for the prime cache and the lattice projection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GaussConfig {
    /// Number of naturals `0..cache_size` held in the prime cache; also the
    /// exclusive norm bound of the lattice.
    pub cache_size: usize,

    /// Linear factor applied to lattice coordinates.
    pub scale: f64,
}

impl GaussConfig {
    pub fn new(cache_size: usize, scale: f64) -> Self {
        Self { cache_size, scale }
    }

    pub fn validate(&self) -> Result<(), GaussError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(GaussError::InvalidScale(self.scale));
        }
        if self.cache_size == 0 {
            return Err(GaussError::InvalidArgument(
                "cache_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            scale: 10.0,
        }
    }
}
