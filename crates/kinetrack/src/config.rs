use anyhow::{Context, Result};
use kinetrack_core::smoother::{
    DEFAULT_EXTENT, DEFAULT_SIGMA, DEFAULT_TRUNCATE, MAX_RADIUS, SmootherParams,
};
use serde::{Deserialize, Serialize};
use std::{ffi::OsString, fs, path::Path};

/// Environment variable naming an optional pipeline config file.
pub const CONFIG_ENV: &str = "KINETRACK_CONFIG";

/// Tunables for the smoothing pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Trajectory smoother configuration
    #[serde(default)]
    pub smoother: SmootherConfig,
}

/// Trajectory smoother configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmootherConfig {
    /// Gaussian kernel standard deviation, in samples
    #[serde(default = "default_sigma")]
    pub sigma: f64,

    /// Extent the y axis is reflected about
    #[serde(default = "default_extent")]
    pub extent: f64,

    /// Kernel half-width, in standard deviations
    #[serde(default = "default_truncate")]
    pub truncate: f64,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            sigma: default_sigma(),
            extent: default_extent(),
            truncate: default_truncate(),
        }
    }
}

impl SmootherConfig {
    pub fn params(&self) -> SmootherParams {
        SmootherParams {
            sigma: self.sigma,
            extent: self.extent,
            truncate: self.truncate,
        }
    }
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA
}

fn default_extent() -> f64 {
    DEFAULT_EXTENT
}

fn default_truncate() -> f64 {
    DEFAULT_TRUNCATE
}

impl PipelineConfig {
    /// Load from the file named by [`CONFIG_ENV`], or defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var_os(CONFIG_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> Result<Self> {
        let config = match value {
            Some(path) if !path.is_empty() => {
                tracing::info!("Loading pipeline config from {}", path.to_string_lossy());
                Self::from_file(path)?
            }
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let smoother = &self.smoother;
        if !smoother.sigma.is_finite() || smoother.sigma <= 0.0 {
            anyhow::bail!("smoother.sigma must be positive, got {}", smoother.sigma);
        }
        if !smoother.truncate.is_finite() || smoother.truncate <= 0.0 {
            anyhow::bail!(
                "smoother.truncate must be positive, got {}",
                smoother.truncate
            );
        }
        if smoother.sigma * smoother.truncate > MAX_RADIUS as f64 {
            anyhow::bail!(
                "smoother kernel too wide: sigma * truncate = {} exceeds {MAX_RADIUS} samples",
                smoother.sigma * smoother.truncate
            );
        }
        if !smoother.extent.is_finite() {
            anyhow::bail!("smoother.extent must be finite, got {}", smoother.extent);
        }
        Ok(())
    }
}
