use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Default location of the optional config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config/bench.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub log_to_file: bool,
    pub use_json: bool,
    pub rotation: String,
    pub bench: BenchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_dir: "logs".to_string(),
            log_file: "bench.log".to_string(),
            log_to_file: false,
            use_json: false,
            rotation: "never".to_string(),
            bench: BenchConfig::default(),
        }
    }
}

/// Workload parameters for the harness.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Seed for the base array generator
    pub seed: i64,
    /// Exclusive upper bound of generated values
    pub value_bound: i32,
    /// Length of the base array
    pub base_len: usize,
    /// Test sizes, strictly increasing
    pub sizes: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            value_bound: 1_000_000,
            base_len: 1_000_000,
            sizes: vec![1_000, 10_000, 100_000, 1_000_000],
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.value_bound <= 0 {
            return Err(BenchError::Config(format!(
                "value_bound must be positive, got {}",
                self.value_bound
            )));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::Config("sizes must not be empty".to_string()));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::Config("sizes must be non-zero".to_string()));
        }
        if self.sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BenchError::Config(format!(
                "sizes must be strictly increasing: {:?}",
                self.sizes
            )));
        }
        // Non-empty and increasing, so the last entry is the largest.
        let largest = self.sizes[self.sizes.len() - 1];
        if largest > self.base_len {
            return Err(BenchError::Config(format!(
                "size {} exceeds base_len {}",
                largest, self.base_len
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str::<AppConfig>(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(BenchError::ConfigRead(e)),
        };
        config.bench.validate()?;
        Ok(config)
    }
}
