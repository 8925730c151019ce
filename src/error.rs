use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Memory allocation failed for {len} elements")]
    Allocation { len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[source] std::io::Error),

    #[error("Failed to parse config yaml: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
