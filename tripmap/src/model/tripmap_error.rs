use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripmapError {
    #[error("failure reading trip dataset '{}': {source}", .path.display())]
    DataSource { path: PathBuf, source: csv::Error },
    #[error("invalid hour '{0}', must be an integer in [0, 23]")]
    InvalidHour(u32),
    #[error("failure reading frame configuration '{}': {message}", .path.display())]
    Configuration { path: PathBuf, message: String },
    #[error("failure serializing frame to JSON: {0}")]
    FrameSerialization(#[from] serde_json::Error),
    #[error("failure writing frame output: {0}")]
    OutputWrite(#[from] std::io::Error),
}
