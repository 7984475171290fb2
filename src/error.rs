use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Cannot read font directory {path}: {source}")]
    FontDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No fonts found in {0}")]
    NoFonts(PathBuf),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
