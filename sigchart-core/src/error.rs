use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("color {0:?} is not implemented (expected one of: red, green, blue, yellow, magenta, cyan, white, orange, gray)")]
    UnknownColor(String),
    #[error("buffer length must be at least 1")]
    ZeroLength,
    #[error("sample interval must not be negative")]
    NegativeInterval,
}

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("file is not readable: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
