use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting or writing a recipe
#[derive(Error, Debug)]
pub enum WriterError {
    /// Console input ended while an answer was still required
    #[error("Input closed before an answer was given")]
    InputClosed,

    /// Reading from or writing to the console failed
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),

    /// The recipe file could not be created for a reason other than a collision
    #[error("Failed to create file '{}' for recipe '{recipe}': {source}", .path.display())]
    FileCreate {
        recipe: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The recipe file was created but its content could not be written
    #[error("Failed to write recipe '{recipe}' to '{}': {source}", .path.display())]
    FileWrite {
        recipe: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, WriterError>;
