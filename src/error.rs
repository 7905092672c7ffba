//! Error types for reading and blending colors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for color blending operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while gathering and blending colors.
#[derive(Error, Debug)]
pub enum Error {
    /// The color file could not be opened.
    #[error("Unable to open file '{}'.", path.display())]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// Why opening failed.
        #[source]
        source: std::io::Error,
    },

    /// A mode name that is not one of the aggregation strategies.
    #[error("Invalid mode '{0}'.")]
    UnknownMode(String),

    /// Neither the file nor the command line produced a valid color.
    #[error("No valid colors provided.")]
    NoColors,
}
