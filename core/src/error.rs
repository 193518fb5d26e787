//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The file to read or patch does not exist.
    #[from(ignore)]
    #[display("File not found: {_0}")]
    FileNotFound(String),

    /// The file content is not valid TypeScript.
    #[from(ignore)]
    #[display("Parse Error in {path}: {message}")]
    Parse {
        /// Path of the file that failed to parse.
        path: String,
        /// Parser diagnostic, prefixed with line and column.
        message: String,
    },

    /// A mandatory registration site is missing from the target file.
    #[from(ignore)]
    #[display("Could not find '{property}' array in @{decorator} of {path}")]
    SiteNotFound {
        /// Path of the file that was searched.
        path: String,
        /// Decorator name, without the `@`.
        decorator: String,
        /// Property key inside the decorator configuration.
        property: String,
    },

    /// Invalid configuration file or option combination.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
