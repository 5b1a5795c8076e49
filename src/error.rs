use std::path::{Path, PathBuf};

use teloxide::RequestError;

/// Fatal startup failures. The `Display` text of each variant is the line
/// shown to whoever launched the bot.
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("The config was not populated. Please make sure all arguments were given.")]
    MissingToken,

    #[error("The provided bot token was incorrect. Please provide a valid token.")]
    InvalidToken,

    #[error("Could not find Bot Token file!")]
    TokenFileNotFound { path: PathBuf },

    #[error("Could not read Bot Token file!")]
    TokenFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A thread interruption occurred. Check Stack Trace below for source.")]
    Interrupted(#[source] RequestError),

    #[error("A general exception was caught. Exception: {0:#}")]
    Other(anyhow::Error),
}

impl StartupError {
    /// Token file involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StartupError::TokenFileNotFound { path }
            | StartupError::TokenFileUnreadable { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Classify a failed credential check against the platform.
    pub fn from_login(err: RequestError) -> Self {
        match err {
            RequestError::Api(teloxide::ApiError::InvalidToken) => StartupError::InvalidToken,
            RequestError::Network(_) | RequestError::Io(_) | RequestError::RetryAfter(_) => {
                StartupError::Interrupted(err)
            }
            other => StartupError::Other(
                anyhow::Error::new(other).context("Failed to verify bot credentials"),
            ),
        }
    }
}
