use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StartupError;

/// File the token is read from when none is given on the command line.
pub const TOKEN_FILE: &str = "bot.properties";

/// Bot credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Accepts tokens shaped like `123456:secret`.
    pub fn new(raw: impl Into<String>) -> Result<Self, StartupError> {
        let raw = raw.into();
        let raw = raw.trim();

        let (id, secret) = raw.split_once(':').ok_or(StartupError::MissingToken)?;
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) || secret.is_empty() {
            return Err(StartupError::MissingToken);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.0.split(':').next().unwrap_or_default();
        write!(f, "Token({}:***)", id)
    }
}

/// Where the token came from, for the startup log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    CommandLine,
    File(PathBuf),
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::CommandLine => write!(f, "command line"),
            TokenSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: Token,
    pub source: TokenSource,
}

impl Config {
    /// Resolve the token: a non-empty `arg` wins, otherwise the first line
    /// of `token_file` is used.
    pub fn load(arg: Option<String>, token_file: &Path) -> Result<Self, StartupError> {
        if let Some(arg) = arg.filter(|a| !a.is_empty()) {
            return Ok(Self {
                token: Token::new(arg)?,
                source: TokenSource::CommandLine,
            });
        }

        let content = std::fs::read_to_string(token_file).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StartupError::TokenFileNotFound {
                path: token_file.to_path_buf(),
            },
            _ => StartupError::TokenFileUnreadable {
                path: token_file.to_path_buf(),
                source: e,
            },
        })?;

        let first_line = content.lines().next().unwrap_or_default();

        Ok(Self {
            token: Token::new(first_line)?,
            source: TokenSource::File(token_file.to_path_buf()),
        })
    }
}
