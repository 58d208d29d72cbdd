use std::path::PathBuf;

/// Result type used across the crate, with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller misuse, such as spelling an empty string.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The word has no partition into dictionary tokens.
    ///
    /// This is an ordinary outcome, callers are expected to match on it.
    #[error("{word} does not have a chemical spelling")]
    Unspellable { word: String },

    /// Malformed dictionary row or configuration value.
    #[error("config error: {0}")]
    Config(String),

    #[error("the path '{0}' is a directory, but a file was expected")]
    PathIsDirectory(PathBuf),

    /// The precomputation was stopped through its cancel token.
    #[error("precomputation cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn unspellable<S: Into<String>>(word: S) -> Self {
        Self::Unspellable { word: word.into() }
    }

    /// True for the expected "no spelling" outcome, false for faults.
    pub fn is_unspellable(&self) -> bool {
        matches!(self, Self::Unspellable { .. })
    }
}
