use thiserror::Error;

#[derive(Error, Debug)]
pub enum SopranoError {
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] chat::ParseError),

    #[error("Could not open {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    #[error("No chat component given (pass JSON, --input, --file, or pipe it on stdin)")]
    MissingInput,

    #[error("Logger error: {0}")]
    Logger(String),
}

impl SopranoError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SopranoError::Parse(_) => 2,
            _ => 1,
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SopranoError>;
