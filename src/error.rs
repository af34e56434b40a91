/// All errors that can surface while scanning, parsing, or exporting a project.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
