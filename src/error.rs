use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A filesystem call failed; `path` is the file or directory it touched.
    #[error("Filesystem error at '{path}': {source}.")]
    FileSystemError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk the template store. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Template {path} does not exist.")]
    TemplateNotFound { path: String },

    /// A placeholder in the template text has no entry in the variable mapping.
    #[error("Missing variable '{name}' required by template '{template}'.")]
    MissingVariable { name: String, template: String },

    /// A `$` that starts neither `$$`, `$identifier` nor `${identifier}`.
    #[error("Invalid placeholder in template '{template}': line {line}, col {column}.")]
    InvalidPlaceholder { template: String, line: usize, column: usize },

    #[error("Failed to parse answers: {0}.")]
    AnswersParseError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wraps an I/O failure together with the path that caused it.
    pub fn fs<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::FileSystemError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
