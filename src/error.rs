use thiserror::Error;

pub type CtabResult<T> = Result<T, CtabError>;

#[derive(Error, Debug)]
pub enum CtabError {
    #[error("ERR : Input not found =\n{0}")]
    NotFound(IoErrorWithMeta),
    #[error("ERR : Malformed input =\n{0}")]
    MalformedInput(String),
    #[error("ERR : Failed to write output =\n{0}")]
    IoWriteFailure(IoErrorWithMeta),
    #[cfg(feature = "cli")]
    #[error("ERR : Command line error =\n{0}")]
    CliError(String),
}

impl CtabError {
    pub fn not_found(err: std::io::Error, meta: &str) -> Self {
        Self::NotFound(IoErrorWithMeta::new(err, meta))
    }

    pub fn io_write_failure(err: std::io::Error, meta: &str) -> Self {
        Self::IoWriteFailure(IoErrorWithMeta::new(err, meta))
    }
}

pub struct IoErrorWithMeta {
    error: std::io::Error,
    meta: String,
}

impl IoErrorWithMeta {
    pub fn new(error: std::io::Error, meta: &str) -> Self {
        Self {
            error,
            meta: meta.to_owned(),
        }
    }
}

impl std::fmt::Debug for IoErrorWithMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.error, self.meta)
    }
}

impl std::fmt::Display for IoErrorWithMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.error, self.meta)
    }
}
