use thiserror::Error;

/// Top-level error type.
///
/// Wraps the category-specific errors so callers can match on the
/// failure class without losing the underlying message.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration and prefix-template errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no parameter prefix configured")]
    MissingPrefix,

    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("undefined template variable: {0}")]
    UndefinedVariable(String),

    #[error("unterminated template placeholder in {0:?}")]
    UnterminatedPlaceholder(String),
}

/// Remote parameter store errors.
///
/// `Enumeration` covers the initial listing/describe call, `Fetch` the
/// value retrieval that follows. The split matters to callers: a fetch
/// failure means names were already confirmed to exist, so the store is
/// malfunctioning rather than simply empty.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("parameter enumeration failed: {0}")]
    Enumeration(String),

    #[error("parameter fetch failed: {0}")]
    Fetch(String),

    #[error("pagination did not terminate after {0} pages")]
    PaginationOverflow(usize),

    #[error("failed to start store runtime: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, Error>;
