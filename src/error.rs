use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("amount is required")]
    MissingAmount,
    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("category is required")]
    MissingCategory,
    #[error("{category:?} is not a valid {kind} category")]
    UnknownCategory { kind: &'static str, category: String },
    #[error("payee or source is required")]
    MissingCounterparty,
    #[error("group name is required")]
    MissingGroupName,
    #[error("name is required")]
    MissingName,
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("email is required")]
    MissingEmail,
    #[error("{0} password is required")]
    MissingPassword(&'static str),
    #[error("new password and confirmation do not match")]
    PasswordMismatch,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a number of milliseconds, got {value:?}")]
    InvalidDelay { name: &'static str, value: String },
}
