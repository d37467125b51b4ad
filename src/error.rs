use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum GavelError {
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("record '{0}' not found")]
    RecordNotFound(String),

    #[error("{resource} does not support status updates")]
    StatusNotSupported { resource: &'static str },

    #[error("{resource} has no read receipts")]
    ReadReceiptNotSupported { resource: &'static str },

    #[error("invalid status '{status}'' for {resource}, expected one of: {expected}")]
    InvalidStatus {
        resource: &'static str,
        status: String,
        expected: String,
    },

    #[error("session has no email; set one with 'gavel config set session.email <email>'")]
    MissingSessionEmail,

    #[error("{resource} is not available to the {role} role")]
    Forbidden {
        resource: &'static str,
        role: String,
    },

    #[error("Failed to fetch {resource}: {reason}")]
    FetchFailed {
        resource: &'static str,
        reason: String,
    },

    #[error("Failed to update {resource}: {reason}")]
    UpdateFailed {
        resource: &'static str,
        reason: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GavelError>;
