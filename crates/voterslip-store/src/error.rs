use thiserror::Error;

/// Store layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store request failed for node {node}: {source}")]
    Http {
        node: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed payload from node {node}: {source}")]
    Decode {
        node: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to construct store client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid store base URL: {0}")]
    BaseUrl(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    CoreError(#[from] voterslip_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
