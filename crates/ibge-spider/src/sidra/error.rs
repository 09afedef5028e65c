use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure of a single SIDRA request.
///
/// Any of these means "no data available"; [`SidraClient::fetch`] logs them and returns `None`.
///
/// [`SidraClient::fetch`]: super::SidraClient::fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("malformed JSON payload: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),

    #[error("empty payload")]
    EmptyPayload,
}

/// Failures while normalizing a raw SIDRA table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The API's response layout changed; never skipped.
    #[error("column `{column}` missing from row {row}")]
    MissingColumn { column: String, row: usize },

    #[error("unparseable month label `{label}`")]
    UnparseableDate { label: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown month name `{0}`")]
pub struct UnknownMonth(pub String);
