use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or re-serializing session descriptions
#[derive(Error, Debug)]
pub enum Error {
    /// A payload list contained a token that is not a decimal number
    #[error("Invalid payload type: {0:?}")]
    InvalidPayload(String),

    /// A remote-candidates value did not decompose into component/ip/port triples
    #[error("Invalid remote-candidates list: {0}")]
    InvalidRemoteCandidates(String),

    /// Moving between the generic attribute tree and the typed schema failed
    #[error("Schema projection error: {0}")]
    Projection(#[from] serde_json::Error),
}
