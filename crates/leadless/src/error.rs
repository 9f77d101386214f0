use leadless_core::jira::SchemaError;
use leadless_core::pagination::PaginationError;

/// Failure modes of a tracker fetch
///
/// Every variant propagates unchanged through the client functions; the CLI
/// layer converts to a report and a non-zero exit status at the top level.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Locally computed pagination inputs were invalid
    #[error("invalid pagination arguments: {0}")]
    InvalidArgument(#[from] PaginationError),

    /// The tracker answered with a non-success HTTP status
    #[error("tracker returned {status} {status_text} for {url}")]
    TrackerResponse {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The tracker's body did not match the expected shape
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The request never produced an HTTP status
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
