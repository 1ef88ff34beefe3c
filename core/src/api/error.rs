use thiserror::Error;

/// Errors that can occur when talking to the remote todo API.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered 404 for a specific todo item.
    #[error("Todo item not found")]
    ItemNotFound,

    /// The server returned a status outside the operation's accepted set.
    #[error("API returned error status {status}: {body}")]
    UnknownError { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not match the task wire contract.
    #[error("Failed to decode response payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request never completed, so no status code was observed.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}
