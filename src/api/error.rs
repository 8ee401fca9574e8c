/// The ways a call to the transactions API can fail.
///
/// A 404 is not an error: the client reports a missing transaction as `None`
/// or `false`. Every variant here counts as a transport failure when deciding
/// whether to fall back to the mock store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The base URL cannot have path segments appended to it.
    #[error("invalid API base URL \"{0}\"")]
    InvalidBaseUrl(String),

    /// The request could not be sent or no response arrived in time, e.g.
    /// the connection was refused or the request timed out.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with an unexpected status code.
    #[error("the API responded with status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body as text, possibly empty.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("could not parse the API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Request(error.to_string())
        }
    }
}
