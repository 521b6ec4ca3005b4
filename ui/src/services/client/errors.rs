use thiserror::Error;

/// Transport-level failures: the request never completed, or no
/// well-formed JSON reply was obtained. A non-2xx response with a
/// parsable body is not an error here; it is reported through
/// [`super::SubmitOutcome`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("malformed response body: {message}")]
    MalformedBody { message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
