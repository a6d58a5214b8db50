use thiserror::Error;

// Tagged outcome of one network operation: success XOR failure.
pub type ApiResult<T> = Result<T, SessionError>;

// Closed set of reasons a single request or login step can fail.
// Messages are kept as strings so the error can be cloned into published signals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("status code {0} out of success range")]
    StatusCode(u16),
    #[error("response decode error: {0}")]
    Decode(String),
    #[error("sign-in provider configuration is missing")]
    MissingConfiguration,
    #[error("provider credential token is missing")]
    MissingCredential,
    #[error("external sign-in failed: {0}")]
    SignInFailed(String),
}
