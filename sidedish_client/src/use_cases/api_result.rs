// Generic mapping of a raw HTTP exchange into a typed ApiResult.

use serde::de::DeserializeOwned;

use crate::domain::{ApiResult, SessionError};

/// Raw outcome of one HTTP exchange before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
    /// Set when the request never produced a usable response.
    pub transport_error: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            transport_error: None,
        }
    }

    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            body: Vec::new(),
            transport_error: Some(message.into()),
        }
    }

    fn has_body(&self) -> bool {
        !self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Upstream payloads wrap the interesting body together with a status code.
pub trait Envelope: DeserializeOwned {
    type Body;

    /// Status code reported inside the payload, if the endpoint sends one.
    fn status_code(&self) -> Option<u16>;

    fn into_body(self) -> Self::Body;
}

pub fn is_success_status(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Maps a raw response into exactly one success or failure.
///
/// Precedence: transport error, then HTTP status, then a missing body (a 204
/// is a bad status, never a success without a value), then decoding, then the
/// status code carried by the envelope itself.
pub fn map_response<E: Envelope>(raw: RawResponse) -> ApiResult<E::Body> {
    if let Some(message) = raw.transport_error {
        return Err(SessionError::Transport(message));
    }

    if !is_success_status(raw.status) || !raw.has_body() {
        return Err(SessionError::StatusCode(raw.status));
    }

    let envelope: E =
        serde_json::from_slice(&raw.body).map_err(|err| SessionError::Decode(err.to_string()))?;

    match envelope.status_code() {
        Some(code) if !is_success_status(code) => Err(SessionError::StatusCode(code)),
        _ => Ok(envelope.into_body()),
    }
}
