// Reqwest-backed adapters for the upstream services, plus the sign-in provider glue.

pub mod login;
pub mod provider;
pub mod sidedish;

pub use login::LoginClient;
pub use provider::{GOOGLE_PROVIDER_ID, ProviderCredentialExchange, StaticProviderConfig};
pub use sidedish::SidedishClient;

use thiserror::Error;
use url::Url;

use crate::domain::{ApiResult, SessionError};
use crate::use_cases::RawResponse;

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid base url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("base url {0} cannot carry path segments")]
    NotHierarchical(String),
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ClientBuildError> {
    let url = Url::parse(base_url).map_err(|source| ClientBuildError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientBuildError::NotHierarchical(base_url.to_string()));
    }
    Ok(url)
}

// Appends percent-encoded path segments to the base url.
pub(crate) fn endpoint(base_url: &Url, segments: &[&str]) -> ApiResult<Url> {
    let mut url = base_url.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| SessionError::Transport(format!("cannot extend url {base_url}")))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

// Sends the request and captures whatever came back, without interpreting it.
pub(crate) async fn fetch(request: reqwest::RequestBuilder) -> RawResponse {
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => return RawResponse::transport_failure(err.to_string()),
    };

    let status = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => RawResponse::new(status, body.to_vec()),
        Err(err) => RawResponse::transport_failure(err.to_string()),
    }
}
