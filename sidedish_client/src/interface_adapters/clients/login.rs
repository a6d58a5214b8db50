use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;
use url::Url;

use super::{ClientBuildError, endpoint, fetch, parse_base_url};
use crate::domain::{ApiResult, Credential, LoginRepository, SessionError, User};
use crate::interface_adapters::protocol::{LoginRequest, UserEnvelope};
use crate::use_cases::map_response;

// Reqwest client for the application login backend.
// Remembers the ID token of the last accepted credential so a later
// `current_user` can restore the user silently.
pub struct LoginClient {
    http: Client,
    base_url: Url,
    id_token: Mutex<Option<String>>,
}

impl LoginClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
            id_token: Mutex::new(None),
        })
    }

    /// Seeds a token from an earlier session so `current_user` can restore it.
    pub fn with_id_token(mut self, id_token: impl Into<String>) -> Self {
        self.id_token = Mutex::new(Some(id_token.into()));
        self
    }
}

#[async_trait]
impl LoginRepository for LoginClient {
    async fn current_user(&self) -> ApiResult<Option<User>> {
        let Some(token) = self.id_token.lock().await.clone() else {
            return Ok(None);
        };

        let url = endpoint(&self.base_url, &["login", "me"])?;
        let raw = fetch(self.http.get(url).bearer_auth(&token)).await;

        match map_response::<UserEnvelope>(raw) {
            Ok(user) => Ok(Some(user)),
            // The remembered token is no longer accepted; forget it.
            Err(SessionError::StatusCode(401 | 403)) => {
                tracing::info!("remembered credential rejected; clearing it");
                self.id_token.lock().await.take();
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    #[tracing::instrument(name = "login", skip_all, fields(provider = %credential.provider))]
    async fn login(&self, credential: Credential) -> ApiResult<User> {
        let url = endpoint(&self.base_url, &["login"])?;
        let raw = fetch(self.http.post(url).json(&LoginRequest::from(&credential))).await;
        let status = raw.status;

        let user = map_response::<UserEnvelope>(raw).inspect_err(|err| {
            tracing::warn!(status, error = %err, "login request failed");
        })?;

        *self.id_token.lock().await = Some(credential.id_token);
        tracing::info!(uid = %user.uid, "login accepted");
        Ok(user)
    }
}
