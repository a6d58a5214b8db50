use async_trait::async_trait;

use crate::domain::auth::{AuthConfiguration, Credential, ProviderUser, User};
use crate::domain::errors::{ApiResult, SessionError};
use crate::domain::menu::{MenuCategory, MenuDetail, MenuSummary};

// Port for the menu backend. Each call is a single request/response pair.
#[async_trait]
pub trait SidedishRepository: Send + Sync {
    async fn load_menu(&self, category: MenuCategory) -> ApiResult<Vec<MenuSummary>>;
    async fn load_detail(&self, hash: &str) -> ApiResult<MenuDetail>;
}

// Port for the application login backend.
#[async_trait]
pub trait LoginRepository: Send + Sync {
    // Silent restore of a previously known user; `Ok(None)` when nobody is signed in.
    async fn current_user(&self) -> ApiResult<Option<User>>;
    async fn login(&self, credential: Credential) -> ApiResult<User>;
}

// Port for reading the sign-in provider registration.
pub trait ProviderConfigSource: Send + Sync {
    fn configuration(&self) -> Option<AuthConfiguration>;
}

// Port for the third-party sign-in SDK. Runs out of band; the orchestrator feeds
// the outcome back into itself as a provider-user callback.
#[async_trait]
pub trait ExternalSignIn: Send + Sync {
    async fn sign_in(&self, config: AuthConfiguration)
    -> Result<Option<ProviderUser>, SessionError>;
}

// Port turning provider tokens into an application credential.
pub trait CredentialExchange: Send + Sync {
    fn credential(&self, id_token: &str, access_token: &str) -> Credential;
}
