// Domain layer: menu and identity types plus the ports the use cases depend on.

pub mod auth;
pub mod errors;
pub mod menu;
pub mod ports;

pub use auth::{AuthConfiguration, Credential, ProviderUser, User};
pub use errors::{ApiResult, SessionError};
pub use menu::{MenuCategory, MenuDetail, MenuSummary};
pub use ports::{
    CredentialExchange, ExternalSignIn, LoginRepository, ProviderConfigSource, SidedishRepository,
};
