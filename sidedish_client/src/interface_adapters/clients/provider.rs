use crate::domain::{AuthConfiguration, Credential, CredentialExchange, ProviderConfigSource};

pub const GOOGLE_PROVIDER_ID: &str = "google.com";

// Builds the application credential locally from the provider tokens.
#[derive(Debug, Clone)]
pub struct ProviderCredentialExchange {
    provider: String,
}

impl ProviderCredentialExchange {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    pub fn google() -> Self {
        Self::new(GOOGLE_PROVIDER_ID)
    }
}

impl CredentialExchange for ProviderCredentialExchange {
    fn credential(&self, id_token: &str, access_token: &str) -> Credential {
        Credential {
            provider: self.provider.clone(),
            id_token: id_token.to_string(),
            access_token: access_token.to_string(),
        }
    }
}

// Provider registration read once from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticProviderConfig {
    client_id: Option<String>,
}

impl StaticProviderConfig {
    pub fn new(client_id: Option<String>) -> Self {
        Self { client_id }
    }
}

impl ProviderConfigSource for StaticProviderConfig {
    fn configuration(&self) -> Option<AuthConfiguration> {
        self.client_id.clone().and_then(|id| AuthConfiguration::new(id))
    }
}
