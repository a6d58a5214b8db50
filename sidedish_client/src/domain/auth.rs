use serde::{Deserialize, Serialize};

/// Opaque client identifier from the application's sign-in registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfiguration {
    client_id: String,
}

impl AuthConfiguration {
    /// Returns `None` for a blank identifier; a blank id can never start a sign-in.
    pub fn new(client_id: impl Into<String>) -> Option<Self> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return None;
        }
        Some(Self { client_id })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

// What the external sign-in SDK hands back on its callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderUser {
    pub id_token: Option<String>,
    pub access_token: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

// Application-level credential derived from provider tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub provider: String,
    pub id_token: String,
    pub access_token: String,
}

// Identity returned by the login endpoint; owned by the session once signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
