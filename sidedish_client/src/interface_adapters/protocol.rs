use serde::{Deserialize, Serialize};

use crate::domain::{Credential, MenuDetail, MenuSummary, User};
use crate::use_cases::Envelope;

// Envelope returned by the category listing endpoint.
#[derive(Debug, Deserialize)]
pub struct MenuListEnvelope {
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
    pub body: Vec<MenuSummary>,
}

impl Envelope for MenuListEnvelope {
    type Body = Vec<MenuSummary>;

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn into_body(self) -> Self::Body {
        self.body
    }
}

// Envelope returned by the detail endpoint; the body lives under `data`.
#[derive(Debug, Deserialize)]
pub struct MenuDetailEnvelope {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
    pub data: MenuDetail,
}

impl Envelope for MenuDetailEnvelope {
    type Body = MenuDetail;

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn into_body(self) -> Self::Body {
        self.data
    }
}

// Envelope returned by the login endpoints.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
    pub body: User,
}

impl Envelope for UserEnvelope {
    type Body = User;

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn into_body(self) -> Self::Body {
        self.body
    }
}

// Payload sent to the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub provider: &'a str,
    pub id_token: &'a str,
    pub access_token: &'a str,
}

impl<'a> From<&'a Credential> for LoginRequest<'a> {
    fn from(credential: &'a Credential) -> Self {
        Self {
            provider: &credential.provider,
            id_token: &credential.id_token,
            access_token: &credential.access_token,
        }
    }
}
