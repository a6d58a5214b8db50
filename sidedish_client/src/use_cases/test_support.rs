use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{
    ApiResult, AuthConfiguration, Credential, CredentialExchange, ExternalSignIn, LoginRepository,
    ProviderConfigSource, ProviderUser, SessionError, User,
};

pub(crate) fn test_user(uid: &str) -> User {
    User {
        uid: uid.to_string(),
        display_name: Some("Pilot".to_string()),
        email: Some(format!("{uid}@example.com")),
    }
}

pub(crate) fn provider_user(id_token: &str) -> ProviderUser {
    ProviderUser {
        id_token: Some(id_token.to_string()),
        access_token: format!("access-{id_token}"),
        email: None,
        display_name: None,
    }
}

type LoginScript = HashMap<String, (Duration, ApiResult<User>)>;

// Login backend whose answers are scripted per ID token.
#[derive(Clone)]
pub(crate) struct ScriptedLoginRepository {
    restore: Arc<Mutex<ApiResult<Option<User>>>>,
    restore_delay: Duration,
    logins: Arc<Mutex<LoginScript>>,
    credentials: Arc<Mutex<Vec<Credential>>>,
    restore_calls: Arc<AtomicUsize>,
}

impl ScriptedLoginRepository {
    pub(crate) fn new() -> Self {
        Self {
            restore: Arc::new(Mutex::new(Ok(None))),
            restore_delay: Duration::ZERO,
            logins: Arc::new(Mutex::new(HashMap::new())),
            credentials: Arc::new(Mutex::new(Vec::new())),
            restore_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with_restore(self, result: ApiResult<Option<User>>) -> Self {
        *self.restore.lock().expect("restore mutex poisoned") = result;
        self
    }

    pub(crate) fn with_restore_delay(mut self, delay: Duration) -> Self {
        self.restore_delay = delay;
        self
    }

    pub(crate) fn with_login(
        self,
        id_token: &str,
        delay: Duration,
        result: ApiResult<User>,
    ) -> Self {
        self.logins
            .lock()
            .expect("logins mutex poisoned")
            .insert(id_token.to_string(), (delay, result));
        self
    }

    pub(crate) fn credentials(&self) -> Vec<Credential> {
        self.credentials
            .lock()
            .expect("credentials mutex poisoned")
            .clone()
    }

    pub(crate) fn restore_calls(&self) -> usize {
        self.restore_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginRepository for ScriptedLoginRepository {
    async fn current_user(&self) -> ApiResult<Option<User>> {
        self.restore_calls.fetch_add(1, Ordering::SeqCst);
        if !self.restore_delay.is_zero() {
            tokio::time::sleep(self.restore_delay).await;
        }
        self.restore.lock().expect("restore mutex poisoned").clone()
    }

    async fn login(&self, credential: Credential) -> ApiResult<User> {
        let scripted = self
            .logins
            .lock()
            .expect("logins mutex poisoned")
            .get(&credential.id_token)
            .cloned();
        self.credentials
            .lock()
            .expect("credentials mutex poisoned")
            .push(credential);

        let Some((delay, result)) = scripted else {
            return Err(SessionError::StatusCode(401));
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

// Sign-in SDK stand-in that records every presentation.
#[derive(Clone)]
pub(crate) struct RecordingSignIn {
    outcome: Result<Option<ProviderUser>, SessionError>,
    delay: Duration,
    configs: Arc<Mutex<Vec<AuthConfiguration>>>,
}

impl RecordingSignIn {
    pub(crate) fn returning(outcome: Result<Option<ProviderUser>, SessionError>) -> Self {
        Self {
            outcome,
            delay: Duration::ZERO,
            configs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.configs.lock().expect("configs mutex poisoned").len()
    }

    pub(crate) fn configs(&self) -> Vec<AuthConfiguration> {
        self.configs.lock().expect("configs mutex poisoned").clone()
    }
}

#[async_trait]
impl ExternalSignIn for RecordingSignIn {
    async fn sign_in(
        &self,
        config: AuthConfiguration,
    ) -> Result<Option<ProviderUser>, SessionError> {
        self.configs
            .lock()
            .expect("configs mutex poisoned")
            .push(config);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

// Provider configuration that a test can withdraw or replace mid-flow.
#[derive(Clone)]
pub(crate) struct SwitchableProviderConfig(Arc<Mutex<Option<AuthConfiguration>>>);

impl SwitchableProviderConfig {
    pub(crate) fn new(config: Option<AuthConfiguration>) -> Self {
        Self(Arc::new(Mutex::new(config)))
    }

    pub(crate) fn set(&self, config: Option<AuthConfiguration>) {
        *self.0.lock().expect("config mutex poisoned") = config;
    }
}

impl ProviderConfigSource for SwitchableProviderConfig {
    fn configuration(&self) -> Option<AuthConfiguration> {
        self.0.lock().expect("config mutex poisoned").clone()
    }
}

pub(crate) struct EchoExchange;

impl CredentialExchange for EchoExchange {
    fn credential(&self, id_token: &str, access_token: &str) -> Credential {
        Credential {
            provider: "test".to_string(),
            id_token: id_token.to_string(),
            access_token: access_token.to_string(),
        }
    }
}
