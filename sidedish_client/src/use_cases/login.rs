// Login flow orchestration: restores or signs in a user and publishes the outcome.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

use super::latest::{Latest, Ticket};
use super::session::UserSession;
use crate::domain::{
    ApiResult, CredentialExchange, ExternalSignIn, LoginRepository, ProviderConfigSource,
    ProviderUser, SessionError, User,
};

/// Observable state of the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    AwaitingProviderConfig,
    AwaitingExternalSignIn,
    LoggingIn,
    /// Terminal; later actions are ignored.
    Authenticated(User),
    /// Non-fatal; the next action is handled as if the flow were idle.
    Failed(SessionError),
}

/// One-shot notifications for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginSignal {
    PresentMainView,
    LoginFailed(SessionError),
}

/// Outcome delivered by the external sign-in SDK callback.
pub type SignInOutcome = Result<Option<ProviderUser>, SessionError>;

#[derive(Debug, Error)]
#[error("login flow task has stopped")]
pub struct LoginFlowClosed;

// Host-facing actions.
#[derive(Debug)]
enum LoginAction {
    Load,
    TapLogin,
    ProviderUser(SignInOutcome),
}

// Results of work spawned by the login task, tagged with the ticket they were issued for.
#[derive(Debug)]
enum Completion {
    Restored {
        ticket: Ticket,
        result: ApiResult<Option<User>>,
    },
    SignedIn {
        ticket: Ticket,
        outcome: SignInOutcome,
    },
    LoggedIn {
        ticket: Ticket,
        result: ApiResult<User>,
    },
}

/// Collaborators the login flow is wired with.
#[derive(Clone)]
pub struct LoginDeps {
    pub repository: Arc<dyn LoginRepository>,
    pub provider_config: Arc<dyn ProviderConfigSource>,
    pub sign_in: Arc<dyn ExternalSignIn>,
    pub exchange: Arc<dyn CredentialExchange>,
    pub session: Arc<UserSession>,
}

#[derive(Debug, Clone)]
pub struct LoginSettings {
    /// Capacity for queued host actions.
    pub action_channel_capacity: usize,
    /// Capacity for broadcast signals.
    pub signal_broadcast_capacity: usize,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            action_channel_capacity: 32,
            signal_broadcast_capacity: 16,
        }
    }
}

/// Cloneable handle to a running login flow. The task stops once every handle is dropped.
#[derive(Clone)]
pub struct LoginHandle {
    action_tx: mpsc::Sender<LoginAction>,
    state_rx: watch::Receiver<LoginState>,
    signal_tx: broadcast::Sender<LoginSignal>,
}

impl LoginHandle {
    /// Screen loaded: try to restore a previously known user.
    pub async fn load(&self) -> Result<(), LoginFlowClosed> {
        self.send(LoginAction::Load).await
    }

    /// Login button tapped.
    pub async fn tap_login(&self) -> Result<(), LoginFlowClosed> {
        self.send(LoginAction::TapLogin).await
    }

    /// Feeds a sign-in SDK callback into the flow. Supersedes any sign-in still pending.
    pub async fn provider_user(&self, outcome: SignInOutcome) -> Result<(), LoginFlowClosed> {
        self.send(LoginAction::ProviderUser(outcome)).await
    }

    pub fn state(&self) -> LoginState {
        self.state_rx.borrow().clone()
    }

    pub fn watch_state(&self) -> watch::Receiver<LoginState> {
        self.state_rx.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LoginSignal> {
        self.signal_tx.subscribe()
    }

    async fn send(&self, action: LoginAction) -> Result<(), LoginFlowClosed> {
        self.action_tx.send(action).await.map_err(|_| LoginFlowClosed)
    }
}

/// Spawns the login task and returns its handle.
pub fn spawn_login_flow(deps: LoginDeps, settings: LoginSettings) -> LoginHandle {
    let (action_tx, action_rx) = mpsc::channel::<LoginAction>(settings.action_channel_capacity);
    let (completion_tx, completion_rx) = mpsc::unbounded_channel::<Completion>();
    let (state_tx, state_rx) = watch::channel(LoginState::Idle);
    let (signal_tx, _signal_rx) =
        broadcast::channel::<LoginSignal>(settings.signal_broadcast_capacity);

    let flow = LoginFlow {
        deps,
        state_tx,
        signal_tx: signal_tx.clone(),
        completion_tx,
        restore: Latest::default(),
        sign_in: Latest::default(),
        login: Latest::default(),
    };
    tokio::spawn(login_task(action_rx, completion_rx, flow));

    LoginHandle {
        action_tx,
        state_rx,
        signal_tx,
    }
}

async fn login_task(
    mut action_rx: mpsc::Receiver<LoginAction>,
    mut completion_rx: mpsc::UnboundedReceiver<Completion>,
    mut flow: LoginFlow,
) {
    loop {
        tokio::select! {
            action = action_rx.recv() => match action {
                Some(action) => flow.handle_action(action),
                // Every handle is gone; nobody is left to observe the flow.
                None => break,
            },
            Some(completion) = completion_rx.recv() => flow.handle_completion(completion),
        }
    }
    debug!("login flow stopped");
}

struct LoginFlow {
    deps: LoginDeps,
    state_tx: watch::Sender<LoginState>,
    signal_tx: broadcast::Sender<LoginSignal>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    restore: Latest,
    sign_in: Latest,
    login: Latest,
}

impl LoginFlow {
    fn handle_action(&mut self, action: LoginAction) {
        if self.is_authenticated() {
            debug!("already authenticated; action ignored");
            return;
        }
        if self.is_failed() {
            self.publish(LoginState::Idle);
        }

        match action {
            LoginAction::Load => self.start_restore(),
            LoginAction::TapLogin => self.start_sign_in(),
            LoginAction::ProviderUser(outcome) => {
                // A direct callback replaces whatever the SDK task would have delivered.
                self.sign_in.invalidate();
                self.on_provider_user(outcome);
            }
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Restored { ticket, result } => {
                if !self.restore.accept(ticket) || self.is_authenticated() {
                    debug!("stale restore result dropped");
                    return;
                }
                match result {
                    Ok(Some(user)) => {
                        info!(uid = %user.uid, "previous user restored");
                        self.authenticate(user);
                    }
                    Ok(None) => debug!("no previous user to restore"),
                    // Restore is silent: stay idle and let the user sign in explicitly.
                    Err(err) => warn!(error = %err, "silent restore failed"),
                }
            }
            Completion::SignedIn { ticket, outcome } => {
                if !self.sign_in.accept(ticket) || self.is_authenticated() {
                    debug!("stale sign-in result dropped");
                    return;
                }
                self.on_provider_user(outcome);
            }
            Completion::LoggedIn { ticket, result } => {
                if !self.login.accept(ticket) || self.is_authenticated() {
                    debug!("stale login result dropped");
                    return;
                }
                match result {
                    Ok(user) => {
                        info!(uid = %user.uid, "login succeeded");
                        self.authenticate(user);
                    }
                    Err(err) => self.fail(err),
                }
            }
        }
    }

    fn start_restore(&mut self) {
        let ticket = self.restore.begin();
        let repository = Arc::clone(&self.deps.repository);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = repository.current_user().await;
            let _ = completion_tx.send(Completion::Restored { ticket, result });
        });
    }

    fn start_sign_in(&mut self) {
        self.publish(LoginState::AwaitingProviderConfig);

        let Some(config) = self.deps.provider_config.configuration() else {
            warn!("login tapped without a sign-in provider configuration");
            self.sign_in.invalidate();
            self.fail(SessionError::MissingConfiguration);
            return;
        };

        self.publish(LoginState::AwaitingExternalSignIn);
        let ticket = self.sign_in.begin();
        let sign_in = Arc::clone(&self.deps.sign_in);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = sign_in.sign_in(config).await;
            let _ = completion_tx.send(Completion::SignedIn { ticket, outcome });
        });
    }

    fn on_provider_user(&mut self, outcome: SignInOutcome) {
        let provider_user = match outcome {
            Ok(Some(user)) => user,
            Ok(None) => return self.fail(SessionError::MissingCredential),
            Err(err) => return self.fail(err),
        };

        let id_token = match provider_user.id_token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => return self.fail(SessionError::MissingCredential),
        };

        let credential = self
            .deps
            .exchange
            .credential(id_token, &provider_user.access_token);

        self.publish(LoginState::LoggingIn);
        let ticket = self.login.begin();
        let repository = Arc::clone(&self.deps.repository);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = repository.login(credential).await;
            let _ = completion_tx.send(Completion::LoggedIn { ticket, result });
        });
    }

    fn authenticate(&mut self, user: User) {
        if !self.deps.session.establish(user.clone()) {
            warn!(uid = %user.uid, "session already holds a user; keeping it");
        }
        self.restore.invalidate();
        self.sign_in.invalidate();
        self.login.invalidate();

        self.publish(LoginState::Authenticated(user));
        let _ = self.signal_tx.send(LoginSignal::PresentMainView);
    }

    fn fail(&mut self, err: SessionError) {
        warn!(error = %err, "login failed");
        self.publish(LoginState::Failed(err.clone()));
        let _ = self.signal_tx.send(LoginSignal::LoginFailed(err));
    }

    fn publish(&self, state: LoginState) {
        self.state_tx.send_replace(state);
    }

    fn is_authenticated(&self) -> bool {
        matches!(*self.state_tx.borrow(), LoginState::Authenticated(_))
    }

    fn is_failed(&self) -> bool {
        matches!(*self.state_tx.borrow(), LoginState::Failed(_))
    }
}
