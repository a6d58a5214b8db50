// Explicit application-session context holding the signed-in user.

use tokio::sync::watch;

use crate::domain::User;

/// Created when an application session starts and torn down with `end`.
/// Only the login flow writes to it; everything else reads or subscribes.
#[derive(Debug)]
pub struct UserSession {
    user_tx: watch::Sender<Option<User>>,
}

impl Default for UserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSession {
    pub fn new() -> Self {
        Self {
            user_tx: watch::Sender::new(None),
        }
    }

    /// Stores the user if the session has none yet. Returns false (and keeps the
    /// existing user) when a user is already established.
    pub fn establish(&self, user: User) -> bool {
        self.user_tx.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(user);
            true
        })
    }

    pub fn current(&self) -> Option<User> {
        self.user_tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_tx.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user_tx.subscribe()
    }

    /// Ends the session, returning the user that was signed in.
    pub fn end(&self) -> Option<User> {
        let previous = self.user_tx.send_replace(None);
        if let Some(user) = &previous {
            tracing::info!(uid = %user.uid, "user session ended");
        }
        previous
    }
}
