//! Authentication session state
//!
//! One [`SessionManager`] exists per application instance. It restores a
//! persisted token at startup, records login and logout, and answers route
//! guards.

pub mod jwt;
pub mod store;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

use crate::client::api::AuthApi;
use crate::client::models::UserProfile;
use crate::error::{Result, SessionError};

pub use store::{ConfigTokenStore, TokenStore};

/// Snapshot of the authentication state
#[derive(Debug, Clone)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    /// True until the persisted credential has been verified or discarded
    pub is_bootstrapping: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_bootstrapping: true,
        }
    }
}

/// Outcome of a protected-route check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Session is still being restored; show a loading state
    Wait,
    Allow,
    RedirectToLogin,
}

/// Owner of the session state and the persisted credential
pub struct SessionManager {
    state: RwLock<Session>,
    store: Arc<dyn TokenStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            state: RwLock::new(Session::default()),
            store,
        }
    }

    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    /// Token as currently persisted. A store that cannot be read counts as empty.
    pub fn stored_token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    /// Restore the session from the persisted token.
    ///
    /// Any failure to verify the token discards it. The state lock is not held
    /// while the profile request is in flight.
    pub async fn bootstrap<A: AuthApi + ?Sized>(&self, api: &A) -> Session {
        let Some(token) = self.stored_token() else {
            debug!("No stored token, starting signed out");
            let mut state = self.state.write().await;
            *state = Session {
                is_bootstrapping: false,
                ..Session::default()
            };
            return state.clone();
        };

        let verified = api.fetch_profile(&token).await;

        let mut state = self.state.write().await;
        match verified {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                *state = Session {
                    user: Some(user),
                    token: Some(token),
                    is_bootstrapping: false,
                };
            }
            Err(e) => {
                warn!("Stored token rejected ({}), signing out", e);
                if let Err(e) = self.store.remove() {
                    warn!("Failed to remove stored token: {}", e);
                }
                *state = Session {
                    is_bootstrapping: false,
                    ..Session::default()
                };
            }
        }
        state.clone()
    }

    /// Persist the token and mark the session authenticated
    pub async fn login(&self, user: UserProfile, token: String) -> Result<()> {
        self.store.save(&token)?;
        info!("Signed in as {}", user.email);

        let mut state = self.state.write().await;
        *state = Session {
            user: Some(user),
            token: Some(token),
            is_bootstrapping: false,
        };
        Ok(())
    }

    /// Forget the token. Navigation is left to the caller.
    pub async fn logout(&self) -> Result<()> {
        self.store.remove()?;
        self.reset().await;
        info!("Signed out");
        Ok(())
    }

    /// The server rejected the credential mid-session
    pub async fn expire(&self) {
        if let Err(e) = self.store.remove() {
            warn!("Failed to remove stored token: {}", e);
        }
        self.reset().await;
    }

    /// Swap in a fresh profile after a profile-affecting mutation
    pub async fn replace_user(&self, user: UserProfile) {
        let mut state = self.state.write().await;
        if state.token.is_some() {
            state.user = Some(user);
        }
    }

    pub async fn guard(&self) -> Guard {
        let state = self.state.read().await;
        if state.is_bootstrapping {
            Guard::Wait
        } else if state.is_authenticated() {
            Guard::Allow
        } else {
            Guard::RedirectToLogin
        }
    }

    /// Current user for commands that need one
    pub async fn require_user(&self) -> Result<UserProfile> {
        match self.guard().await {
            Guard::Allow => {}
            Guard::Wait => return Err(SessionError::Bootstrapping.into()),
            Guard::RedirectToLogin => return Err(SessionError::NotLoggedIn.into()),
        }

        self.state
            .read()
            .await
            .user
            .clone()
            .ok_or_else(|| SessionError::NotLoggedIn.into())
    }

    async fn reset(&self) {
        let mut state = self.state.write().await;
        *state = Session {
            is_bootstrapping: false,
            ..Session::default()
        };
    }
}
