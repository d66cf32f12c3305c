//! Client session state
//!
//! A single process-wide container mirrors the authenticated session:
//! current user, token, and flags. All mutation goes through pure
//! transition functions on [`SessionState`], and the async operations on
//! [`SessionStore`] apply exactly one transition per exit path, so the
//! invariants (authenticated implies user+token, failures clear identity
//! atomically, loading always resets) hold by construction.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{ApiClient, ApiClientError};

/// The slice of the user profile the session layer keeps around.
/// Extra fields in server payloads are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Authentication state as the frontend sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<SessionUser>,
    pub auth_token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl SessionState {
    /// An operation started its network call.
    pub fn operation_started(mut self) -> Self {
        self.is_loading = true;
        self.error_message = None;
        self
    }

    /// Login resolved successfully.
    pub fn login_succeeded(self, user: SessionUser, token: String) -> Self {
        Self {
            current_user: Some(user),
            auth_token: Some(token),
            is_authenticated: true,
            is_loading: false,
            error_message: None,
        }
    }

    /// Login failed: identity fields clear together, the message is kept
    /// for display.
    pub fn login_failed(self, message: String) -> Self {
        Self {
            current_user: None,
            auth_token: None,
            is_authenticated: false,
            is_loading: false,
            error_message: Some(message),
        }
    }

    /// Logout: everything resets.
    pub fn logged_out(self) -> Self {
        Self::default()
    }

    /// A session check confirmed the token still maps to a live user.
    pub fn session_verified(self, user: SessionUser, token: String) -> Self {
        Self {
            current_user: Some(user),
            auth_token: Some(token),
            is_authenticated: true,
            is_loading: false,
            error_message: None,
        }
    }

    /// A session check failed; the stale identity is dropped.
    pub fn session_rejected(self) -> Self {
        Self {
            current_user: None,
            auth_token: None,
            is_authenticated: false,
            is_loading: false,
            error_message: None,
        }
    }

    /// Restore the persisted subset. The session is not authenticated
    /// until a check confirms the token is still good.
    pub fn rehydrated(user: Option<SessionUser>, token: Option<String>) -> Self {
        Self {
            current_user: user,
            auth_token: token,
            is_authenticated: false,
            is_loading: false,
            error_message: None,
        }
    }
}

/// The subset of session state that survives a restart.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    pub current_user: Option<SessionUser>,
    pub auth_token: Option<String>,
}

impl From<&SessionState> for PersistedSession {
    fn from(state: &SessionState) -> Self {
        Self {
            current_user: state.current_user.clone(),
            auth_token: state.auth_token.clone(),
        }
    }
}

/// Process-wide session store.
pub struct SessionStore {
    state: Mutex<SessionState>,
    api: ApiClient,
    persist_path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a store with empty state and no persistence.
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            api,
            persist_path: None,
        }
    }

    /// Create a store that persists its identity subset to `path`,
    /// rehydrating from an existing snapshot if one is readable.
    pub fn with_persistence(api: ApiClient, path: PathBuf) -> Self {
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(saved) => SessionState::rehydrated(saved.current_user, saved.auth_token),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session snapshot: {}", e);
                    SessionState::default()
                }
            },
            Err(_) => SessionState::default(),
        };

        Self {
            state: Mutex::new(state),
            api,
            persist_path: Some(path),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.lock().expect("session state poisoned").clone()
    }

    fn apply(&self, transition: impl FnOnce(SessionState) -> SessionState) {
        let mut guard = self.state.lock().expect("session state poisoned");
        let next = transition(std::mem::take(&mut *guard));
        *guard = next;
    }

    /// Write the persisted subset. Disk trouble is logged, never surfaced:
    /// authentication outcomes do not depend on the snapshot.
    fn persist(&self) {
        let Some(path) = &self.persist_path else {
            return;
        };

        let snapshot = PersistedSession::from(&self.state());
        match serde_json::to_string(&snapshot) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(path, raw) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }

    /// Authenticate against the API. Concurrent logins are not serialized;
    /// the last call to complete determines the final state.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiClientError> {
        self.apply(SessionState::operation_started);

        match self.api.login(email, password).await {
            Ok(result) => {
                self.apply(|s| s.login_succeeded(result.current_user, result.auth_token));
                self.persist();
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.apply(|s| s.login_failed(message));
                self.persist();
                Err(e)
            }
        }
    }

    /// Drop the session immediately. No network call: in-flight requests
    /// cannot resurrect the cleared identity through this path.
    pub fn logout(&self) {
        self.apply(SessionState::logged_out);
        self.persist();
    }

    /// Re-validate the persisted token against the server. Returns whether
    /// the session is authenticated afterwards; any failure (auth or
    /// transport) drops the stale identity.
    pub async fn check_session(&self) -> bool {
        let token = match self.state().auth_token {
            Some(token) => token,
            None => return false,
        };

        self.apply(SessionState::operation_started);

        match self.api.verify_session(&token).await {
            Ok(user) => {
                self.apply(|s| s.session_verified(user, token));
                self.persist();
                true
            }
            Err(e) => {
                tracing::debug!("Session check failed: {}", e);
                self.apply(SessionState::session_rejected);
                self.persist();
                false
            }
        }
    }
}
