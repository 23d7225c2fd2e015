use std::sync::atomic::{AtomicU64, Ordering};

use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::{
    client::{api::AuthApi, error::ClientError, storage::TokenStorage},
    model::user::{LoginRequest, ProfilePatch, RegisterRequest, Role, UserDto},
};

/// Current authentication state: the identity and the token it was issued with.
///
/// A session is authenticated only when both an identity and a non-empty token are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<UserDto>,
    token: Option<String>,
}

impl Session {
    pub fn authenticated(identity: UserDto, token: impl Into<String>) -> Self {
        Self {
            identity: Some(identity),
            token: Some(token.into()),
        }
    }

    pub fn identity(&self) -> Option<&UserDto> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.token().is_some()
    }
}

/// Bearer token of a session, tagged with the session generation it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bearer {
    token: String,
    generation: u64,
}

impl Bearer {
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Owner of the session and of its persisted token.
///
/// Every mutation runs inside the watch channel's write lock, which serializes them and keeps
/// the persisted token in step with the in-memory session. A generation counter, bumped under
/// that lock whenever the session is replaced (login, logout, restore, teardown), lets
/// responses that were issued against an older session be discarded: a profile update that
/// resolves after a logout never brings the identity back.
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    state: watch::Sender<Session>,
    generation: AtomicU64,
}

impl<A, S> SessionStore<A, S>
where
    A: AuthApi,
    S: TokenStorage,
{
    pub fn new(api: A, storage: S) -> Self {
        let (state, _) = watch::channel(Session::default());

        Self {
            api,
            storage,
            state,
            generation: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver notified on every session change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Bearer token of the current session, if authenticated
    pub fn bearer(&self) -> Option<Bearer> {
        let session = self.state.borrow();
        if !session.is_authenticated() {
            return None;
        }

        session.token().map(|token| Bearer {
            token: token.to_string(),
            generation: self.generation.load(Ordering::SeqCst),
        })
    }

    /// Log out because the API rejected `bearer`. Ignored when the session it was taken from
    /// has already been replaced.
    pub fn reject(&self, bearer: &Bearer) {
        self.expire(bearer.generation);
    }

    /// Restore the session from the persisted token.
    ///
    /// Never fails: any problem leaves the session unauthenticated. An invalid or expired
    /// token is removed from storage; on a network failure the token is kept so a later start
    /// can try again, but nothing is retried now. If the session is replaced while the token
    /// is being validated (e.g. the user logs in), the restored identity is discarded.
    pub async fn init(&self) -> Session {
        let generation = {
            let _session = self.state.borrow();
            self.generation.load(Ordering::SeqCst)
        };

        let token = match self.storage.load() {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return self.session(),
            Err(e) => {
                tracing::warn!("Failed to read persisted token, starting logged out: {}", e);

                return self.session();
            }
        };

        match self.api.validate_token(&token).await {
            Ok(identity) => {
                let user_id = identity.id.clone();
                let role = identity.role;

                let restored = self.state.send_if_modified(|session| {
                    if self.generation.load(Ordering::SeqCst) != generation {
                        return false;
                    }
                    self.generation.fetch_add(1, Ordering::SeqCst);
                    *session = Session::authenticated(identity, token);
                    true
                });

                if restored {
                    tracing::info!(user_id = %user_id, role = %role, "Restored session");
                } else {
                    tracing::debug!("Session changed while validating persisted token");
                }
            }
            Err(ClientError::Unauthorized) => {
                tracing::debug!("Persisted token is invalid or expired");

                self.state.send_if_modified(|_| {
                    if self.generation.load(Ordering::SeqCst) == generation {
                        self.clear_persisted();
                    }
                    false
                });
            }
            Err(e) => {
                tracing::warn!("Failed to validate persisted token, starting logged out: {}", e);
            }
        }

        self.session()
    }

    /// Log in with email and password.
    ///
    /// On success the identity and token replace the current session and the token is
    /// persisted. On failure the session is left untouched.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The logged in identity
    /// - `Err(ClientError::InvalidCredentials)` - Credentials rejected
    /// - `Err(ClientError::Network)` - API unreachable
    pub async fn login(&self, credentials: &LoginRequest) -> Result<UserDto, ClientError> {
        let response = self.api.login(credentials).await?;
        let identity = response.user.clone();

        self.state.send_modify(|session| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.persist(&response.token);
            *session = Session::authenticated(response.user, response.token);
        });

        tracing::info!(user_id = %identity.id, role = %identity.role, "User logged in");

        Ok(identity)
    }

    /// Create an account. The session is not touched; the user logs in afterwards.
    pub async fn register(&self, fields: &RegisterRequest) -> Result<UserDto, ClientError> {
        let identity = self.api.register(fields).await?;

        tracing::info!(user_id = %identity.id, role = %identity.role, "Registered account");

        Ok(identity)
    }

    /// Update the current user's profile.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Updated identity, now held by the session
    /// - `Err(ClientError::NotAuthenticated)` - No session to update
    /// - `Err(ClientError::Unauthorized)` - Token rejected; the session has been logged out
    /// - `Err(ClientError::SessionChanged)` - The session ended or was replaced while the
    ///   request was in flight; the response was discarded
    /// - `Err(ClientError)` - Any other API failure, session unchanged
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<UserDto, ClientError> {
        let (user_id, token, generation) = {
            let session = self.state.borrow();
            match (session.identity(), session.token()) {
                (Some(identity), Some(token)) => (
                    identity.id.clone(),
                    token.to_string(),
                    self.generation.load(Ordering::SeqCst),
                ),
                _ => return Err(ClientError::NotAuthenticated),
            }
        };

        let identity = match self.api.update_profile(&token, &user_id, patch).await {
            Ok(identity) => identity,
            Err(ClientError::Unauthorized) => {
                self.expire(generation);

                return Err(ClientError::Unauthorized);
            }
            Err(e) => return Err(e),
        };

        let applied = self.state.send_if_modified(|session| {
            if self.generation.load(Ordering::SeqCst) != generation || !session.is_authenticated()
            {
                return false;
            }
            self.persist(&token);
            session.identity = Some(identity.clone());
            true
        });

        if !applied {
            tracing::debug!(user_id = %user_id, "Discarding profile update for an ended session");

            return Err(ClientError::SessionChanged);
        }

        Ok(identity)
    }

    /// Clear the session and the persisted token. Safe to call when already logged out.
    pub fn logout(&self) {
        let logged_out = self.state.send_if_modified(|session| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.clear_persisted();

            let changed = *session != Session::default();
            *session = Session::default();
            changed
        });

        if logged_out {
            tracing::info!("User logged out");
        }
    }

    /// Drop the in-memory session on shutdown, keeping the persisted token for the next start.
    pub fn teardown(&self) {
        self.state.send_if_modified(|session| {
            self.generation.fetch_add(1, Ordering::SeqCst);

            let changed = *session != Session::default();
            *session = Session::default();
            changed
        });
    }

    /// Log out in response to a rejected token, unless the session was already replaced.
    fn expire(&self, generation: u64) {
        let expired = self.state.send_if_modified(|session| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.clear_persisted();
            *session = Session::default();
            true
        });

        if expired {
            tracing::info!("Session expired, user logged out");
        }
    }

    // Storage failures are logged rather than surfaced: the in-memory session stays usable
    // for the lifetime of the process.
    fn persist(&self, token: &str) {
        if let Err(e) = self.storage.store(token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
    }

    fn clear_persisted(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear persisted session token: {}", e);
        }
    }
}
