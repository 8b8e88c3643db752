//! Auth session context.
//!
//! A single owned [`Session`] object is provided at the application root
//! and injected into routing and the API client. It is rehydrated from
//! browser localStorage on startup, persisted on login, and cleared on
//! logout. There is no token refresh: a session is valid until logout.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::{AuthResponse, UserProfile};

const STORAGE_KEY: &str = "cyberguard.session";

/// The authenticated user's identity and bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Reactive session context. Cheap to copy; the signal is shared.
#[derive(Clone, Copy)]
pub struct Session {
    current: RwSignal<Option<AuthSession>>,
}

impl Session {
    /// Create the session context, rehydrating persisted credentials.
    pub fn restore() -> Self {
        let persisted = local_storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            current: create_rw_signal(persisted),
        }
    }

    /// Reactive: is a user signed in?
    pub fn is_authenticated(&self) -> bool {
        self.current.with(|s| s.is_some())
    }

    /// Reactive: the signed-in user, if any.
    pub fn user(&self) -> Option<UserProfile> {
        self.current.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Non-reactive token read for outbound requests.
    pub fn token(&self) -> Option<String> {
        self.current
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Store a fresh login and persist it across reloads.
    pub fn login(&self, auth: AuthResponse) {
        let session = AuthSession {
            token: auth.access_token,
            user: auth.user,
        };
        if let Some(storage) = local_storage() {
            if let Ok(raw) = serde_json::to_string(&session) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
        self.current.set(Some(session));
    }

    /// Clear the session and its persisted copy.
    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
        self.current.set(None);
    }
}

/// Fetch the session context provided by [`crate::App`].
pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_session_round_trips_through_json() {
        let session = AuthSession {
            token: "tok".to_string(),
            user: UserProfile {
                id: 4,
                email: "analyst@example.com".to_string(),
                name: "Analyst".to_string(),
                role: "analyst".to_string(),
            },
        };
        let raw = serde_json::to_string(&session).unwrap();
        let back: AuthSession = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, session);
    }
}
