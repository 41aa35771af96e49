//! Authentication context with localStorage persistence.
//!
//! The session is restored from storage when the app boots. A token without
//! a cached user record is decoded into an identity; a token that cannot be
//! decoded is treated as an invalid session and cleared.

use dioxus::prelude::*;

use crate::app::session::{decode_token, Role, User};
use crate::app::storage;

/// Global session state shared via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    token: Signal<Option<String>>,
    user: Signal<Option<User>>,
    /// Whether the storage restore pass has run
    restored: Signal<bool>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        (self.token)().is_some()
    }

    pub fn is_restored(&self) -> bool {
        (self.restored)()
    }

    pub fn token(&self) -> Option<String> {
        (self.token)()
    }

    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    pub fn role(&self) -> Option<Role> {
        (self.user)().and_then(|u| u.role())
    }

    /// Store a fresh session after a successful login
    pub fn login(&self, token: String, user: User) {
        storage::local_set(storage::TOKEN_KEY, &token);
        if let Ok(json) = serde_json::to_string(&user) {
            storage::local_set(storage::USER_KEY, &json);
        }
        let mut t = self.token;
        let mut u = self.user;
        t.set(Some(token));
        u.set(Some(user));
    }

    /// Drop the session and all persisted state
    pub fn logout(&self) {
        storage::local_remove(storage::TOKEN_KEY);
        storage::local_remove(storage::USER_KEY);
        storage::local_remove(storage::REPORT_DRAFT_KEY);
        let mut t = self.token;
        let mut u = self.user;
        t.set(None);
        u.set(None);
    }
}

/// Initialize the auth context provider - call once at the app root
pub fn use_auth_provider() {
    let mut token = use_signal(|| None::<String>);
    let mut user = use_signal(|| None::<User>);
    let mut restored = use_signal(|| false);

    use_context_provider(|| AuthContext {
        token,
        user,
        restored,
    });

    // Client-side only: restore the session from localStorage
    use_effect(move || {
        if let Some(stored_token) = storage::local_get(storage::TOKEN_KEY) {
            let stored_user = storage::local_get(storage::USER_KEY)
                .and_then(|json| serde_json::from_str::<User>(&json).ok());

            match stored_user.or_else(|| decode_token(&stored_token)) {
                Some(u) => {
                    token.set(Some(stored_token));
                    user.set(Some(u));
                }
                None => {
                    // Undecodable token with no cached user: invalid session
                    tracing::warn!("stored session token could not be decoded, clearing it");
                    storage::local_remove(storage::TOKEN_KEY);
                    storage::local_remove(storage::USER_KEY);
                }
            }
        }
        restored.set(true);
    });
}

/// Get the auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
