//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount from `localStorage` and exposes derived auth signals
//! for routes. Only the access token and phone number are stored; one-time
//! codes never leave the entry widget.

use crate::features::auth::types::AuthSession;
use leptos::prelude::*;

const STORAGE_TOKEN_KEY: &str = "suuq_session_token";
const STORAGE_PHONE_KEY: &str = "suuq_session_phone";

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<AuthSession>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<AuthSession>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Updates the in-memory session after verification and mirrors it to storage.
    pub fn set_session(&self, session: AuthSession) {
        persist_session(&session);
        self.session.set(Some(session));
    }

    /// Clears the in-memory session and the stored copy, typically on sign-out.
    pub fn clear_session(&self) {
        clear_stored_session();
        self.session.set(None);
    }
}

/// Provides auth context, hydrated from `localStorage` once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(stored_session());
    let auth = AuthContext::new(session);
    provide_context(auth.clone());

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}

fn stored_session() -> Option<AuthSession> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;
    let access_token = storage.get_item(STORAGE_TOKEN_KEY).ok().flatten()?;
    let phone = storage.get_item(STORAGE_PHONE_KEY).ok().flatten()?;
    if access_token.is_empty() {
        return None;
    }
    Some(AuthSession {
        access_token,
        phone,
    })
}

fn persist_session(session: &AuthSession) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(STORAGE_TOKEN_KEY, &session.access_token);
        let _ = storage.set_item(STORAGE_PHONE_KEY, &session.phone);
    }
}

fn clear_stored_session() {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.remove_item(STORAGE_TOKEN_KEY);
        let _ = storage.remove_item(STORAGE_PHONE_KEY);
    }
}
