//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount from the persisted token pair and exposes derived
//! auth signals for guards and routes. All mutations funnel through the
//! [`SessionManager`]; no component writes the session signal directly.

use crate::features::auth::client::HttpAuthApi;
use crate::features::auth::session::{AuthOutcome, Session, SessionManager, SessionStatus};
use crate::features::auth::storage::BrowserCredentialStore;
use crate::features::auth::types::Identity;
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    session: RwSignal<Session>,
    pub initializing: Signal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Session>) -> Self {
        let initializing =
            Signal::derive(move || session.get().status() == SessionStatus::Initializing);
        let is_authenticated = Signal::derive(move || session.get().is_authenticated());
        let is_admin = Signal::derive(move || session.get().is_admin());
        Self {
            session,
            initializing,
            is_authenticated,
            is_admin,
        }
    }

    /// Current user identity, tracked reactively.
    pub fn user(&self) -> Option<Identity> {
        self.session.get().user().cloned()
    }

    /// Access token for request wiring. Untracked: consumers re-fetch through
    /// their own signals, not because the token changed.
    pub fn access_token(&self) -> Option<String> {
        self.session
            .get_untracked()
            .access_token()
            .map(str::to_string)
    }

    /// Runs the stored-credential check. Called once by the provider.
    pub async fn initialize(self) {
        let mut manager = self.manager();
        manager.initialize().await;
        self.session.set(manager.into_session());
    }

    pub async fn login(self, email: String, password: String) -> AuthOutcome {
        let mut manager = self.manager();
        let outcome = manager.login(&email, &password).await;
        self.session.set(manager.into_session());
        outcome
    }

    pub async fn register(self, email: String, password: String) -> AuthOutcome {
        // Registration never mutates the session, so nothing is written back.
        self.manager().register(&email, &password).await
    }

    pub async fn logout(self) {
        let mut manager = self.manager();
        manager.logout().await;
        self.session.set(manager.into_session());
    }

    fn manager(&self) -> SessionManager<HttpAuthApi, BrowserCredentialStore> {
        SessionManager::with_session(
            HttpAuthApi,
            BrowserCredentialStore,
            self.session.get_untracked(),
        )
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::initializing());
    let auth = AuthContext::new(session);
    provide_context(auth);

    spawn_local(async move {
        auth.initialize().await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(Session::anonymous())))
}
