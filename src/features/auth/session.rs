//! The client-side session state machine. `SessionManager` is the only writer
//! of persisted credentials and of the in-memory access token; UI code reads
//! the resulting [`Session`] and renders role-gated controls from it on every
//! pass. The manager is generic over its API transport and credential store so
//! the transitions can be exercised natively in tests.

use crate::app_lib::AppError;
use crate::features::auth::storage::{CredentialStore, PersistedCredential};
use crate::features::auth::types::{Identity, LoginRequest, LoginResponse, RegisterRequest};
use async_trait::async_trait;

/// Auth endpoints the session machine depends on.
///
/// `?Send` because wasm futures are not `Send`; native test doubles run on a
/// current-thread runtime.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Identity lookup with the given bearer access token. Any non-2xx means
    /// the stored session is invalid.
    async fn identity(&self, access_token: &str) -> Result<Identity, AppError>;
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;
    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError>;
    async fn logout(&self, refresh_token: &str) -> Result<(), AppError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// The stored-credential check has not finished yet.
    Initializing,
    Anonymous,
    Authenticated,
}

/// Current authentication state.
///
/// Fields are private so `Authenticated` can exist only with both a user and
/// an access token present.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    user: Option<Identity>,
    access_token: Option<String>,
    status: SessionStatus,
}

impl Session {
    pub fn initializing() -> Self {
        Self {
            user: None,
            access_token: None,
            status: SessionStatus::Initializing,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            access_token: None,
            status: SessionStatus::Anonymous,
        }
    }

    fn authenticated(user: Identity, access_token: String) -> Self {
        Self {
            user: Some(user),
            access_token: Some(access_token),
            status: SessionStatus::Authenticated,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Role gate for admin-only UI. Must be consulted on the current session
    /// value at render time, never cached.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Identity::is_admin)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initializing()
    }
}

/// Discriminated result of `login` and `register`.
///
/// Failures are values, not errors: callers render the reason inline instead
/// of unwinding the view tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }
}

/// Owns the session and drives its transitions.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    session: Session,
}

impl<A: AuthApi, S: CredentialStore> SessionManager<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self::with_session(api, store, Session::initializing())
    }

    /// Resumes the machine from an externally held session value. The Leptos
    /// context uses this to run one operation against the signal's current
    /// state and write the result back.
    pub fn with_session(api: A, store: S, session: Session) -> Self {
        Self {
            api,
            store,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Restores a session from persisted credentials, once per page load.
    ///
    /// Ends Anonymous unless both tokens are stored and the identity lookup
    /// accepts the access token. Lookup failures are swallowed: an expired
    /// token on reload is the normal case, not an error the user should see.
    pub async fn initialize(&mut self) {
        let Some(credential) = self.store.load() else {
            self.session = Session::anonymous();
            return;
        };

        match self.api.identity(&credential.access_token).await {
            Ok(user) => {
                self.session = Session::authenticated(user, credential.access_token);
            }
            Err(err) => {
                tracing::debug!(error = %err, "session restore failed, clearing stored credentials");
                self.store.clear();
                self.session = Session::anonymous();
            }
        }
    }

    /// Exchanges credentials for a token pair and identity.
    ///
    /// On success the persisted pair, the in-memory token, and the user are
    /// set together. On failure the session is left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> AuthOutcome {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            Ok(response) => {
                self.store.save(&PersistedCredential {
                    access_token: response.access_token.clone(),
                    refresh_token: response.refresh_token,
                });
                self.session = Session::authenticated(response.user, response.access_token);
                AuthOutcome::Success
            }
            Err(err) => AuthOutcome::Failure(err.user_message("Login failed")),
        }
    }

    /// Creates an account. Never touches the session; the user signs in
    /// afterwards.
    pub async fn register(&self, email: &str, password: &str) -> AuthOutcome {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.register(&request).await {
            Ok(()) => AuthOutcome::Success,
            Err(err) => AuthOutcome::Failure(err.user_message("Registration failed")),
        }
    }

    /// Ends the session. The server call is best effort; local state and
    /// persisted tokens are cleared no matter what, so this always terminates
    /// Anonymous.
    pub async fn logout(&mut self) {
        if let Some(credential) = self.store.load() {
            if let Err(err) = self.api.logout(&credential.refresh_token).await {
                tracing::warn!(error = %err, "logout request failed, clearing session anyway");
            }
        }

        self.store.clear();
        self.session = Session::anonymous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::Role;
    use std::cell::RefCell;

    /// In-memory credential store recording every write.
    #[derive(Default)]
    struct MemoryStore {
        credential: RefCell<Option<PersistedCredential>>,
    }

    impl MemoryStore {
        fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
            Self {
                credential: RefCell::new(Some(PersistedCredential {
                    access_token: access_token.to_string(),
                    refresh_token: refresh_token.to_string(),
                })),
            }
        }
    }

    impl CredentialStore for MemoryStore {
        fn load(&self) -> Option<PersistedCredential> {
            self.credential.borrow().clone()
        }

        fn save(&self, credential: &PersistedCredential) {
            *self.credential.borrow_mut() = Some(credential.clone());
        }

        fn clear(&self) {
            *self.credential.borrow_mut() = None;
        }
    }

    /// Scripted API double. Each endpoint either succeeds with a canned value
    /// or fails with a canned error, and calls are counted.
    struct FakeApi {
        identity: Result<Identity, AppError>,
        login: Result<LoginResponse, AppError>,
        register: Result<(), AppError>,
        logout: Result<(), AppError>,
        identity_calls: RefCell<u32>,
        logout_tokens: RefCell<Vec<String>>,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                identity: Err(AppError::Http {
                    status: 401,
                    message: r#"{"error":"Invalid token"}"#.to_string(),
                }),
                login: Err(AppError::Http {
                    status: 401,
                    message: r#"{"error":"Invalid credentials"}"#.to_string(),
                }),
                register: Ok(()),
                logout: Ok(()),
                identity_calls: RefCell::new(0),
                logout_tokens: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for &FakeApi {
        async fn identity(&self, _access_token: &str) -> Result<Identity, AppError> {
            *self.identity_calls.borrow_mut() += 1;
            self.identity.clone()
        }

        async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, AppError> {
            self.login.clone()
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<(), AppError> {
            self.register.clone()
        }

        async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
            self.logout_tokens
                .borrow_mut()
                .push(refresh_token.to_string());
            self.logout.clone()
        }
    }

    fn user(email: &str) -> Identity {
        Identity {
            email: email.to_string(),
            role: Role::User,
        }
    }

    fn admin(email: &str) -> Identity {
        Identity {
            email: email.to_string(),
            role: Role::Admin,
        }
    }

    fn login_response(access: &str, refresh: &str, identity: Identity) -> LoginResponse {
        LoginResponse {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            user: identity,
        }
    }

    #[tokio::test]
    async fn initialize_without_stored_tokens_is_anonymous() {
        let api = FakeApi::default();
        let store = MemoryStore::default();
        let mut manager = SessionManager::new(&api, &store);

        manager.initialize().await;

        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(manager.session().access_token().is_none());
        // No stored credential means no network round trip.
        assert_eq!(*api.identity_calls.borrow(), 0);
    }

    #[tokio::test]
    async fn initialize_with_valid_tokens_authenticates() {
        let api = FakeApi {
            identity: Ok(user("a@b.com")),
            ..FakeApi::default()
        };
        let store = MemoryStore::with_tokens("T1", "R1");
        let mut manager = SessionManager::new(&api, &store);

        manager.initialize().await;

        let session = manager.session();
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.access_token(), Some("T1"));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("a@b.com"));
        assert!(store.load().is_some());
    }

    #[tokio::test]
    async fn initialize_with_rejected_token_clears_credentials() {
        let api = FakeApi::default();
        let store = MemoryStore::with_tokens("expired", "R1");
        let mut manager = SessionManager::new(&api, &store);

        manager.initialize().await;

        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(store.load().is_none());

        // Idempotent: a second pass stays anonymous without calling out again.
        manager.initialize().await;
        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert_eq!(*api.identity_calls.borrow(), 1);
    }

    #[tokio::test]
    async fn initialize_treats_network_failure_as_not_authenticated() {
        let api = FakeApi {
            identity: Err(AppError::Network("connection refused".to_string())),
            ..FakeApi::default()
        };
        let store = MemoryStore::with_tokens("T1", "R1");
        let mut manager = SessionManager::new(&api, &store);

        manager.initialize().await;

        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn login_failure_leaves_session_unchanged() {
        let api = FakeApi::default();
        let store = MemoryStore::default();
        let mut manager =
            SessionManager::with_session(&api, &store, Session::anonymous());

        let outcome = manager.login("a@b.com", "wrongpw").await;

        assert_eq!(
            outcome,
            AuthOutcome::Failure("Invalid credentials".to_string())
        );
        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn login_success_persists_tokens_and_authenticates() {
        let api = FakeApi {
            login: Ok(login_response("T1", "R1", user("a@b.com"))),
            ..FakeApi::default()
        };
        let store = MemoryStore::default();
        let mut manager =
            SessionManager::with_session(&api, &store, Session::anonymous());

        let outcome = manager.login("a@b.com", "correctpw").await;

        assert!(outcome.is_success());
        let session = manager.session();
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.user().map(|u| u.role), Some(Role::User));
        assert_eq!(session.access_token(), Some("T1"));

        let stored = store.load().expect("credential should be persisted");
        assert_eq!(stored.access_token, "T1");
        assert_eq!(stored.refresh_token, "R1");
    }

    #[tokio::test]
    async fn login_then_logout_ends_anonymous_with_no_tokens() {
        let api = FakeApi {
            login: Ok(login_response("T1", "R1", user("a@b.com"))),
            ..FakeApi::default()
        };
        let store = MemoryStore::default();
        let mut manager =
            SessionManager::with_session(&api, &store, Session::anonymous());

        assert!(manager.login("a@b.com", "correctpw").await.is_success());
        manager.logout().await;

        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(manager.session().user().is_none());
        assert!(manager.session().access_token().is_none());
        assert!(store.load().is_none());
        // The server was notified with the stored refresh token.
        assert_eq!(*api.logout_tokens.borrow(), vec!["R1".to_string()]);
    }

    #[tokio::test]
    async fn logout_clears_even_when_server_is_unreachable() {
        let api = FakeApi {
            logout: Err(AppError::Network("connection refused".to_string())),
            ..FakeApi::default()
        };
        let store = MemoryStore::with_tokens("T1", "R1");
        let mut manager = SessionManager::with_session(
            &api,
            &store,
            Session::authenticated(user("a@b.com"), "T1".to_string()),
        );

        manager.logout().await;

        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn logout_without_stored_credential_skips_server_call() {
        let api = FakeApi::default();
        let store = MemoryStore::default();
        let mut manager = SessionManager::with_session(
            &api,
            &store,
            Session::authenticated(user("a@b.com"), "T1".to_string()),
        );

        manager.logout().await;

        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(api.logout_tokens.borrow().is_empty());
    }

    #[tokio::test]
    async fn register_does_not_touch_session_or_store() {
        let api = FakeApi::default();
        let store = MemoryStore::default();
        let manager = SessionManager::with_session(&api, &store, Session::anonymous());

        let outcome = manager.register("new@b.com", "pw12345678").await;

        assert!(outcome.is_success());
        assert_eq!(manager.session().status(), SessionStatus::Anonymous);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn register_failure_surfaces_server_reason() {
        let api = FakeApi {
            register: Err(AppError::Http {
                status: 409,
                message: r#"{"error":"Email already registered"}"#.to_string(),
            }),
            ..FakeApi::default()
        };
        let store = MemoryStore::default();
        let manager = SessionManager::with_session(&api, &store, Session::anonymous());

        let outcome = manager.register("dup@b.com", "pw12345678").await;

        assert_eq!(
            outcome,
            AuthOutcome::Failure("Email already registered".to_string())
        );
    }

    #[tokio::test]
    async fn user_role_never_gates_as_admin() {
        let api = FakeApi {
            login: Ok(login_response("T1", "R1", user("a@b.com"))),
            ..FakeApi::default()
        };
        let store = MemoryStore::default();
        let mut manager =
            SessionManager::with_session(&api, &store, Session::anonymous());

        assert!(!manager.session().is_admin());
        manager.login("a@b.com", "correctpw").await;
        assert!(!manager.session().is_admin());
        manager.logout().await;
        assert!(!manager.session().is_admin());
    }

    #[tokio::test]
    async fn admin_role_gates_as_admin_only_while_authenticated() {
        let api = FakeApi {
            login: Ok(login_response("T2", "R2", admin("root@b.com"))),
            ..FakeApi::default()
        };
        let store = MemoryStore::default();
        let mut manager =
            SessionManager::with_session(&api, &store, Session::anonymous());

        manager.login("root@b.com", "correctpw").await;
        assert!(manager.session().is_admin());

        manager.logout().await;
        assert!(!manager.session().is_admin());
    }

    #[test]
    fn session_defaults_to_initializing() {
        let session = Session::default();
        assert_eq!(session.status(), SessionStatus::Initializing);
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn borrowed_store_writes_are_visible_on_the_owner() {
        fn save_via<S: CredentialStore>(store: S, credential: &PersistedCredential) {
            store.save(credential);
        }

        let store = MemoryStore::default();
        save_via(
            &store,
            &PersistedCredential {
                access_token: "T1".to_string(),
                refresh_token: "R1".to_string(),
            },
        );

        let loaded = store.load();
        assert_eq!(
            loaded,
            Some(PersistedCredential {
                access_token: "T1".to_string(),
                refresh_token: "R1".to_string(),
            })
        );
    }
}
