//! Durable credential storage behind a small trait so the session state
//! machine can be tested without a browser. The wasm implementation uses
//! `localStorage` under two fixed keys; missing either key counts as no
//! stored session, so a partial write never restores as authenticated.

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Token pair persisted across page loads.
pub struct PersistedCredential {
    pub access_token: String,
    pub refresh_token: String,
}

/// Durable per-origin storage for the credential pair.
///
/// Implementations must treat the pair as a unit: `load` returns a credential
/// only when both tokens are present, and `clear` removes both.
pub trait CredentialStore {
    fn load(&self) -> Option<PersistedCredential>;
    fn save(&self, credential: &PersistedCredential);
    fn clear(&self);
}

/// A shared reference to a store is itself a store, so callers can keep
/// ownership while a session manager borrows it.
impl<S: CredentialStore> CredentialStore for &S {
    fn load(&self) -> Option<PersistedCredential> {
        (**self).load()
    }

    fn save(&self, credential: &PersistedCredential) {
        (**self).save(credential)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// `localStorage`-backed store used by the running app.
#[cfg(target_arch = "wasm32")]
pub struct BrowserCredentialStore;

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<PersistedCredential> {
        let storage = local_storage()?;
        let access_token = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
        let refresh_token = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten()?;
        Some(PersistedCredential {
            access_token,
            refresh_token,
        })
    }

    fn save(&self, credential: &PersistedCredential) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &credential.access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &credential.refresh_token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
