//! The session store: the single writer of "who is signed in".
//!
//! Responsibilities:
//! - Restoring a persisted identity at startup (and on resync)
//! - Logging in through an [`Authenticator`] and persisting the result
//! - Logging out and removing the persisted entry
//! - Merging profile edits into the current identity
//! - Broadcasting every change to subscribers
//!
//! # Concurrency note
//!
//! Every mutation takes `&mut self`, so two mutations can never
//! interleave on one store. The application shell owns the store behind
//! one async mutex, which also serializes concurrent `login` calls.
//! Readers don't need that lock: they hold a [`watch::Receiver`] from
//! [`SessionStore::subscribe`], which is updated before a mutation
//! returns.

use roadwatch_model::{Codec, Identity, JsonCodec, ProfileUpdate};
use roadwatch_storage::KeyValueStore;
use tokio::sync::watch;

use crate::{Authenticator, Session, SessionConfig, SessionError};

/// Holds the current [`Session`] and keeps durable storage in step.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ restore() ──→ login() ──→ update_profile()* ──→ logout()
///   │           │            │                                 │
///   ▼           ▼            ▼                                 ▼
/// [Anonymous] [Anonymous | Authenticated] [Authenticated]  [Anonymous]
/// ```
///
/// Failures never escape: a rejected login returns `false`, a malformed
/// persisted entry restores as anonymous, and storage write failures
/// are logged while the in-memory session still changes.
pub struct SessionStore<S, A, C = JsonCodec> {
    storage: S,
    auth: A,
    codec: C,
    config: SessionConfig,
    state: watch::Sender<Session>,
}

impl<S, A> SessionStore<S, A, JsonCodec>
where
    S: KeyValueStore,
    A: Authenticator,
{
    /// Creates an anonymous store using the JSON codec.
    ///
    /// Nothing is read from storage until [`restore`](Self::restore).
    pub fn new(storage: S, auth: A, config: SessionConfig) -> Self {
        Self::with_codec(storage, auth, JsonCodec, config)
    }
}

impl<S, A, C> SessionStore<S, A, C>
where
    S: KeyValueStore,
    A: Authenticator,
    C: Codec,
{
    /// Creates an anonymous store with an explicit codec.
    pub fn with_codec(
        storage: S,
        auth: A,
        codec: C,
        config: SessionConfig,
    ) -> Self {
        let (state, _) = watch::channel(Session::Anonymous);
        Self {
            storage,
            auth,
            codec,
            config,
            state,
        }
    }

    /// Reloads the session from durable storage.
    ///
    /// Called once at startup, and again whenever the durable entry may
    /// have been changed by someone else (another window regaining
    /// focus). A missing, unreadable, or malformed entry leaves the
    /// session anonymous; the entry itself is left untouched.
    ///
    /// Returns `true` if an identity was restored.
    pub fn restore(&mut self) -> bool {
        let session = match self.load() {
            Ok(Some(identity)) => {
                tracing::info!(id = %identity.id, "session restored");
                Session::Authenticated(identity)
            }
            Ok(None) => {
                tracing::debug!(key = %self.config.storage_key, "no persisted session");
                Session::Anonymous
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.config.storage_key,
                    error = %e,
                    "ignoring unreadable persisted session"
                );
                Session::Anonymous
            }
        };

        let authenticated = session.is_authenticated();
        self.publish(session);
        authenticated
    }

    /// Attempts to sign in.
    ///
    /// On success the identity becomes current, is written to durable
    /// storage, and `true` is returned. On rejection nothing changes and
    /// `false` is returned.
    pub async fn login(&mut self, handle: &str, secret: &str) -> bool {
        let identity = match self.auth.authenticate(handle, secret).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::info!(%handle, error = %e, "login rejected");
                return false;
            }
        };

        if let Err(e) = self.persist(&identity) {
            tracing::warn!(error = %e, "failed to persist session after login");
        }

        tracing::info!(id = %identity.id, role = %identity.role, "login succeeded");
        self.publish(Session::Authenticated(identity));
        true
    }

    /// Signs out and removes the durable entry. Idempotent.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(&self.config.storage_key) {
            tracing::warn!(error = %e, "failed to remove persisted session");
        }

        if let Session::Authenticated(identity) = self.current() {
            tracing::info!(id = %identity.id, "logged out");
        }
        self.publish(Session::Anonymous);
    }

    /// Merges `update` into the current identity and re-persists it.
    ///
    /// Returns `false` (and touches nothing, storage included) when
    /// nobody is signed in.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        let Session::Authenticated(mut identity) = self.current() else {
            tracing::debug!("profile update ignored: nobody is signed in");
            return false;
        };

        identity.apply(update);

        if let Err(e) = self.persist(&identity) {
            tracing::warn!(error = %e, "failed to persist profile update");
        }

        tracing::info!(id = %identity.id, "profile updated");
        self.publish(Session::Authenticated(identity));
        true
    }

    /// A snapshot of the current session.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// `true` if someone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// A receiver that observes every completed session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// The store's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The backing storage, for inspection.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The authenticator logins are checked against.
    pub fn authenticator(&self) -> &A {
        &self.auth
    }

    fn load(&self) -> Result<Option<Identity>, SessionError> {
        let Some(raw) = self.storage.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        Ok(Some(self.codec.decode(&raw)?))
    }

    fn persist(&mut self, identity: &Identity) -> Result<(), SessionError> {
        let text = self.codec.encode(identity)?;
        self.storage.set(&self.config.storage_key, &text)?;
        Ok(())
    }

    /// Replaces the session, waking subscribers only on a real change.
    fn publish(&self, session: Session) {
        self.state.send_if_modified(|current| {
            if *current == session {
                return false;
            }
            *current = session;
            true
        });
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionStore`, named
    //! `test_{function}_{scenario}_{expected}`.

    use roadwatch_storage::MemoryStore;

    use super::*;
    use crate::{StaticCredentials, default_identity};

    // -- Helpers ----------------------------------------------------------

    type Store = SessionStore<MemoryStore, StaticCredentials>;

    fn store() -> Store {
        store_over(MemoryStore::new())
    }

    fn store_over(storage: MemoryStore) -> Store {
        SessionStore::new(
            storage,
            StaticCredentials::default(),
            SessionConfig::default(),
        )
    }

    fn persisted(store: &Store) -> Option<String> {
        store.storage().get("user").unwrap()
    }

    // =====================================================================
    // login()
    // =====================================================================

    #[tokio::test]
    async fn test_login_accepted_pair_authenticates_and_persists() {
        let mut store = store();

        assert!(store.login("admin", "password123").await);

        assert!(store.is_authenticated());
        assert_eq!(store.current().identity(), Some(&default_identity()));
        let expected = JsonCodec.encode(&default_identity()).unwrap();
        assert_eq!(persisted(&store), Some(expected));
    }

    #[tokio::test]
    async fn test_login_wrong_pair_returns_false_and_changes_nothing() {
        let mut store = store();

        assert!(!store.login("admin", "wrong").await);
        assert!(!store.login("guest", "password123").await);

        assert!(!store.is_authenticated());
        assert_eq!(persisted(&store), None);
    }

    #[tokio::test]
    async fn test_login_wrong_pair_keeps_existing_session() {
        let mut store = store();
        store.login("admin", "password123").await;
        store.update_profile(ProfileUpdate {
            name: Some("Kept".into()),
            ..ProfileUpdate::default()
        });

        assert!(!store.login("admin", "nope").await);

        assert_eq!(store.current().identity().unwrap().name, "Kept");
    }

    // =====================================================================
    // logout()
    // =====================================================================

    #[tokio::test]
    async fn test_logout_after_login_clears_session_and_entry() {
        let mut store = store();
        store.login("admin", "password123").await;

        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut store = store();

        store.logout();
        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn test_logout_removes_entry_even_if_never_restored() {
        // Durable entry exists but this store never restored it.
        let mut storage = MemoryStore::new();
        storage
            .set("user", &JsonCodec.encode(&default_identity()).unwrap())
            .unwrap();
        let mut store = store_over(storage);

        store.logout();

        assert_eq!(persisted(&store), None);
    }

    // =====================================================================
    // restore()
    // =====================================================================

    #[test]
    fn test_restore_missing_entry_stays_anonymous() {
        let mut store = store();

        assert!(!store.restore());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_restore_invalid_json_stays_anonymous_and_keeps_entry() {
        let mut storage = MemoryStore::new();
        storage.set("user", "{\"id\": oops").unwrap();
        let mut store = store_over(storage);

        assert!(!store.restore());

        assert!(!store.is_authenticated());
        assert_eq!(persisted(&store).as_deref(), Some("{\"id\": oops"));
    }

    #[test]
    fn test_restore_unknown_role_stays_anonymous() {
        let mut storage = MemoryStore::new();
        storage
            .set(
                "user",
                r#"{"id":"u","username":"x","name":"X","role":"Mayor","avatar":""}"#,
            )
            .unwrap();
        let mut store = store_over(storage);

        assert!(!store.restore());
    }

    #[tokio::test]
    async fn test_restore_after_login_yields_identical_identity() {
        let storage = MemoryStore::new();
        let mut first = store_over(storage.clone());
        first.login("admin", "password123").await;
        let before = first.current();

        // Simulate a reload: a fresh store over the same storage.
        let mut reloaded = store_over(storage);
        assert!(reloaded.restore());

        assert_eq!(reloaded.current(), before);
    }

    #[test]
    fn test_restore_uses_configured_key() {
        let mut storage = MemoryStore::new();
        storage
            .set("rw.session", &JsonCodec.encode(&default_identity()).unwrap())
            .unwrap();
        let mut store = SessionStore::new(
            storage,
            StaticCredentials::default(),
            SessionConfig {
                storage_key: "rw.session".into(),
            },
        );

        assert!(store.restore());
    }

    // =====================================================================
    // update_profile()
    // =====================================================================

    #[test]
    fn test_update_profile_anonymous_is_noop() {
        let mut store = store();

        let applied = store.update_profile(ProfileUpdate {
            email: Some("x@y.com".into()),
            ..ProfileUpdate::default()
        });

        assert!(!applied);
        assert!(!store.is_authenticated());
        assert_eq!(persisted(&store), None);
    }

    #[tokio::test]
    async fn test_update_profile_merges_and_repersists() {
        let mut store = store();
        store.login("admin", "password123").await;

        let applied = store.update_profile(ProfileUpdate {
            email: Some("x@y.com".into()),
            phone: Some("+233 24 000 0000".into()),
            ..ProfileUpdate::default()
        });

        assert!(applied);
        let identity = store.current().into_identity().unwrap();
        assert_eq!(identity.email.as_deref(), Some("x@y.com"));
        assert_eq!(identity.name, "John Doe");

        let stored: Identity =
            JsonCodec.decode(&persisted(&store).unwrap()).unwrap();
        assert_eq!(stored, identity);
    }

    // =====================================================================
    // subscribe()
    // =====================================================================

    #[tokio::test]
    async fn test_subscribe_observes_login_then_logout() {
        let mut store = store();
        let mut rx = store.subscribe();
        assert!(!rx.borrow_and_update().is_authenticated());

        store.login("admin", "password123").await;
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());

        store.logout();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }

    #[tokio::test]
    async fn test_subscribe_not_woken_by_rejected_login() {
        let mut store = store();
        let mut rx = store.subscribe();
        let _ = rx.borrow_and_update();

        store.login("admin", "wrong").await;
        store.logout();

        assert!(!rx.has_changed().unwrap(), "nothing actually changed");
    }
}
