//! `App` builder and the application shell.
//!
//! The shell ties the layers together: session store → route guard →
//! navigator → page composition. It owns the only [`SessionStore`] (behind
//! an async mutex) and the navigation history.

use roadwatch_model::ProfileUpdate;
use roadwatch_router::{Navigator, RouteGuard, Transition, routes};
use roadwatch_session::{
    Authenticator, DisplayDefaults, Session, SessionStore,
};
use roadwatch_storage::KeyValueStore;
use tokio::sync::{Mutex, MutexGuard, watch};

use crate::views::{self, Rendered, ViewContext};
use crate::{AppConfig, RoadwatchError};

/// Builder for configuring and starting the application shell.
///
/// # Example
///
/// ```rust
/// use roadwatch::prelude::*;
///
/// let app = App::builder()
///     .config(AppConfig::default())
///     .build(MemoryStore::new(), StaticCredentials::default())?;
/// assert_eq!(app.session(), Session::Anonymous);
/// # Ok::<(), RoadwatchError>(())
/// ```
pub struct AppBuilder {
    config: AppConfig,
    defaults: DisplayDefaults,
    navigator: Navigator,
    start_path: String,
}

impl AppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            defaults: DisplayDefaults::default(),
            navigator: Navigator::default(),
            start_path: routes::HOME.to_string(),
        }
    }

    /// Sets the application configuration.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets what the frame shows when no one is signed in.
    pub fn display_defaults(mut self, defaults: DisplayDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replaces the workflow the back/next controls walk.
    pub fn navigator(mut self, navigator: Navigator) -> Self {
        self.navigator = navigator;
        self
    }

    /// The first history entry. Default: `/`.
    pub fn start_at(mut self, path: &str) -> Self {
        self.start_path = path.to_string();
        self
    }

    /// Builds the shell over `storage`, restoring any persisted session.
    pub fn build<S, A>(
        self,
        storage: S,
        auth: A,
    ) -> Result<App<S, A>, RoadwatchError>
    where
        S: KeyValueStore,
        A: Authenticator,
    {
        self.config.validate()?;

        let mut store =
            SessionStore::new(storage, auth, self.config.session.clone());
        let restored = store.restore();
        let watcher = store.subscribe();

        tracing::info!(
            restored,
            dev_tools = self.config.dev_tools,
            start = %self.start_path,
            "Road Watch ready"
        );

        Ok(App {
            store: Mutex::new(store),
            watcher,
            history: Mutex::new(vec![self.start_path]),
            guard: RouteGuard::new(self.config.login_path.clone()),
            navigator: self.navigator,
            defaults: self.defaults,
            config: self.config,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The running dashboard.
///
/// Every method takes `&self`, so an `App` can be shared behind an `Arc`.
/// Session mutations are serialized by the store's mutex; readers use
/// the watch channel and never wait on it.
pub struct App<S, A> {
    store: Mutex<SessionStore<S, A>>,
    watcher: watch::Receiver<Session>,
    history: Mutex<Vec<String>>,
    guard: RouteGuard,
    navigator: Navigator,
    defaults: DisplayDefaults,
    config: AppConfig,
}

impl App<(), ()> {
    /// Creates a new builder.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }
}

impl<S, A> App<S, A>
where
    S: KeyValueStore,
    A: Authenticator,
{
    // -----------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------

    /// Signs in; `false` if the credentials are rejected.
    pub async fn login(&self, handle: &str, secret: &str) -> bool {
        self.store.lock().await.login(handle, secret).await
    }

    /// Signs out and removes the persisted session.
    pub async fn logout(&self) {
        self.store.lock().await.logout();
    }

    /// Merges `update` into the signed-in identity; `false` when anonymous.
    pub async fn update_profile(&self, update: ProfileUpdate) -> bool {
        self.store.lock().await.update_profile(update)
    }

    /// Resynchronizes from durable storage (focus regained).
    pub async fn restore(&self) -> bool {
        self.store.lock().await.restore()
    }

    /// The latest committed session.
    pub fn session(&self) -> Session {
        self.watcher.borrow().clone()
    }

    /// A receiver that observes every committed session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.watcher.clone()
    }

    /// Exclusive access to the session store.
    pub async fn store(&self) -> MutexGuard<'_, SessionStore<S, A>> {
        self.store.lock().await
    }

    /// The configuration the shell was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // -----------------------------------------------------------------
    // Location and rendering
    // -----------------------------------------------------------------

    /// The path at the top of the history.
    pub async fn current_path(&self) -> String {
        let history = self.history.lock().await;
        current(&history).to_string()
    }

    /// Number of history entries, including the current one.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    /// Pushes `path` and renders it.
    ///
    /// A guard redirect replaces the pushed entry with the login path,
    /// so going back afterwards never lands on the refused page.
    pub async fn visit(&self, path: &str) -> Rendered {
        let mut history = self.history.lock().await;
        history.push(path.to_string());
        tracing::debug!(%path, "visit");
        self.settle(&mut history)
    }

    /// Re-renders the current location against the latest session.
    ///
    /// Call after any session change; a protected page whose session
    /// just ended redirects here.
    pub async fn render(&self) -> Rendered {
        let mut history = self.history.lock().await;
        self.settle(&mut history)
    }

    fn settle(&self, history: &mut Vec<String>) -> Rendered {
        let session = self.session();
        let ctx = ViewContext {
            session: &session,
            guard: &self.guard,
            config: &self.config,
            defaults: &self.defaults,
        };
        let rendered = views::compose(current(history), &ctx);

        if let Rendered::Redirect(to) = &rendered {
            tracing::info!(from = %current(history), %to, "redirected");
            if let Some(top) = history.last_mut() {
                *top = to.clone();
            }
        }
        rendered
    }

    // -----------------------------------------------------------------
    // Navigation controls
    // -----------------------------------------------------------------

    /// The back control on the current page.
    pub async fn back(&self) -> Transition {
        let mut history = self.history.lock().await;
        let transition = self.navigator.back(current(&history), None);
        apply(&mut history, &transition);
        transition
    }

    /// The next control on the current page, honouring the page's own
    /// next target.
    pub async fn next(&self) -> Transition {
        let mut history = self.history.lock().await;
        let at = current(&history).to_string();
        let target = views::resolve_route(&at, &self.config)
            .page
            .controls()
            .and_then(|controls| controls.next_target);
        let transition = self.navigator.next(&at, target, None);
        apply(&mut history, &transition);
        transition
    }

    /// The home control.
    pub async fn home(&self) -> Transition {
        let mut history = self.history.lock().await;
        let transition = Transition::Go(self.navigator.home().to_string());
        apply(&mut history, &transition);
        transition
    }

    /// Applies a transition resolved elsewhere (e.g. by a page handler).
    pub async fn apply(&self, transition: &Transition) {
        let mut history = self.history.lock().await;
        apply(&mut history, transition);
    }
}

fn current(history: &[String]) -> &str {
    history.last().map_or(routes::HOME, String::as_str)
}

fn apply(history: &mut Vec<String>, transition: &Transition) {
    match transition {
        Transition::Go(path) => history.push(path.clone()),
        Transition::HistoryBack => {
            if history.len() > 1 {
                history.pop();
            }
        }
        Transition::Handled | Transition::NoOp => {}
    }
}

#[cfg(test)]
mod tests {
    use roadwatch_session::StaticCredentials;
    use roadwatch_storage::MemoryStore;

    use super::*;
    use crate::logging::init_test_logging;

    fn app() -> App<MemoryStore, StaticCredentials> {
        init_test_logging();
        App::builder()
            .build(MemoryStore::new(), StaticCredentials::default())
            .unwrap()
    }

    #[test]
    fn test_apply_history_back_stays_put_at_first_entry() {
        let mut history = vec!["/".to_string()];

        apply(&mut history, &Transition::HistoryBack);

        assert_eq!(history, ["/"]);
    }

    #[test]
    fn test_apply_go_then_history_back() {
        let mut history = vec!["/".to_string()];

        apply(&mut history, &Transition::Go("/about".into()));
        apply(&mut history, &Transition::NoOp);
        apply(&mut history, &Transition::Handled);
        assert_eq!(history, ["/", "/about"]);

        apply(&mut history, &Transition::HistoryBack);
        assert_eq!(history, ["/"]);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let result = App::builder()
            .config(AppConfig {
                login_path: "login".into(),
                ..AppConfig::default()
            })
            .build(MemoryStore::new(), StaticCredentials::default());

        assert!(matches!(result, Err(RoadwatchError::Config(_))));
    }

    #[tokio::test]
    async fn test_visit_protected_anonymous_replaces_entry_with_login() {
        let app = app();

        let rendered = app.visit("/case-management").await;

        assert_eq!(rendered, Rendered::Redirect("/login".into()));
        assert_eq!(app.current_path().await, "/login");
        assert_eq!(app.history_len().await, 2);
    }

    #[tokio::test]
    async fn test_next_uses_page_target_then_workflow() {
        let app = app();
        app.login("admin", "password123").await;

        assert_eq!(app.next().await, Transition::Go("/incident-map".into()));
        assert_eq!(app.next().await, Transition::Go("/case-management".into()));
        assert_eq!(app.current_path().await, "/case-management");
    }

    #[tokio::test]
    async fn test_home_pushes_root() {
        let app = app();
        app.visit("/about").await;

        assert_eq!(app.home().await, Transition::Go("/".into()));
        assert_eq!(app.current_path().await, "/");
        assert_eq!(app.history_len().await, 3);
    }
}
