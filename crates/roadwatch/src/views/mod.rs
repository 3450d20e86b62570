//! Page composition: path → guarded, framed page description.
//!
//! Composition is a pure function of the path, the session, and
//! configuration. [`compose`] resolves the route, runs protected routes
//! through the [`RouteGuard`], and builds the dashboard frame from the
//! resolved display identity. Nothing here touches the session store or
//! history; the [`App`](crate::App) does that.
//!
//! ```text
//! path ──→ resolve_route ──→ protected? ──no──→ Screen
//!                                │
//!                               yes
//!                                │
//!                         RouteGuard::guard ──redirect──→ Rendered::Redirect
//!                                │
//!                              allow ──→ Screen { shell: Some(..) }
//! ```

mod badge;
mod layout;

pub use badge::{Badge, BadgeTone};
pub use layout::{
    Header, Layout, NavControls, NavItem, Rendered, Screen, Shell, Sidebar,
};

use roadwatch_router::{RouteGuard, routes};
use roadwatch_session::{DisplayDefaults, Session, resolve_display_identity};

use crate::AppConfig;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Every page the dashboard knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    IncidentMap,
    CaseManagement,
    Analytics,
    Whistleblower,
    Profile,
    Settings,
    IncidentSubmission,
    Login,
    About,
    HowItWorks,
    Announcements,
    WhistleblowerPortal,
    DevTools,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::IncidentMap => "Incident Map",
            Self::CaseManagement => "Case Management",
            Self::Analytics => "Analytics",
            Self::Whistleblower | Self::WhistleblowerPortal => {
                "Whistleblower Portal"
            }
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::IncidentSubmission => "Report Incident",
            Self::Login => "Login",
            Self::About => "About",
            Self::HowItWorks => "How It Works",
            Self::Announcements => "Announcements",
            Self::DevTools => "Dev Tools",
        }
    }

    /// The navigation buttons this page carries, if any.
    pub fn controls(&self) -> Option<NavControls> {
        match self {
            Self::Overview => Some(NavControls {
                show_back: false,
                ..NavControls::with_next(routes::INCIDENT_MAP)
            }),
            Self::IncidentMap => {
                Some(NavControls::with_next(routes::CASE_MANAGEMENT))
            }
            Self::CaseManagement => {
                Some(NavControls::with_next(routes::ANALYTICS))
            }
            Self::Analytics => Some(NavControls::with_next(routes::WHISTLEBLOWER)),
            Self::Whistleblower | Self::IncidentSubmission => {
                Some(NavControls::back_and_home())
            }
            Self::Profile
            | Self::Settings
            | Self::Login
            | Self::About
            | Self::HowItWorks
            | Self::Announcements
            | Self::WhistleblowerPortal
            | Self::DevTools => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub protected: bool,
    pub layout: Layout,
}

impl Route {
    const fn dashboard(page: Page) -> Self {
        Self {
            page,
            protected: true,
            layout: Layout::Dashboard,
        }
    }

    const fn open(page: Page, layout: Layout) -> Self {
        Self {
            page,
            protected: false,
            layout,
        }
    }
}

/// Maps a path to its route. Unknown paths land on the protected
/// overview, and so do dev-tools paths while the overlay is disabled.
pub fn resolve_route(path: &str, config: &AppConfig) -> Route {
    if config.dev_tools && is_under(path, &config.dev_tools_prefix) {
        return Route::open(Page::DevTools, Layout::Overlay);
    }
    if is_under(path, routes::WHISTLEBLOWER_PORTAL) {
        return Route::open(Page::WhistleblowerPortal, Layout::Portal);
    }
    if path == config.login_path {
        return Route::open(Page::Login, Layout::Bare);
    }

    match path {
        routes::HOME | routes::DASHBOARD => Route::dashboard(Page::Overview),
        routes::INCIDENT_MAP => Route::dashboard(Page::IncidentMap),
        routes::CASE_MANAGEMENT => Route::dashboard(Page::CaseManagement),
        routes::ANALYTICS => Route::dashboard(Page::Analytics),
        routes::WHISTLEBLOWER => Route::dashboard(Page::Whistleblower),
        routes::PROFILE => Route::dashboard(Page::Profile),
        routes::SETTINGS => Route::dashboard(Page::Settings),
        routes::INCIDENT_SUBMISSION => {
            Route::open(Page::IncidentSubmission, Layout::Public)
        }
        routes::ABOUT => Route::open(Page::About, Layout::Public),
        routes::HOW_IT_WORKS => Route::open(Page::HowItWorks, Layout::Public),
        routes::ANNOUNCEMENTS => Route::open(Page::Announcements, Layout::Public),
        _ => Route::dashboard(Page::Overview),
    }
}

/// `path` equals `prefix` or sits below it.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Everything composition reads.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub session: &'a Session,
    pub guard: &'a RouteGuard,
    pub config: &'a AppConfig,
    pub defaults: &'a DisplayDefaults,
}

/// Composes the page for `path`.
///
/// Protected routes go through the guard first: on redirect no part of
/// the page (including its frame) is built.
pub fn compose(path: &str, ctx: &ViewContext<'_>) -> Rendered {
    let route = resolve_route(path, ctx.config);

    if !route.protected {
        return Rendered::Screen(build_screen(path, route, ctx));
    }

    match ctx
        .guard
        .guard(ctx.session, || build_screen(path, route, ctx))
    {
        Ok(screen) => Rendered::Screen(screen),
        Err(to) => Rendered::Redirect(to),
    }
}

fn build_screen(path: &str, route: Route, ctx: &ViewContext<'_>) -> Screen {
    let title = route.page.title();
    let shell = (route.layout == Layout::Dashboard).then(|| {
        let user = resolve_display_identity(ctx.session, ctx.defaults);
        Shell {
            sidebar: Sidebar::new(path, user.clone()),
            header: Header {
                title,
                user,
                notification_count: ctx.config.notification_count,
            },
        }
    });

    Screen {
        path: path.to_string(),
        page: route.page,
        title,
        layout: route.layout,
        shell,
        controls: route.page.controls(),
    }
}

#[cfg(test)]
mod tests {
    use roadwatch_model::Role;
    use roadwatch_session::default_identity;

    use super::*;

    fn dev_on() -> AppConfig {
        AppConfig {
            dev_tools: true,
            ..AppConfig::default()
        }
    }

    // =====================================================================
    // resolve_route()
    // =====================================================================

    #[test]
    fn test_resolve_route_dashboard_pages_are_protected() {
        let config = AppConfig::default();

        for path in [
            "/",
            "/dashboard",
            "/incident-map",
            "/case-management",
            "/analytics",
            "/whistleblower",
            "/profile",
            "/settings",
        ] {
            let route = resolve_route(path, &config);
            assert!(route.protected, "{path}");
            assert_eq!(route.layout, Layout::Dashboard, "{path}");
        }
    }

    #[test]
    fn test_resolve_route_public_pages_are_open() {
        let config = AppConfig::default();

        for (path, page) in [
            ("/incident-submission", Page::IncidentSubmission),
            ("/login", Page::Login),
            ("/about", Page::About),
            ("/how-it-works", Page::HowItWorks),
            ("/announcements", Page::Announcements),
            ("/whistleblower-portal", Page::WhistleblowerPortal),
            ("/whistleblower-portal/my-reports/42", Page::WhistleblowerPortal),
        ] {
            let route = resolve_route(path, &config);
            assert!(!route.protected, "{path}");
            assert_eq!(route.page, page, "{path}");
        }
    }

    #[test]
    fn test_resolve_route_unknown_path_is_overview() {
        let route = resolve_route("/no-such-page", &AppConfig::default());

        assert_eq!(route, Route::dashboard(Page::Overview));
    }

    #[test]
    fn test_resolve_route_portal_lookalike_is_not_portal() {
        let route =
            resolve_route("/whistleblower-portalx", &AppConfig::default());

        assert_eq!(route.page, Page::Overview);
    }

    #[test]
    fn test_resolve_route_dev_tools_follows_flag() {
        let off = resolve_route("/__devtools/inspect", &AppConfig::default());
        let on = resolve_route("/__devtools/inspect", &dev_on());

        assert_eq!(off, Route::dashboard(Page::Overview));
        assert_eq!(on, Route::open(Page::DevTools, Layout::Overlay));
    }

    #[test]
    fn test_resolve_route_dev_tools_flag_leaves_other_routes_alone() {
        let off = AppConfig::default();
        let on = dev_on();

        for path in ["/", "/analytics", "/login", "/about", "/elsewhere"] {
            assert_eq!(resolve_route(path, &off), resolve_route(path, &on));
        }
    }

    // =====================================================================
    // compose()
    // =====================================================================

    #[test]
    fn test_compose_protected_anonymous_redirects() {
        let ctx_session = Session::Anonymous;
        let guard = RouteGuard::default();
        let config = AppConfig::default();
        let defaults = DisplayDefaults::default();
        let ctx = ViewContext {
            session: &ctx_session,
            guard: &guard,
            config: &config,
            defaults: &defaults,
        };

        assert_eq!(
            compose("/analytics", &ctx),
            Rendered::Redirect("/login".into())
        );
    }

    #[test]
    fn test_compose_overview_frame_and_controls() {
        let mut identity = default_identity();
        identity.name = "Kojo Asante".into();
        identity.role = Role::Mttd;
        let session = Session::Authenticated(identity);
        let guard = RouteGuard::default();
        let config = AppConfig::default();
        let defaults = DisplayDefaults::default();
        let ctx = ViewContext {
            session: &session,
            guard: &guard,
            config: &config,
            defaults: &defaults,
        };

        let rendered = compose("/", &ctx);
        let screen = rendered.screen().unwrap();

        assert_eq!(screen.page, Page::Overview);
        let shell = screen.shell.as_ref().unwrap();
        assert_eq!(shell.header.title, "Dashboard");
        assert_eq!(shell.header.user.name, "Kojo Asante");
        assert_eq!(shell.header.user.role, Role::Mttd);
        assert_eq!(shell.header.notification_count, 3);
        assert_eq!(shell.sidebar.user, shell.header.user);

        let controls = screen.controls.unwrap();
        assert!(!controls.show_back);
        assert!(controls.show_next);
        assert_eq!(controls.next_target, Some("/incident-map"));
    }

    #[test]
    fn test_compose_public_page_has_no_shell() {
        let session = Session::Anonymous;
        let guard = RouteGuard::default();
        let config = AppConfig::default();
        let defaults = DisplayDefaults::default();
        let ctx = ViewContext {
            session: &session,
            guard: &guard,
            config: &config,
            defaults: &defaults,
        };

        let rendered = compose("/incident-submission", &ctx);
        let screen = rendered.screen().unwrap();

        assert_eq!(screen.layout, Layout::Public);
        assert!(screen.shell.is_none());
        assert_eq!(screen.controls, Some(NavControls::back_and_home()));
    }

    #[test]
    fn test_is_under() {
        assert!(is_under("/a", "/a"));
        assert!(is_under("/a/b", "/a"));
        assert!(!is_under("/ab", "/a"));
        assert!(!is_under("/", "/a"));
    }
}
