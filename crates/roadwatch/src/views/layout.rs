//! Layout pieces: sidebar, header, and the back/home/next controls.

use roadwatch_router::routes;
use roadwatch_session::DisplayIdentity;

use super::Page;

// ---------------------------------------------------------------------------
// Rendered / Screen
// ---------------------------------------------------------------------------

/// Outcome of composing one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A page to show.
    Screen(Screen),

    /// The route guard refused; go here instead.
    Redirect(String),
}

impl Rendered {
    /// The screen, if one was produced.
    pub fn screen(&self) -> Option<&Screen> {
        match self {
            Self::Screen(screen) => Some(screen),
            Self::Redirect(_) => None,
        }
    }
}

/// Which outer frame a page is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Sidebar + header around the content.
    Dashboard,
    /// Public site header and footer.
    Public,
    /// Anonymous whistleblower portal frame.
    Portal,
    /// No frame at all (login).
    Bare,
    /// Dev-tools overlay.
    Overlay,
}

/// A fully composed page description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// The path as visited.
    pub path: String,
    pub page: Page,
    pub title: &'static str,
    pub layout: Layout,
    /// Present for [`Layout::Dashboard`] only.
    pub shell: Option<Shell>,
    /// Present on pages that carry navigation controls.
    pub controls: Option<NavControls>,
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// Dashboard frame: sidebar plus header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub sidebar: Sidebar,
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub items: Vec<NavItem>,
    pub user: DisplayIdentity,
}

impl Sidebar {
    /// The fixed item list, with `active` set on the one whose path
    /// equals `current` exactly.
    pub fn new(current: &str, user: DisplayIdentity) -> Self {
        let items = SIDEBAR_ITEMS
            .iter()
            .map(|&(label, path)| NavItem {
                label,
                path,
                active: path == current,
            })
            .collect();
        Self { items, user }
    }

    /// The highlighted item, if any.
    pub fn active(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.active)
    }
}

const SIDEBAR_ITEMS: [(&str, &str); 6] = [
    ("Dashboard", routes::DASHBOARD),
    ("Incident Map", routes::INCIDENT_MAP),
    ("Case Management", routes::CASE_MANAGEMENT),
    ("Analytics", routes::ANALYTICS),
    ("Whistleblower Portal", routes::WHISTLEBLOWER),
    ("Report Incident", routes::INCIDENT_SUBMISSION),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub user: DisplayIdentity,
    pub notification_count: u32,
}

// ---------------------------------------------------------------------------
// NavControls
// ---------------------------------------------------------------------------

/// Which navigation buttons a page shows, and its explicit next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub show_back: bool,
    pub show_home: bool,
    pub show_next: bool,
    /// Overrides the workflow order for the next button.
    pub next_target: Option<&'static str>,
}

impl NavControls {
    /// Back and home visible, next hidden.
    pub const fn back_and_home() -> Self {
        Self {
            show_back: true,
            show_home: true,
            show_next: false,
            next_target: None,
        }
    }

    /// All three visible, next going to `target`.
    pub const fn with_next(target: &'static str) -> Self {
        Self {
            show_next: true,
            next_target: Some(target),
            ..Self::back_and_home()
        }
    }
}

#[cfg(test)]
mod tests {
    use roadwatch_model::Role;

    use super::*;

    fn someone() -> DisplayIdentity {
        DisplayIdentity {
            name: "Ama Mensah".into(),
            role: Role::Mttd,
            avatar: String::new(),
        }
    }

    #[test]
    fn test_sidebar_marks_exact_path_active() {
        let sidebar = Sidebar::new("/analytics", someone());

        let active: Vec<_> =
            sidebar.items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Analytics");
    }

    #[test]
    fn test_sidebar_root_has_no_active_item() {
        // The sidebar's dashboard entry is /dashboard, not /.
        let sidebar = Sidebar::new("/", someone());

        assert!(sidebar.active().is_none());
        assert_eq!(sidebar.items.len(), 6);
    }

    #[test]
    fn test_sidebar_prefix_is_not_active() {
        let sidebar = Sidebar::new("/analytics/export", someone());

        assert!(sidebar.active().is_none());
    }

    #[test]
    fn test_nav_controls_constructors() {
        let c = NavControls::with_next("/analytics");
        assert!(c.show_back && c.show_home && c.show_next);
        assert_eq!(c.next_target, Some("/analytics"));

        let c = NavControls::back_and_home();
        assert!(!c.show_next);
        assert_eq!(c.next_target, None);
    }
}
