//! Path constants.

/// Landing overview (dashboard summary).
pub const HOME: &str = "/";
/// Alias of the overview used by the sidebar.
pub const DASHBOARD: &str = "/dashboard";
pub const INCIDENT_MAP: &str = "/incident-map";
pub const CASE_MANAGEMENT: &str = "/case-management";
pub const ANALYTICS: &str = "/analytics";
pub const WHISTLEBLOWER: &str = "/whistleblower";
pub const INCIDENT_SUBMISSION: &str = "/incident-submission";
pub const PROFILE: &str = "/profile";
pub const SETTINGS: &str = "/settings";
pub const LOGIN: &str = "/login";
pub const ABOUT: &str = "/about";
pub const HOW_IT_WORKS: &str = "/how-it-works";
pub const ANNOUNCEMENTS: &str = "/announcements";
/// Root of the anonymous whistleblower portal; sub-paths live under it.
pub const WHISTLEBLOWER_PORTAL: &str = "/whistleblower-portal";

/// The fixed linear workflow the back/next controls walk through.
pub const WORKFLOW: [&str; 5] = [
    HOME,
    INCIDENT_MAP,
    CASE_MANAGEMENT,
    ANALYTICS,
    WHISTLEBLOWER,
];
