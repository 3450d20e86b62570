//! # Road Watch
//!
//! Client core of a road-safety incident reporting and case-management
//! dashboard.
//!
//! Road Watch keeps track of who is signed in, decides which pages they
//! may see, walks them through the dashboard workflow, and composes a
//! description of each page (frame + content) for whatever draws it.
//!
//! ## Quick Start
//!
//! ```rust
//! use roadwatch::prelude::*;
//!
//! # async fn demo() -> Result<(), RoadwatchError> {
//! let app = App::builder()
//!     .config(AppConfig::from_env()?)
//!     .build(MemoryStore::new(), StaticCredentials::default())?;
//!
//! // Anonymous visitors are sent to the login page.
//! assert!(matches!(app.visit("/analytics").await, Rendered::Redirect(_)));
//!
//! app.login("admin", "password123").await;
//! assert!(matches!(app.visit("/analytics").await, Rendered::Screen(_)));
//! # Ok(())
//! # }
//! ```

mod app;
pub mod commands;
mod config;
mod error;
pub mod logging;
pub mod views;

pub use app::{App, AppBuilder};
pub use config::{
    AppConfig, ENV_DEV_TOOLS, ENV_NOTIFICATION_COUNT, ENV_STORAGE_KEY,
};
pub use error::RoadwatchError;

// Re-export sub-crates for advanced usage.
pub use roadwatch_model as model;
pub use roadwatch_router as router;
pub use roadwatch_session as session;
pub use roadwatch_storage as storage;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::commands::{
        Coordinates, LocationError, LocationProvider, MediaAttachments,
        format_location, locate,
    };
    pub use crate::logging::{Verbosity, init_logging};
    pub use crate::views::{
        Badge, BadgeTone, Layout, NavControls, Page, Rendered, Screen,
    };
    pub use crate::{App, AppBuilder, AppConfig, RoadwatchError};

    pub use roadwatch_model::{
        CaseStatus, Identity, IdentityId, IncidentStatus, ProfileUpdate,
        ReportStatus, Role, Severity,
    };
    pub use roadwatch_router::{
        Access, Navigator, Position, RouteGuard, Transition, routes,
    };
    pub use roadwatch_session::{
        Authenticator, DisplayDefaults, DisplayIdentity, Session,
        SessionConfig, SessionError, SessionStore, StaticCredentials,
        default_identity,
    };
    pub use roadwatch_storage::{KeyValueStore, MemoryStore};
    #[cfg(feature = "file")]
    pub use roadwatch_storage::FileStore;
}
