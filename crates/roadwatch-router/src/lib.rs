//! Route access control and workflow navigation for Road Watch.
//!
//! Both pieces are pure functions of their inputs: neither holds the
//! session nor the current location. The application shell feeds them
//! the latest values on every navigation and every session change.
//!
//! # Key types
//!
//! - [`RouteGuard`]: decides [`Access`] for a protected route
//! - [`Navigator`]: back/home/next targets over the fixed [`WORKFLOW`]
//! - [`Transition`]: what a navigation control asks the shell to do
//! - [`routes`]: the path constants every layer agrees on

mod guard;
mod navigator;
pub mod routes;

pub use guard::{Access, GuardState, RouteGuard};
pub use navigator::{Navigator, Position, Transition};
pub use routes::WORKFLOW;
