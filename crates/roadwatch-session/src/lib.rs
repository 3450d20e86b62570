//! Session management for Road Watch.
//!
//! This crate answers one question for the rest of the dashboard: who is
//! signed in right now?
//!
//! 1. **Authentication**: checking a handle/secret pair ([`Authenticator`]
//!    trait, [`StaticCredentials`] placeholder)
//! 2. **Session state**: zero-or-one [`Identity`](roadwatch_model::Identity)
//!    held by the [`SessionStore`], persisted to durable storage and
//!    broadcast to subscribers
//! 3. **Display resolution**: one rule for "signed-in identity, else
//!    defaults" ([`resolve_display_identity`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Router / Views (above)  ← read the session, never write it
//!     ↕
//! Session Layer (this crate)  ← single writer of the current identity
//!     ↕
//! Model + Storage (below)  ← Identity record, JSON codec, key-value slot
//! ```

mod auth;
mod display;
mod error;
mod session;
mod store;

pub use auth::{
    Authenticator, DEFAULT_AVATAR, DEFAULT_HANDLE, DEFAULT_SECRET,
    StaticCredentials, default_identity,
};
pub use display::{DisplayDefaults, DisplayIdentity, resolve_display_identity};
pub use error::SessionError;
pub use session::{Session, SessionConfig};
pub use store::SessionStore;
