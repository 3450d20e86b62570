//! Record model for Road Watch.
//!
//! This crate defines the data that the rest of the workspace passes
//! around and persists:
//!
//! - **Types** ([`Identity`], [`Role`], [`ProfileUpdate`]): who is signed
//!   in and how a profile edit is expressed.
//! - **Status tags** ([`Severity`], [`IncidentStatus`], [`CaseStatus`],
//!   [`ReportStatus`]): closed sets of dashboard tags with an explicit
//!   catch-all for values this build doesn't know about.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how records are turned
//!   into the text that durable storage holds.
//! - **Errors** ([`ModelError`]).
//!
//! # Architecture
//!
//! ```text
//! Storage (text slots) ← Model (Identity ↔ JSON) → Session (who is logged in)
//! ```

mod codec;
mod error;
mod status;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ModelError;
pub use status::{CaseStatus, IncidentStatus, ReportStatus, Severity};
pub use types::{Identity, IdentityId, ProfileUpdate, Role};
