//! Identity types: the record describing the signed-in user.
//!
//! These are the structures that get written to durable storage, so the
//! serde attributes here ARE the persisted layout:
//!
//! ```json
//! { "id": "user-001", "username": "admin", "name": "John Doe",
//!   "role": "DVLA", "avatar": "https://...",
//!   "email": "admin@example.com", "phone": "...", "department": "..." }
//! ```
//!
//! Optional contact fields are omitted from the JSON when absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

// ---------------------------------------------------------------------------
// IdentityId
// ---------------------------------------------------------------------------

/// Unique identifier of an identity, e.g. `user-001`.
///
/// Newtype over `String` so an id can't be confused with a username or a
/// display name. `#[serde(transparent)]` keeps it a bare string in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The agency a user belongs to.
///
/// This is a closed set. A persisted identity carrying any other role
/// string fails to deserialize, and the session layer treats that the
/// same as "no session".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Driver and Vehicle Licensing Authority.
    #[serde(rename = "DVLA")]
    Dvla,

    /// Motor Traffic and Transport Department (police).
    #[serde(rename = "MTTD")]
    Mttd,

    /// National Road Safety Commission.
    #[serde(rename = "Road Safety Commission")]
    RoadSafetyCommission,

    /// System administrator.
    #[serde(rename = "Admin")]
    Admin,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 4] = [
        Role::Dvla,
        Role::Mttd,
        Role::RoadSafetyCommission,
        Role::Admin,
    ];

    /// The tag shown in the UI and stored in JSON.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dvla => "DVLA",
            Self::Mttd => "MTTD",
            Self::RoadSafetyCommission => "Road Safety Commission",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| ModelError::InvalidRecord(format!("unknown role {s:?}")))
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The signed-in user.
///
/// At most one identity is "current" at a time; the session layer owns
/// that invariant. This type is just the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier. Never changed by a profile update.
    pub id: IdentityId,

    /// Login handle.
    pub username: String,

    /// Display name, e.g. "John Doe".
    pub name: String,

    /// Agency tag.
    pub role: Role,

    /// Avatar image URI.
    pub avatar: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Identity {
    /// Merges a partial update into this identity.
    ///
    /// Fields the update leaves as `None` keep their current value.
    /// Returns `true` if any field was supplied.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        let touched = !update.is_empty();

        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
        if update.email.is_some() {
            self.email = update.email;
        }
        if update.phone.is_some() {
            self.phone = update.phone;
        }
        if update.department.is_some() {
            self.department = update.department;
        }

        touched
    }
}

// ---------------------------------------------------------------------------
// ProfileUpdate
// ---------------------------------------------------------------------------

/// A partial [`Identity`]: only the fields that are `Some` get merged.
///
/// There's no `id` field on purpose; the identifier of the current
/// identity is fixed for its lifetime. Field validation (email shape,
/// minimum lengths) belongs to whatever form produced the update.
///
/// ```rust
/// use roadwatch_model::ProfileUpdate;
///
/// let update = ProfileUpdate {
///     email: Some("x@y.com".into()),
///     ..ProfileUpdate::default()
/// };
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

impl ProfileUpdate {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.name.is_none()
            && self.role.is_none()
            && self.avatar.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.department.is_none()
    }
}
