//! Session types: who is signed in, and where that fact is persisted.

use roadwatch_model::Identity;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Durable storage key holding the serialized identity.
    ///
    /// Default: `"user"`.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Zero-or-one signed-in identity.
///
/// Two states, so "authenticated" can never disagree with "has an
/// identity":
///
/// ```text
///   Anonymous ──(login)──→ Authenticated ──(logout)──→ Anonymous
///                              │    ↑
///                              └────┘ (update_profile)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,

    /// The given identity is signed in.
    Authenticated(Identity),
}

impl Session {
    /// `true` exactly when an identity is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }

    /// Consumes the session, returning the identity if any.
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }
}
