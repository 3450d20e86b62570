//! Resolving what the dashboard shows for "the current user".
//!
//! Layout pieces (sidebar, header, profile card) all show a name, a role
//! and an avatar. When someone is signed in those come from their
//! identity; otherwise from the layout's own defaults. The rule lives
//! here once instead of at every call site:
//!
//! > Each field comes from the signed-in identity when one is present
//! > and that field is non-empty; otherwise from [`DisplayDefaults`].

use roadwatch_model::Role;

use crate::{DEFAULT_AVATAR, Session};

/// Fallback values used when no identity (or an empty field) is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDefaults {
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            role: Role::Dvla,
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

/// The name/role/avatar triple a layout actually renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

impl DisplayIdentity {
    /// Avatar fallback text: the first character of each word of the
    /// name, e.g. "John Doe" → "JD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Applies the display precedence rule described in the module docs.
pub fn resolve_display_identity(
    session: &Session,
    defaults: &DisplayDefaults,
) -> DisplayIdentity {
    let Some(identity) = session.identity() else {
        return DisplayIdentity {
            name: defaults.name.clone(),
            role: defaults.role,
            avatar: defaults.avatar.clone(),
        };
    };

    DisplayIdentity {
        name: non_empty_or(&identity.name, &defaults.name),
        role: identity.role,
        avatar: non_empty_or(&identity.avatar, &defaults.avatar),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let chosen = if value.is_empty() { fallback } else { value };
    chosen.to_string()
}
