//! Dashboard status tags.
//!
//! Incidents, cases, and whistleblower reports all carry short kebab-case
//! tags (`"in-progress"`, `"critical"`, ...). Each tag family is a closed
//! enum here, with an explicit `Unknown` variant that keeps the original
//! text. Anything that styles or filters on these tags matches them
//! exhaustively, so an unrecognised tag is handled by a deliberate arm
//! rather than falling through a string switch.
//!
//! Tags serialize as their kebab-case string and deserialize from any
//! string (unrecognised ones land in `Unknown`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates a tag enum with `as_str`, `From<&str>`, `Display`, and
/// string-shaped serde support.
macro_rules! status_tag {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A tag this build doesn't recognise, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// The kebab-case tag.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $tag, )+
                    Self::Unknown(raw) => raw,
                }
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                match tag {
                    $( $tag => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                Self::from(tag.as_str())
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> Self {
                tag.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_tag! {
    /// How serious an incident or case is.
    pub enum Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

status_tag! {
    /// Where a reported incident is in its handling.
    pub enum IncidentStatus {
        Pending => "pending",
        Investigating => "investigating",
        Resolved => "resolved",
        Closed => "closed",
    }
}

status_tag! {
    /// Case-management workflow state.
    pub enum CaseStatus {
        New => "new",
        Assigned => "assigned",
        InProgress => "in-progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

status_tag! {
    /// Whistleblower report review state.
    pub enum ReportStatus {
        Pending => "pending",
        Verified => "verified",
        Processing => "processing",
        Investigating => "investigating",
        Rejected => "rejected",
    }
}
