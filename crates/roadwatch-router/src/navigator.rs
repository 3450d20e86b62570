//! Back/home/next targets over a fixed linear workflow.
//!
//! The dashboard's main sections form an ordered list (overview → map →
//! cases → analytics → whistleblower). The navigation controls step
//! through that list, with explicit overrides taking precedence:
//!
//! ```text
//! back:  handler → previous in list → HistoryBack
//! next:  handler → explicit target → following in list → NoOp
//! home:  always the root
//! ```
//!
//! The asymmetry is intentional: from the first entry or from a path
//! outside the list, back still does something (the browser-style
//! history step) while next does nothing.

use serde::{Deserialize, Serialize};

use crate::routes;

// ---------------------------------------------------------------------------
// Position / Transition
// ---------------------------------------------------------------------------

/// Where a path sits in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Index into the workflow list.
    At(usize),

    /// The path isn't in the list (exact match only).
    NotFound,
}

/// What a navigation control resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Navigate to this path.
    Go(String),

    /// Step back one history entry, wherever that is.
    HistoryBack,

    /// A caller-supplied handler took care of it.
    Handled,

    /// Nothing to do.
    NoOp,
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Computes navigation targets for a fixed workflow order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    flow: Vec<String>,
    home: String,
}

impl Navigator {
    /// A navigator over `flow`, with `home` as the root path.
    pub fn new<I, P>(flow: I, home: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            flow: flow.into_iter().map(Into::into).collect(),
            home: home.into(),
        }
    }

    /// The ordered workflow paths.
    pub fn flow(&self) -> &[String] {
        &self.flow
    }

    /// Looks up `current` in the workflow by exact string match.
    pub fn position(&self, current: &str) -> Position {
        self.flow
            .iter()
            .position(|path| path == current)
            .map_or(Position::NotFound, Position::At)
    }

    /// Resolves the back control.
    ///
    /// An explicit `handler` is run and wins outright. Otherwise the
    /// previous workflow entry, or [`Transition::HistoryBack`] from the
    /// first entry or an unknown path.
    pub fn back(
        &self,
        current: &str,
        handler: Option<&mut dyn FnMut()>,
    ) -> Transition {
        if let Some(handler) = handler {
            handler();
            return Transition::Handled;
        }

        let transition = match self.position(current) {
            Position::At(index) if index > 0 => {
                Transition::Go(self.flow[index - 1].clone())
            }
            Position::At(_) | Position::NotFound => Transition::HistoryBack,
        };
        tracing::debug!(%current, ?transition, "back resolved");
        transition
    }

    /// Resolves the next control.
    ///
    /// Precedence: `handler`, then a non-empty `target`, then the
    /// following workflow entry. From the last entry or an unknown path
    /// with no overrides, [`Transition::NoOp`].
    pub fn next(
        &self,
        current: &str,
        target: Option<&str>,
        handler: Option<&mut dyn FnMut()>,
    ) -> Transition {
        if let Some(handler) = handler {
            handler();
            return Transition::Handled;
        }

        if let Some(target) = target.filter(|t| !t.is_empty()) {
            return Transition::Go(target.to_string());
        }

        let transition = match self.position(current) {
            Position::At(index) => self
                .flow
                .get(index + 1)
                .map_or(Transition::NoOp, |path| Transition::Go(path.clone())),
            Position::NotFound => Transition::NoOp,
        };
        tracing::debug!(%current, ?transition, "next resolved");
        transition
    }

    /// The root path, unconditionally.
    pub fn home(&self) -> &str {
        &self.home
    }
}

impl Default for Navigator {
    /// The dashboard workflow from [`routes::WORKFLOW`].
    fn default() -> Self {
        Self::new(routes::WORKFLOW, routes::HOME)
    }
}
