//! Badge colours for status tags.

use roadwatch_model::{CaseStatus, IncidentStatus, ReportStatus, Severity};

/// Colour family a status badge is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    /// Grey; also used for tags this build doesn't recognise.
    Neutral,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

/// Anything drawn as a status badge.
pub trait Badge {
    fn tone(&self) -> BadgeTone;
}

impl Badge for Severity {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Low => BadgeTone::Blue,
            Self::Medium => BadgeTone::Yellow,
            Self::High => BadgeTone::Orange,
            Self::Critical => BadgeTone::Red,
            Self::Unknown(_) => BadgeTone::Neutral,
        }
    }
}

impl Badge for IncidentStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Neutral,
            Self::Investigating => BadgeTone::Blue,
            Self::Resolved => BadgeTone::Green,
            Self::Closed => BadgeTone::Purple,
            Self::Unknown(_) => BadgeTone::Neutral,
        }
    }
}

impl Badge for CaseStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::New => BadgeTone::Purple,
            Self::Assigned => BadgeTone::Blue,
            Self::InProgress => BadgeTone::Yellow,
            Self::Resolved => BadgeTone::Green,
            Self::Closed => BadgeTone::Neutral,
            Self::Unknown(_) => BadgeTone::Neutral,
        }
    }
}

impl Badge for ReportStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Neutral,
            Self::Verified => BadgeTone::Blue,
            Self::Processing => BadgeTone::Yellow,
            Self::Investigating => BadgeTone::Orange,
            Self::Rejected => BadgeTone::Red,
            Self::Unknown(_) => BadgeTone::Neutral,
        }
    }
}
