//! Explicit commands behind form controls.
//!
//! The incident form has two side effects beyond typing: filling the
//! location field from the device position, and keeping a list of
//! attached media. Both are modelled here as plain operations so they
//! can be driven without a browser.

use std::fmt;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {}, Longitude: {}",
            self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The platform has no positioning at all.
    #[error("geolocation is not supported on this device")]
    Unsupported,

    /// Positioning exists but didn't produce a fix (denied, timed out).
    #[error("unable to retrieve location: {0}")]
    Unavailable(String),
}

/// A source of the device's current position.
pub trait LocationProvider: Send + Sync {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Asks `provider` for a fix and logs the outcome.
pub async fn locate<P: LocationProvider>(
    provider: &P,
) -> Result<Coordinates, LocationError> {
    match provider.current_position().await {
        Ok(coords) => {
            tracing::debug!(%coords, "location acquired");
            Ok(coords)
        }
        Err(e) => {
            tracing::warn!(error = %e, "location unavailable");
            Err(e)
        }
    }
}

/// The text written into the form's location field.
pub fn format_location(coords: &Coordinates) -> String {
    coords.to_string()
}

// ---------------------------------------------------------------------------
// Media attachments
// ---------------------------------------------------------------------------

/// Files attached to an incident report, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaAttachments {
    files: Vec<String>,
}

impl MediaAttachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selection of files after the existing ones.
    pub fn add<I, F>(&mut self, selected: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.files.extend(selected.into_iter().map(Into::into));
    }

    /// Removes the file at `index`, shifting later ones down.
    ///
    /// Returns `None` and leaves the list alone when out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
