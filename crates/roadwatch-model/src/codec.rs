//! Codec trait and implementations for persisting records as text.
//!
//! Durable storage is a set of string slots (think browser local
//! storage), so unlike a wire codec this one produces `String`, not
//! bytes. The session layer only needs something that implements
//! [`Codec`]; [`JsonCodec`] is the one we ship.

use serde::{Serialize, de::DeserializeOwned};

use crate::ModelError;

/// A codec that turns records into text and back.
///
/// `Send + Sync + 'static` because the codec lives inside the session
/// store, which the application shell shares across tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into text.
    ///
    /// # Errors
    /// Returns [`ModelError::Encode`] if the value can't be represented.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ModelError>;

    /// Parses text back into a value.
    ///
    /// # Errors
    /// Returns [`ModelError::Decode`] if the text is malformed or doesn't
    /// match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, ModelError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// JSON keeps the persisted identity readable in a storage inspector and
/// matches the layout other clients of the same slot expect.
///
/// ```rust
/// use roadwatch_model::{Codec, Identity, IdentityId, JsonCodec, Role};
///
/// let codec = JsonCodec;
/// let identity = Identity {
///     id: IdentityId::new("user-007"),
///     username: "ama".into(),
///     name: "Ama Mensah".into(),
///     role: Role::Mttd,
///     avatar: "https://example.com/ama.svg".into(),
///     email: None,
///     phone: None,
///     department: None,
/// };
///
/// let text = codec.encode(&identity).unwrap();
/// let decoded: Identity = codec.decode(&text).unwrap();
/// assert_eq!(identity, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ModelError> {
        serde_json::to_string(value).map_err(ModelError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, ModelError> {
        serde_json::from_str(data).map_err(ModelError::Decode)
    }
}
