//! The `{success, data, error}` envelope every PurFacted endpoint answers with.

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

use crate::errors::{ApiError, Result, UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_MESSAGE};

/// A decoded response envelope.
///
/// Only successful envelopes are ever handed to callers; failures are turned into
/// [`crate::Error::Api`] by [`Envelope::into_result`].
///
/// # Examples
/// ```
/// # use purfacted::Envelope;
/// let body = r#"{"success": true, "data": {"facts": []}}"#;
/// let envelope: Envelope = serde_json::from_str(body).unwrap();
/// let envelope = envelope.into_result()?;
/// assert!(envelope.data()["facts"].as_array().unwrap().is_empty());
/// # Ok::<(), purfacted::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    /// `true` when the request succeeded. Missing or `null` means `false`.
    #[serde(default, deserialize_with = "bool_or_false")]
    pub success: bool,
    /// Operation-specific payload, present on success.
    #[serde(default)]
    pub data: Value,
    /// Error details, present on failure.
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// The `error` object of a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    #[serde(default = "unknown_code", deserialize_with = "code_or_unknown")]
    pub code: String,
    /// Human-readable message.
    #[serde(default = "unknown_message", deserialize_with = "message_or_unknown")]
    pub message: String,
}

fn unknown_code() -> String {
    UNKNOWN_ERROR_CODE.to_string()
}

fn unknown_message() -> String {
    UNKNOWN_ERROR_MESSAGE.to_string()
}

// `#[serde(default)]` only covers absent keys; these also map an explicit `null`.

fn bool_or_false<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn code_or_unknown<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_code))
}

fn message_or_unknown<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_message))
}

impl From<ErrorBody> for ApiError {
    fn from(body: ErrorBody) -> Self {
        ApiError::new(body.code, body.message)
    }
}

impl Envelope {
    /// Gate the envelope on its `success` flag.
    ///
    /// Returns the envelope untouched when `success` is true, otherwise an
    /// [`ApiError`] built from `error` (or the `UNKNOWN` defaults).
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            return Ok(self);
        }
        let err = self.error.map(ApiError::from).unwrap_or_default();
        Err(err.into())
    }

    /// Borrow the raw `data` payload (`Value::Null` when the API sent none).
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Take ownership of the raw `data` payload.
    pub fn into_data(self) -> Value {
        self.data
    }

    /// Deserialize `data` into a typed model, see [`crate::models`].
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }
}
