//! Inline `data:` image references.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use motivate_error::MalformedResponseError;
use std::fmt;

const PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A parsed base64 `data:` URI.
///
/// # Examples
///
/// ```
/// use motivate_core::DataUri;
///
/// let uri = DataUri::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(uri.to_string(), "data:image/png;base64,iVBORw==");
///
/// let parsed = DataUri::parse("data:image/png;base64,iVBORw==").unwrap();
/// assert_eq!(parsed.mime(), "image/png");
/// assert_eq!(parsed.decode().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataUri {
    mime: String,
    payload: String,
}

impl DataUri {
    /// Encode raw bytes as a data URI of the given MIME type.
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            payload: STANDARD.encode(bytes),
        }
    }

    /// Wrap an already base64-encoded payload.
    pub fn from_base64(mime: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            payload: payload.into(),
        }
    }

    /// Parse `data:<mime>;base64,<payload>`.
    ///
    /// Only base64 payloads are accepted; percent-encoded data URIs are not
    /// produced by any image provider we talk to.
    pub fn parse(uri: &str) -> Result<Self, MalformedResponseError> {
        let rest = uri
            .strip_prefix(PREFIX)
            .ok_or_else(|| MalformedResponseError::new("image reference is not a data URI"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| MalformedResponseError::new("data URI has no payload separator"))?;
        let mime = header.strip_suffix(BASE64_MARKER).ok_or_else(|| {
            MalformedResponseError::new(format!("data URI is not base64 encoded: {}", header))
        })?;
        if payload.is_empty() {
            return Err(MalformedResponseError::new("data URI payload is empty"));
        }

        Ok(Self {
            mime: if mime.is_empty() {
                "text/plain".to_string()
            } else {
                mime.to_string()
            },
            payload: payload.to_string(),
        })
    }

    /// MIME type of the payload.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Base64 payload as carried in the URI.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Decode the payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, MalformedResponseError> {
        STANDARD.decode(self.payload.as_bytes()).map_err(|e| {
            MalformedResponseError::new(format!("data URI payload is not valid base64: {}", e))
        })
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{},{}", PREFIX, self.mime, BASE64_MARKER, self.payload)
    }
}
