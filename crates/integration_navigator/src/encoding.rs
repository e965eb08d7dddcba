//! Response text repair and decoding
//!
//! Most navigator endpoints answer with Latin-1 bytes, a few with UTF-8.
//! Payloads may also contain raw line breaks inside JSON strings and report
//! failures as `{"error": "..."}` with a 200 status. Everything coming off
//! the wire passes through [`decode_response`] before it reaches a model.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::NavigatorError;

/// Character encoding an endpoint is known to answer with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1, every byte is one code point
    Latin1,
    /// UTF-8
    Utf8,
}

/// Turn raw response bytes into JSON-safe UTF-8 text
///
/// # Errors
///
/// Returns `NavigatorError::ReEncodingFailed` if `encoding` is UTF-8 and the
/// bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use integration_navigator::{TextEncoding, normalize};
///
/// let latin1 = b"{\"str\": \"N\xf6thnitzer\nStr.\"}";
/// let text = normalize(latin1, TextEncoding::Latin1).unwrap();
/// assert_eq!(text, "{\"str\": \"NöthnitzerStr.\"}");
/// ```
pub fn normalize(bytes: &[u8], encoding: TextEncoding) -> Result<String, NavigatorError> {
    let text = match encoding {
        TextEncoding::Latin1 => bytes.iter().copied().map(char::from).collect::<String>(),
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map_err(|_| NavigatorError::ReEncodingFailed)?
            .to_owned(),
    };
    Ok(text.replace(['\n', '\r'], ""))
}

/// Normalize `bytes` and decode them as `T`
///
/// # Errors
///
/// - `ReEncodingFailed` if the bytes cannot be turned into text
/// - `ServerReportedError` if the payload is an error envelope
/// - `DecodeFailed` if the text does not match the shape of `T`
pub fn decode_response<T: DeserializeOwned>(
    bytes: &[u8],
    encoding: TextEncoding,
) -> Result<T, NavigatorError> {
    let text = normalize(bytes, encoding)?;

    if let Some(message) = error_envelope(&text) {
        debug!(%message, "Payload is an error envelope");
        return Err(NavigatorError::ServerReportedError(message));
    }

    serde_json::from_str(&text).map_err(|e| NavigatorError::DecodeFailed(e.to_string()))
}

/// Error text of a non-success response body
///
/// The envelope message if there is one, otherwise the trimmed text. `None`
/// for empty or unrepairable bodies.
pub(crate) fn status_message(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    let text = normalize(bytes, encoding).ok()?;
    error_envelope(&text).or_else(|| {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Extract the message of a `{"error": "..."}` payload
fn error_envelope(text: &str) -> Option<String> {
    let Ok(Value::Object(mut map)) = serde_json::from_str::<Value>(text) else {
        return None;
    };
    if map.len() != 1 {
        return None;
    }
    match map.remove("error") {
        Some(Value::String(message)) => Some(message),
        _ => None,
    }
}
