//! runtime::protocol
//!
//! Wire types for the line-oriented status protocol.
//!
//! # Framing
//!
//! One exchange per connection. The client writes one UTF-8 JSON object
//! terminated by `\n`, then reads one JSON object terminated by `\n`:
//!
//! ```text
//! -> {"cmd":"status","verbose":false}
//! <- {"ok":true,"data":{...},"error":null}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::TransportError;
use crate::core::payload::StatusPayload;

/// Command name for status requests.
pub const STATUS_COMMAND: &str = "status";

/// A request line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub cmd: String,
    pub verbose: bool,
}

impl Request {
    /// A status request.
    pub fn status(verbose: bool) -> Self {
        Self {
            cmd: STATUS_COMMAND.to_string(),
            verbose,
        }
    }

    /// Encode as one newline-terminated line.
    pub fn to_line(&self) -> Result<Vec<u8>, TransportError> {
        let mut line = serde_json::to_vec(self).map_err(TransportError::protocol)?;
        line.push(b'\n');
        Ok(line)
    }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// The fixed `{ok, data, error}` shape of every response line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub error: Option<ResponseError>,
}

impl Envelope {
    /// Decode a response line. Surrounding whitespace is ignored.
    pub fn from_line(line: &[u8]) -> Result<Self, TransportError> {
        let text = std::str::from_utf8(line).map_err(TransportError::protocol)?;
        serde_json::from_str(text.trim()).map_err(TransportError::protocol)
    }

    /// Turn the envelope into a payload or a Response-classified error.
    ///
    /// A successful envelope with `data` absent or null yields an empty
    /// payload.
    pub fn into_result(self) -> Result<StatusPayload, TransportError> {
        if self.ok {
            return Ok(self.data.unwrap_or_default().into());
        }
        match self.error {
            Some(ResponseError { code, message }) => Err(TransportError::Response { code, message }),
            None => Err(TransportError::UnknownResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ErrorKind;

    #[test]
    fn request_line_matches_wire_format() {
        let line = Request::status(true).to_line().unwrap();
        assert_eq!(line, b"{\"cmd\":\"status\",\"verbose\":true}\n");
    }

    #[test]
    fn ok_envelope_yields_data() {
        let envelope =
            Envelope::from_line(br#"{"ok":true,"data":{"mode":"connected"}}"#).unwrap();
        let payload = envelope.into_result().unwrap();
        assert_eq!(payload.mode(), Some("connected"));
    }

    #[test]
    fn ok_envelope_with_null_data_is_empty() {
        let envelope = Envelope::from_line(b"{\"ok\":true,\"data\":null}\r\n").unwrap();
        assert!(envelope.into_result().unwrap().is_empty());
    }

    #[test]
    fn failed_envelope_carries_code_and_message() {
        let envelope = Envelope::from_line(
            br#"{"ok":false,"error":{"code":"not_ready","message":"booting"}}"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Response);
        assert_eq!(err.to_string(), "response: not_ready: booting");
    }

    #[test]
    fn failed_envelope_without_error_is_unknown() {
        let envelope = Envelope::from_line(br#"{"ok":false,"error":null}"#).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(TransportError::UnknownResponse)
        ));
    }

    #[test]
    fn malformed_lines_are_protocol_errors() {
        for line in [&b"not json"[..], b"{\"data\":{}}", b"[1,2]", b"\xff\xfe"] {
            let err = Envelope::from_line(line).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Protocol, "line {:?}", line);
        }
    }

    #[test]
    fn non_object_data_is_protocol_error() {
        let err = Envelope::from_line(br#"{"ok":true,"data":[1]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }
}
