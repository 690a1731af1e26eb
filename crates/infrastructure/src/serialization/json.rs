//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pin_probe_domain::{ResultLog, TestResult};

    fn sample_log() -> ResultLog {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut log = ResultLog::new();
        log.push(TestResult::pass("Device Connectivity", "Device responds on 192.168.4.1", at));
        log.push(TestResult::fail("API Status", "HTTP 404 Not Found", at));
        log
    }

    #[test]
    fn test_stable_serialization_has_trailing_newline() {
        let json = to_json_stable(&sample_log()).expect("serialization should work");
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn test_stable_serialization_uses_two_space_indent() {
        let json = to_json_stable(&sample_log()).expect("serialization should work");
        assert!(json.starts_with("[\n  {\n    \"test\": \"Device Connectivity\""));
    }

    #[test]
    fn test_log_reads_back() {
        let original = sample_log();
        let json = to_json_stable(&original).expect("serialization should work");
        let restored: ResultLog = from_json(&json).expect("deserialization should work");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result: Result<ResultLog, _> = from_json("[{\"test\": }]");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
