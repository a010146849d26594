#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! JSON encoding for profile documents and settings records.
//!
//! Thin wrappers over `serde_json` that map failures into
//! [`ProfileError::Serialization`](crate::error::ProfileError::Serialization),
//! plus the field decoder that reads an explicit `null` as the zero value.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Decode a value from JSON text.
///
/// # Errors
///
/// Returns `ProfileError::Serialization` if the text is not valid JSON or does
/// not match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a value as compact JSON.
///
/// # Errors
///
/// Returns `ProfileError::Serialization` if `T` cannot be represented as JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as indented JSON.
///
/// # Errors
///
/// Returns `ProfileError::Serialization` if `T` cannot be represented as JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode a field, reading `null` as `T::default()`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so that a missing
/// field and an explicit `null` both mean "unset".
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither `null` nor a `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, ProfileError};
    use crate::types::{DhParamSize, ProtocolVersion, TlsProfileSpec};

    #[test]
    fn test_profile_spec_json_shape() {
        let spec = TlsProfileSpec::new(["ECDHE-ECDSA-CHACHA20-POLY1305"])
            .with_versions(ProtocolVersion::Tls11, ProtocolVersion::Tls12)
            .with_dh_param_size(DhParamSize::Dh1024);
        let json = to_json(&spec).unwrap();
        let expected = concat!(
            r#"{"ciphers":["ECDHE-ECDSA-CHACHA20-POLY1305"],"#,
            r#""tlsVersion":{"minimumVersion":"TLSv1.1","maximumVersion":"TLSv1.2"},"#,
            r#""dhParamSize":"1024"}"#
        );
        assert_eq!(json, expected);
        assert_eq!(from_json::<TlsProfileSpec>(&json).unwrap(), spec);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = from_json::<TlsProfileSpec>("{\"ciphers\": [").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Serialization);
        assert!(matches!(err, ProfileError::Serialization(_)));
    }

    #[test]
    fn test_null_as_default_still_rejects_wrong_type() {
        let err = from_json::<TlsProfileSpec>(r#"{"tlsVersion":{"minimumVersion":12}}"#)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Serialization);
    }
}
