//! Error types for TLS security profile resolution.
//!
//! Every error is a deterministic function of the caller's input: nothing here
//! is retryable and nothing is recovered from locally. Callers decide how to
//! present a rejection (for example, as a configuration-rejected status).

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use thiserror::Error;

use crate::types::ProtocolVersion;

/// Stable error codes for machine-readable reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Selection errors (1000-1099)
    /// More than one payload, or discriminator and payload disagree.
    AmbiguousSelection = 1001,
    /// Neither a discriminator nor a payload was supplied.
    NoProfileSelected = 1002,
    /// Discriminator outside the closed set, or registry asked for Custom.
    UnknownProfile = 1003,

    // Validation errors (2000-2099)
    /// Cipher list is empty.
    EmptyCipherList = 2001,
    /// Protocol version outside the supported set.
    UnsupportedVersion = 2002,
    /// Minimum version is newer than maximum version.
    InvertedVersionRange = 2003,
    /// Diffie-Hellman parameter size outside the supported set.
    UnsupportedDhSize = 2004,

    // Handoff errors (3000-3099)
    /// The TLS library implements no version inside the range.
    NoNegotiableVersion = 3001,

    // Encoding errors (4000-4099)
    /// Malformed or unencodable document.
    Serialization = 4001,
}

impl ErrorCode {
    /// Numeric value of the code.
    #[must_use]
    pub fn value(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::AmbiguousSelection => write!(f, "AMBIGUOUS_SELECTION"),
            ErrorCode::NoProfileSelected => write!(f, "NO_PROFILE_SELECTED"),
            ErrorCode::UnknownProfile => write!(f, "UNKNOWN_PROFILE"),
            ErrorCode::EmptyCipherList => write!(f, "EMPTY_CIPHER_LIST"),
            ErrorCode::UnsupportedVersion => write!(f, "UNSUPPORTED_VERSION"),
            ErrorCode::InvertedVersionRange => write!(f, "INVERTED_VERSION_RANGE"),
            ErrorCode::UnsupportedDhSize => write!(f, "UNSUPPORTED_DH_SIZE"),
            ErrorCode::NoNegotiableVersion => write!(f, "NO_NEGOTIABLE_VERSION"),
            ErrorCode::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// What the caller can do about an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryHint {
    /// The input cannot be fixed by changing a single field.
    NoRecovery,
    /// Change the named field and resubmit.
    Reconfigure {
        /// Field to change.
        field: String,
        /// Suggested value or approach.
        suggestion: String,
    },
}

/// Errors produced while selecting, resolving or validating a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// More than one payload populated, or discriminator and payload disagree.
    #[error("Ambiguous {kind} selection: {reason}")]
    AmbiguousSelection {
        /// Schema the selection came from.
        kind: &'static str,
        /// What made the selection ambiguous.
        reason: String,
    },

    /// Nothing selected and no fallback profile configured.
    #[error("No {kind} selected: set a profile type or exactly one profile payload")]
    NoProfileSelected {
        /// Schema the selection came from.
        kind: &'static str,
    },

    /// Discriminator outside the closed set, or registry lookup for Custom.
    #[error("Unknown profile type: {name:?}")]
    UnknownProfile {
        /// The rejected name.
        name: String,
    },

    /// The cipher list is empty.
    #[error("Cipher list must not be empty")]
    EmptyCipherList,

    /// A protocol version outside the supported set.
    #[error("Unsupported TLS protocol version in {field}: {value:?}")]
    UnsupportedVersion {
        /// `minimumVersion` or `maximumVersion`.
        field: &'static str,
        /// The rejected value; empty when unset.
        value: String,
    },

    /// Minimum version is newer than maximum version.
    #[error("Inverted TLS version range: minimum {minimum} is newer than maximum {maximum}")]
    InvertedVersionRange {
        /// Requested minimum.
        minimum: ProtocolVersion,
        /// Requested maximum.
        maximum: ProtocolVersion,
    },

    /// Diffie-Hellman parameter size outside the supported set.
    #[error("Unsupported Diffie-Hellman parameter size: {value:?}")]
    UnsupportedDhSize {
        /// The rejected value; empty when unset.
        value: String,
    },

    /// The TLS library implements no version inside the resolved range.
    #[error("No TLS protocol version between {minimum} and {maximum} is usable by the TLS library")]
    NoNegotiableVersion {
        /// Resolved minimum.
        minimum: ProtocolVersion,
        /// Resolved maximum.
        maximum: ProtocolVersion,
    },

    /// Malformed or unencodable document.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProfileError {
    /// Get error code
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::AmbiguousSelection { .. } => ErrorCode::AmbiguousSelection,
            ProfileError::NoProfileSelected { .. } => ErrorCode::NoProfileSelected,
            ProfileError::UnknownProfile { .. } => ErrorCode::UnknownProfile,
            ProfileError::EmptyCipherList => ErrorCode::EmptyCipherList,
            ProfileError::UnsupportedVersion { .. } => ErrorCode::UnsupportedVersion,
            ProfileError::InvertedVersionRange { .. } => ErrorCode::InvertedVersionRange,
            ProfileError::UnsupportedDhSize { .. } => ErrorCode::UnsupportedDhSize,
            ProfileError::NoNegotiableVersion { .. } => ErrorCode::NoNegotiableVersion,
            ProfileError::Serialization(_) => ErrorCode::Serialization,
        }
    }

    /// Wire field the error refers to, if it refers to exactly one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProfileError::UnknownProfile { .. } => Some("type"),
            ProfileError::EmptyCipherList => Some("ciphers"),
            ProfileError::UnsupportedVersion { field, .. } => Some(*field),
            ProfileError::InvertedVersionRange { .. }
            | ProfileError::NoNegotiableVersion { .. } => Some("tlsVersion"),
            ProfileError::UnsupportedDhSize { .. } => Some("dhParamSize"),
            ProfileError::AmbiguousSelection { .. }
            | ProfileError::NoProfileSelected { .. }
            | ProfileError::Serialization(_) => None,
        }
    }

    /// Get recovery hint
    #[must_use]
    pub fn recovery_hint(&self) -> RecoveryHint {
        let reconfigure = |field: &str, suggestion: &str| RecoveryHint::Reconfigure {
            field: field.to_string(),
            suggestion: suggestion.to_string(),
        };

        match self {
            ProfileError::AmbiguousSelection { .. } => reconfigure(
                "type",
                "Populate exactly one of old, intermediate, modern or custom, matching type",
            ),
            ProfileError::NoProfileSelected { .. } => {
                reconfigure("type", "Set type to Old, Intermediate, Modern or Custom")
            }
            ProfileError::UnknownProfile { .. } => {
                reconfigure("type", "Use one of Old, Intermediate, Modern or Custom")
            }
            ProfileError::EmptyCipherList => {
                reconfigure("ciphers", "List at least one cipher in preference order")
            }
            ProfileError::UnsupportedVersion { field, .. } => {
                reconfigure(*field, "Use one of TLSv1.0, TLSv1.1, TLSv1.2 or TLSv1.3")
            }
            ProfileError::InvertedVersionRange { .. } => reconfigure(
                "tlsVersion",
                "minimumVersion must be lower than or equal to maximumVersion",
            ),
            ProfileError::UnsupportedDhSize { .. } => {
                reconfigure("dhParamSize", "Use \"1024\" or \"2048\"")
            }
            ProfileError::NoNegotiableVersion { .. } => {
                reconfigure("tlsVersion", "Include TLSv1.2 or TLSv1.3 in the version range")
            }
            ProfileError::Serialization(_) => RecoveryHint::NoRecovery,
        }
    }

    /// Always `false`: rejections depend only on the input, so retrying the
    /// same input yields the same error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        false
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Serialization(err.to_string())
    }
}

/// Result alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
