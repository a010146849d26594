#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! secprof - Named TLS Security Profiles
//!
//! Resolves a TLS security profile selection (Old, Intermediate, Modern or
//! Custom) into the concrete cipher list, protocol version range and
//! Diffie-Hellman parameter size a TLS listener enforces.
//!
//! ## Basic Usage
//!
//! ```rust
//! use secprof::{ProtocolVersion, resolve_tls_profile_json};
//!
//! let settings = resolve_tls_profile_json(r#"{"type": "Modern"}"#)?;
//! assert_eq!(settings.minimum_version(), ProtocolVersion::Tls12);
//! assert_eq!(settings.ciphers.len(), 10);
//! # Ok::<(), secprof::ProfileError>(())
//! ```
//!
//! ## Custom Profiles
//!
//! ```rust
//! use secprof::{
//!     DhParamSize, ProtocolVersion, TlsProfileSpec, TlsSecurityProfile, resolve_profile,
//! };
//!
//! let custom = TlsProfileSpec::new(["ECDHE-RSA-AES128-GCM-SHA256", "!aNULL"])
//!     .with_maximum_version(ProtocolVersion::Tls13)
//!     .with_dh_param_size(DhParamSize::Dh2048);
//!
//! // Only the maximum is set, so the minimum copies it
//! let settings = resolve_profile(&TlsSecurityProfile::custom(custom))?;
//! assert_eq!(settings.minimum_version(), ProtocolVersion::Tls13);
//! # Ok::<(), secprof::ProfileError>(())
//! ```
//!
//! ## Empty Selections
//!
//! The default [`ResolverConfig`] rejects a selection that names nothing.
//! [`ResolverConfig::documented_defaults`] treats it as Old instead:
//!
//! ```rust
//! use secprof::{NamedProfile, ProfileRegistry, ResolverConfig, resolve_tls_profile_json_with};
//!
//! assert!(secprof::resolve_tls_profile_json("{}").is_err());
//!
//! let settings = resolve_tls_profile_json_with("{}", &ResolverConfig::documented_defaults())?;
//! assert_eq!(settings, ProfileRegistry::entry(NamedProfile::Old).settings());
//! # Ok::<(), secprof::ProfileError>(())
//! ```
//!
//! ## Handing Off to rustls
//!
//! ```rust
//! use secprof::{resolve_tls_profile_json, rustls_protocol_versions};
//!
//! let settings = resolve_tls_profile_json(r#"{"type": "Intermediate"}"#)?;
//! let versions = rustls_protocol_versions(&settings)?;
//! assert_eq!(versions.len(), 1);
//! # Ok::<(), secprof::ProfileError>(())
//! ```

use tracing::debug;

pub use secprof_core as core;
pub use secprof_tls as tls;

// ============================================================================
// Core Types
// ============================================================================

// Vocabulary
pub use secprof_core::{
    CIPHER_DISABLE_PREFIX, DhParamSize, NamedProfile, ProfileType, ProtocolVersion, SettingsSpec,
    TlsProfileSpec, TlsVersion, TlsVersionRange,
};

// Errors
pub use secprof_core::{ErrorCode, ProfileError, RecoveryHint, Result};

// Configuration
pub use secprof_core::ResolverConfig;

// Serialization
pub use secprof_core::{from_json, to_json, to_json_pretty};

// Initialization
pub use secprof_core::{VERSION, init_tracing};

// ============================================================================
// Profiles
// ============================================================================

// Registry
pub use secprof_tls::{ProfileRegistry, ProfileRegistryEntry};

// Selection documents
pub use secprof_tls::{
    ConnectionSecurityProfile, ProfileSchema, ProfileSelection, SecurityProfileDocument,
    TlsSecurityProfile,
};

// Resolution and validation
pub use secprof_tls::{ProfileResolver, is_valid, validate, validate_settings};

// rustls handoff
pub use secprof_tls::{ListenerSettings, rustls_protocol_versions};

// ============================================================================
// Convenience API
// ============================================================================

/// Resolve a selection document with the default (strict) configuration.
///
/// # Errors
///
/// Returns any error of [`ProfileResolver::resolve_document`].
pub fn resolve_profile<S: ProfileSchema>(
    document: &SecurityProfileDocument<S>,
) -> Result<SettingsSpec> {
    ProfileResolver::default().resolve_document(document)
}

/// Resolve a selection document with an explicit configuration.
///
/// # Errors
///
/// Returns any error of [`ProfileResolver::resolve_document`].
pub fn resolve_profile_with_config<S: ProfileSchema>(
    document: &SecurityProfileDocument<S>,
    config: &ResolverConfig,
) -> Result<SettingsSpec> {
    ProfileResolver::new(config.clone()).resolve_document(document)
}

/// Decode and resolve a `tlsSecurityProfile` JSON document with the default
/// (strict) configuration.
///
/// # Errors
///
/// Returns `ProfileError::Serialization` for malformed JSON, otherwise any
/// error of [`ProfileResolver::resolve_document`].
pub fn resolve_tls_profile_json(json: &str) -> Result<SettingsSpec> {
    resolve_tls_profile_json_with(json, &ResolverConfig::default())
}

/// Decode and resolve a `tlsSecurityProfile` JSON document.
///
/// # Errors
///
/// Returns `ProfileError::Serialization` for malformed JSON, otherwise any
/// error of [`ProfileResolver::resolve_document`].
pub fn resolve_tls_profile_json_with(json: &str, config: &ResolverConfig) -> Result<SettingsSpec> {
    debug!(bytes = json.len(), "Decoding TLS security profile document");
    let document: TlsSecurityProfile = from_json(json)?;
    resolve_profile_with_config(&document, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_profile_strict() {
        let err = resolve_profile(&TlsSecurityProfile::new()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoProfileSelected);
    }

    #[test]
    fn test_resolve_profile_with_config() {
        let config = ResolverConfig::new().with_fallback_profile(NamedProfile::Modern);
        let settings =
            resolve_profile_with_config(&ConnectionSecurityProfile::new(), &config).unwrap();
        assert_eq!(settings, ProfileRegistry::entry(NamedProfile::Modern).settings());
    }

    #[test]
    fn test_json_entry_point() {
        let settings = resolve_tls_profile_json(r#"{"old": {}}"#).unwrap();
        assert_eq!(settings.dh_param_size, DhParamSize::Dh1024);
        assert_eq!(
            resolve_tls_profile_json("not json").unwrap_err().code(),
            ErrorCode::Serialization
        );
    }
}
