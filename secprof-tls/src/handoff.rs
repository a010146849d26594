#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! TLS listener handoff.
//!
//! Translates resolved settings into what a rustls-based listener consumes.
//! rustls implements TLS 1.2 and TLS 1.3 only, so older versions in a range
//! are dropped here. Cipher entries and the DH size are passed through
//! untouched for OpenSSL-style consumers.

use rustls::SupportedProtocolVersion;
use tracing::debug;

use secprof_core::{ProfileError, ProtocolVersion, Result, SettingsSpec};

/// The rustls protocol version matching a profile version.
#[must_use]
pub fn rustls_version(version: ProtocolVersion) -> rustls::ProtocolVersion {
    match version {
        ProtocolVersion::Tls10 => rustls::ProtocolVersion::TLSv1_0,
        ProtocolVersion::Tls11 => rustls::ProtocolVersion::TLSv1_1,
        ProtocolVersion::Tls12 => rustls::ProtocolVersion::TLSv1_2,
        ProtocolVersion::Tls13 => rustls::ProtocolVersion::TLSv1_3,
    }
}

/// Protocol versions rustls can negotiate inside the resolved range.
///
/// # Errors
///
/// Returns `ProfileError::NoNegotiableVersion` if the range contains neither
/// TLS 1.2 nor TLS 1.3.
pub fn rustls_protocol_versions(
    settings: &SettingsSpec,
) -> Result<Vec<&'static SupportedProtocolVersion>> {
    let min_num = settings.minimum_version().wire_code();
    let max_num = settings.maximum_version().wire_code();

    let versions: Vec<&'static SupportedProtocolVersion> = rustls::ALL_VERSIONS
        .iter()
        .filter(|v| {
            let v_num: u16 = v.version.into();
            v_num >= min_num && v_num <= max_num
        })
        .copied()
        .collect();

    if versions.is_empty() {
        return Err(ProfileError::NoNegotiableVersion {
            minimum: settings.minimum_version(),
            maximum: settings.maximum_version(),
        });
    }

    debug!(count = versions.len(), "Selected rustls protocol versions");
    Ok(versions)
}

/// Everything a listener needs from a resolved profile.
#[derive(Debug, Clone)]
pub struct ListenerSettings {
    /// Versions to enable in rustls.
    pub protocol_versions: Vec<&'static SupportedProtocolVersion>,
    /// Cipher entries in preference order, `!` exclusions included.
    pub cipher_rules: Vec<String>,
    /// Ceiling for ephemeral Diffie-Hellman parameters, in bits.
    pub dh_param_bits: u32,
}

impl ListenerSettings {
    /// Build listener settings from a resolved profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NoNegotiableVersion` as
    /// [`rustls_protocol_versions`] does.
    pub fn from_settings(settings: &SettingsSpec) -> Result<Self> {
        Ok(Self {
            protocol_versions: rustls_protocol_versions(settings)?,
            cipher_rules: settings.ciphers.clone(),
            dh_param_bits: settings.dh_param_size.bits(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secprof_core::{DhParamSize, NamedProfile, TlsVersionRange};

    use crate::registry::ProfileRegistry;

    fn settings(minimum: ProtocolVersion, maximum: ProtocolVersion) -> SettingsSpec {
        SettingsSpec {
            ciphers: vec!["ECDHE-RSA-AES128-GCM-SHA256".into()],
            tls_version: TlsVersionRange::new(minimum, maximum),
            dh_param_size: DhParamSize::Dh2048,
        }
    }

    fn wire_versions(
        versions: &[&'static SupportedProtocolVersion],
    ) -> Vec<rustls::ProtocolVersion> {
        versions.iter().map(|v| v.version).collect()
    }

    #[test]
    fn test_named_profiles_negotiate_tls12() {
        for profile in [NamedProfile::Old, NamedProfile::Modern] {
            let settings = ProfileRegistry::entry(profile).settings();
            let versions = rustls_protocol_versions(&settings).unwrap();
            assert_eq!(wire_versions(&versions), [rustls::ProtocolVersion::TLSv1_2]);
        }
    }

    #[test]
    fn test_tls13_only() {
        let versions =
            rustls_protocol_versions(&settings(ProtocolVersion::Tls13, ProtocolVersion::Tls13))
                .unwrap();
        assert_eq!(wire_versions(&versions), [rustls::ProtocolVersion::TLSv1_3]);
    }

    #[test]
    fn test_full_range_includes_both() {
        let versions =
            rustls_protocol_versions(&settings(ProtocolVersion::Tls10, ProtocolVersion::Tls13))
                .unwrap();
        assert_eq!(versions.len(), 2);
    }

    #[test]
    fn test_legacy_only_range_rejected() {
        let err =
            rustls_protocol_versions(&settings(ProtocolVersion::Tls10, ProtocolVersion::Tls11))
                .unwrap_err();
        assert_eq!(
            err,
            ProfileError::NoNegotiableVersion {
                minimum: ProtocolVersion::Tls10,
                maximum: ProtocolVersion::Tls11,
            }
        );
    }

    #[test]
    fn test_rustls_version_codes_agree() {
        for version in ProtocolVersion::ALL {
            assert_eq!(u16::from(rustls_version(version)), version.wire_code());
        }
    }

    #[test]
    fn test_listener_settings_pass_through() {
        let settings = ProfileRegistry::entry(NamedProfile::Intermediate).settings();
        let listener = ListenerSettings::from_settings(&settings).unwrap();
        assert_eq!(listener.cipher_rules, settings.ciphers);
        assert_eq!(listener.dh_param_bits, 2048);
    }
}
