#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Settings Validator
//!
//! Structural checks over a settings record, in a fixed order where the first
//! failure wins:
//!
//! 1. `ciphers` is non-empty
//! 2. `minimumVersion` and `maximumVersion` are supported versions
//! 3. `minimumVersion <= maximumVersion`
//! 4. `dhParamSize` is 1024 or 2048
//!
//! Validation never rewrites its input. It is usable on its own, for example
//! to confirm that a status object mirrored back from a running instance is
//! well-formed.

use secprof_core::{
    DhParamSize, ProfileError, ProtocolVersion, Result, SettingsSpec, TlsProfileSpec,
    TlsVersionRange,
};

/// Validate a wire settings record and produce its typed form.
///
/// # Errors
///
/// Returns the first violated check: `EmptyCipherList`, `UnsupportedVersion`
/// (naming `minimumVersion` or `maximumVersion`), `InvertedVersionRange` or
/// `UnsupportedDhSize`.
pub fn validate(spec: &TlsProfileSpec) -> Result<SettingsSpec> {
    if spec.ciphers.is_empty() {
        return Err(ProfileError::EmptyCipherList);
    }

    let minimum = supported_version("minimumVersion", &spec.tls_version.minimum_version)?;
    let maximum = supported_version("maximumVersion", &spec.tls_version.maximum_version)?;
    check_order(minimum, maximum)?;

    let dh_param_size = DhParamSize::parse(&spec.dh_param_size)
        .ok_or_else(|| ProfileError::UnsupportedDhSize { value: spec.dh_param_size.clone() })?;

    Ok(SettingsSpec {
        ciphers: spec.ciphers.clone(),
        tls_version: TlsVersionRange::new(minimum, maximum),
        dh_param_size,
    })
}

/// Re-check the invariants of an already typed record.
///
/// Version membership and DH size are guaranteed by the types; cipher list
/// and ordering are not.
///
/// # Errors
///
/// Returns `EmptyCipherList` or `InvertedVersionRange`.
pub fn validate_settings(settings: &SettingsSpec) -> Result<()> {
    if settings.ciphers.is_empty() {
        return Err(ProfileError::EmptyCipherList);
    }
    check_order(settings.minimum_version(), settings.maximum_version())
}

/// Whether [`validate`] would accept the record.
#[must_use]
pub fn is_valid(spec: &TlsProfileSpec) -> bool {
    validate(spec).is_ok()
}

fn supported_version(field: &'static str, value: &str) -> Result<ProtocolVersion> {
    ProtocolVersion::parse(value)
        .ok_or_else(|| ProfileError::UnsupportedVersion { field, value: value.to_string() })
}

fn check_order(minimum: ProtocolVersion, maximum: ProtocolVersion) -> Result<()> {
    if minimum > maximum {
        return Err(ProfileError::InvertedVersionRange { minimum, maximum });
    }
    Ok(())
}
