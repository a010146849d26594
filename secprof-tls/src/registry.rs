#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Profile Registry
//!
//! Fixed table mapping each named profile to its canonical cipher list,
//! protocol version range and Diffie-Hellman parameter size. The values are
//! reproduced exactly from deployed configurations and must not drift: peers
//! that select "Intermediate" expect exactly this list.
//!
//! | Profile | Ciphers | Min version | Max version | DH size |
//! |---|---|---|---|---|
//! | Old | 48 (36 + 12 exclusions) | TLSv1.0 | TLSv1.2 | 1024 |
//! | Intermediate | 31 (30 + `!DSS`) | TLSv1.0 | TLSv1.2 | 2048 |
//! | Modern | 10 | TLSv1.2 | TLSv1.2 | 2048 |
//!
//! The table is immutable process-wide state, so lookups need no
//! synchronization.

use secprof_core::{
    DhParamSize, NamedProfile, ProfileType, ProtocolVersion, Result, SettingsSpec, TlsVersionRange,
};

// =============================================================================
// CANONICAL CIPHER LISTS
// =============================================================================

/// Cipher list of the Old profile.
///
/// 36 preferences followed by 12 exclusions, matching Mozilla's "Old backward
/// compatibility" recommendation.
pub const OLD_CIPHERS: [&str; 48] = [
    "ECDHE-ECDSA-CHACHA20-POLY1305",
    "ECDHE-RSA-CHACHA20-POLY1305",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "DHE-RSA-AES128-GCM-SHA256",
    "DHE-DSS-AES128-GCM-SHA256",
    "kEDH+AESGCM",
    "ECDHE-RSA-AES128-SHA256",
    "ECDHE-ECDSA-AES128-SHA256",
    "ECDHE-RSA-AES128-SHA",
    "ECDHE-ECDSA-AES128-SHA",
    "ECDHE-RSA-AES256-SHA384",
    "ECDHE-ECDSA-AES256-SHA384",
    "ECDHE-RSA-AES256-SHA",
    "ECDHE-ECDSA-AES256-SHA",
    "DHE-RSA-AES128-SHA256",
    "DHE-RSA-AES128-SHA",
    "DHE-DSS-AES128-SHA256",
    "DHE-RSA-AES256-SHA256",
    "DHE-DSS-AES256-SHA",
    "DHE-RSA-AES256-SHA",
    "ECDHE-RSA-DES-CBC3-SHA",
    "ECDHE-ECDSA-DES-CBC3-SHA",
    "EDH-RSA-DES-CBC3-SHA",
    "AES128-GCM-SHA256",
    "AES256-GCM-SHA384",
    "AES128-SHA256",
    "AES256-SHA256",
    "AES128-SHA",
    "AES256-SHA",
    "AES",
    "DES-CBC3-SHA",
    "HIGH",
    "SEED",
    "!aNULL",
    "!eNULL",
    "!EXPORT",
    "!RC4",
    "!MD5",
    "!PSK",
    "!RSAPSK",
    "!aDH",
    "!aECDH",
    "!EDH-DSS-DES-CBC3-SHA",
    "!KRB5-DES-CBC3-SHA",
    "!SRP",
];

/// Cipher list of the Intermediate profile.
///
/// 30 preferences followed by the `!DSS` exclusion.
pub const INTERMEDIATE_CIPHERS: [&str; 31] = [
    "ECDHE-ECDSA-CHACHA20-POLY1305",
    "ECDHE-RSA-CHACHA20-POLY1305",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "DHE-RSA-AES128-GCM-SHA256",
    "DHE-RSA-AES256-GCM-SHA384",
    "ECDHE-ECDSA-AES128-SHA256",
    "ECDHE-RSA-AES128-SHA256",
    "ECDHE-ECDSA-AES128-SHA",
    "ECDHE-RSA-AES256-SHA384",
    "ECDHE-RSA-AES128-SHA",
    "ECDHE-ECDSA-AES256-SHA384",
    "ECDHE-ECDSA-AES256-SHA",
    "ECDHE-RSA-AES256-SHA",
    "DHE-RSA-AES128-SHA256",
    "DHE-RSA-AES128-SHA",
    "DHE-RSA-AES256-SHA256",
    "DHE-RSA-AES256-SHA",
    "ECDHE-ECDSA-DES-CBC3-SHA",
    "ECDHE-RSA-DES-CBC3-SHA",
    "EDH-RSA-DES-CBC3-SHA",
    "AES128-GCM-SHA256",
    "AES256-GCM-SHA384",
    "AES128-SHA256",
    "AES256-SHA256",
    "AES128-SHA",
    "AES256-SHA",
    "DES-CBC3-SHA",
    "!DSS",
];

/// Cipher list of the Modern profile: AEAD and forward-secret suites only.
pub const MODERN_CIPHERS: [&str; 10] = [
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-ECDSA-CHACHA20-POLY1305",
    "ECDHE-RSA-CHACHA20-POLY1305",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES256-SHA384",
    "ECDHE-RSA-AES256-SHA384",
    "ECDHE-ECDSA-AES128-SHA256",
    "ECDHE-RSA-AES128-SHA256",
];

// =============================================================================
// REGISTRY TABLE
// =============================================================================

/// One row of the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRegistryEntry {
    /// Profile this row describes.
    pub profile: NamedProfile,
    /// Cipher entries in preference order, exclusions included.
    pub ciphers: &'static [&'static str],
    /// Default minimum protocol version.
    pub min_version: ProtocolVersion,
    /// Default maximum protocol version.
    pub max_version: ProtocolVersion,
    /// Diffie-Hellman parameter size.
    pub dh_param_size: DhParamSize,
}

impl ProfileRegistryEntry {
    /// Protocol version range of this row.
    #[must_use]
    pub fn version_range(&self) -> TlsVersionRange {
        TlsVersionRange::new(self.min_version, self.max_version)
    }

    /// This row as an owned settings record.
    #[must_use]
    pub fn settings(&self) -> SettingsSpec {
        SettingsSpec {
            ciphers: self.ciphers.iter().map(|c| (*c).to_string()).collect(),
            tls_version: self.version_range(),
            dh_param_size: self.dh_param_size,
        }
    }
}

/// Registry row for the Old profile.
pub static OLD_PROFILE: ProfileRegistryEntry = ProfileRegistryEntry {
    profile: NamedProfile::Old,
    ciphers: &OLD_CIPHERS,
    min_version: ProtocolVersion::Tls10,
    max_version: ProtocolVersion::Tls12,
    dh_param_size: DhParamSize::Dh1024,
};

/// Registry row for the Intermediate profile.
pub static INTERMEDIATE_PROFILE: ProfileRegistryEntry = ProfileRegistryEntry {
    profile: NamedProfile::Intermediate,
    ciphers: &INTERMEDIATE_CIPHERS,
    min_version: ProtocolVersion::Tls10,
    max_version: ProtocolVersion::Tls12,
    dh_param_size: DhParamSize::Dh2048,
};

/// Registry row for the Modern profile.
pub static MODERN_PROFILE: ProfileRegistryEntry = ProfileRegistryEntry {
    profile: NamedProfile::Modern,
    ciphers: &MODERN_CIPHERS,
    min_version: ProtocolVersion::Tls12,
    max_version: ProtocolVersion::Tls12,
    dh_param_size: DhParamSize::Dh2048,
};

static REGISTRY: [&ProfileRegistryEntry; 3] =
    [&OLD_PROFILE, &INTERMEDIATE_PROFILE, &MODERN_PROFILE];

/// Read-only access to the named profile table.
pub struct ProfileRegistry;

impl ProfileRegistry {
    /// All rows, from most to least permissive.
    #[must_use]
    pub fn entries() -> &'static [&'static ProfileRegistryEntry] {
        &REGISTRY
    }

    /// Row for a named profile.
    #[must_use]
    pub fn entry(profile: NamedProfile) -> &'static ProfileRegistryEntry {
        match profile {
            NamedProfile::Old => &OLD_PROFILE,
            NamedProfile::Intermediate => &INTERMEDIATE_PROFILE,
            NamedProfile::Modern => &MODERN_PROFILE,
        }
    }

    /// Look up the settings for a profile type.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnknownProfile` for [`ProfileType::Custom`]:
    /// Custom settings come from the caller's payload, never from the table.
    pub fn lookup(profile_type: ProfileType) -> Result<SettingsSpec> {
        let profile = NamedProfile::try_from(profile_type)?;
        Ok(Self::entry(profile).settings())
    }

    /// Look up the settings for a profile by wire name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnknownProfile` for `Custom` and for any name
    /// outside the closed set.
    pub fn lookup_name(name: &str) -> Result<SettingsSpec> {
        Self::lookup(name.parse()?)
    }
}
