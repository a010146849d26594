#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Vocabulary types for TLS security profiles.
//!
//! Two shapes of settings record live here:
//!
//! - [`TlsProfileSpec`] is the wire record. Its version and DH fields are plain
//!   strings, and the empty string means "unset". Custom payloads and status
//!   objects mirrored back from running instances arrive in this shape.
//! - [`SettingsSpec`] is the typed record the resolver and validator return.
//!   It serializes to exactly the same wire shape. Decoding one directly only
//!   checks version and DH membership; records arriving from outside should go
//!   through `validate_settings` before use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProfileError, Result};
use crate::serialization::null_as_default;

/// Leading marker that turns a cipher entry into an exclusion.
pub const CIPHER_DISABLE_PREFIX: char = '!';

// =============================================================================
// PROFILE TYPES
// =============================================================================

/// Discriminator of a TLS security profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    /// Old backward compatibility profile.
    Old,
    /// Intermediate compatibility profile.
    Intermediate,
    /// Modern compatibility profile.
    Modern,
    /// User-defined parameters.
    Custom,
}

impl ProfileType {
    /// All profile types, in declaration order.
    pub const ALL: [ProfileType; 4] =
        [ProfileType::Old, ProfileType::Intermediate, ProfileType::Modern, ProfileType::Custom];

    /// Wire name of this profile type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::Intermediate => "Intermediate",
            Self::Modern => "Modern",
            Self::Custom => "Custom",
        }
    }

    /// Mozilla Server Side TLS recommendation the named profile is based on.
    ///
    /// Custom profiles have no reference.
    #[must_use]
    pub fn reference_url(&self) -> Option<&'static str> {
        match self {
            Self::Old => {
                Some("https://wiki.mozilla.org/Security/Server_Side_TLS#Old_backward_compatibility")
            }
            Self::Intermediate => Some(
                "https://wiki.mozilla.org/Security/Server_Side_TLS#Intermediate_compatibility_.28default.29",
            ),
            Self::Modern => {
                Some("https://wiki.mozilla.org/Security/Server_Side_TLS#Modern_compatibility")
            }
            Self::Custom => None,
        }
    }

    /// The named profile for this type, or `None` for [`ProfileType::Custom`].
    #[must_use]
    pub fn named(&self) -> Option<NamedProfile> {
        match self {
            Self::Old => Some(NamedProfile::Old),
            Self::Intermediate => Some(NamedProfile::Intermediate),
            Self::Modern => Some(NamedProfile::Modern),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ProfileError::UnknownProfile { name: s.to_string() })
    }
}

/// A profile type backed by the fixed registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedProfile {
    /// Old backward compatibility profile.
    Old,
    /// Intermediate compatibility profile.
    Intermediate,
    /// Modern compatibility profile.
    Modern,
}

impl NamedProfile {
    /// All named profiles, from most to least permissive.
    pub const ALL: [NamedProfile; 3] =
        [NamedProfile::Old, NamedProfile::Intermediate, NamedProfile::Modern];

    /// The discriminator value for this profile.
    #[must_use]
    pub fn profile_type(&self) -> ProfileType {
        match self {
            Self::Old => ProfileType::Old,
            Self::Intermediate => ProfileType::Intermediate,
            Self::Modern => ProfileType::Modern,
        }
    }
}

impl fmt::Display for NamedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile_type().as_str())
    }
}

impl From<NamedProfile> for ProfileType {
    fn from(profile: NamedProfile) -> Self {
        profile.profile_type()
    }
}

impl TryFrom<ProfileType> for NamedProfile {
    type Error = ProfileError;

    fn try_from(profile_type: ProfileType) -> Result<Self> {
        profile_type
            .named()
            .ok_or_else(|| ProfileError::UnknownProfile { name: profile_type.to_string() })
    }
}

// =============================================================================
// PROTOCOL VERSIONS AND DH SIZES
// =============================================================================

/// TLS protocol version, ordered from oldest to newest.
///
/// SSLv3.0 is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// TLS 1.0
    #[serde(rename = "TLSv1.0")]
    Tls10,
    /// TLS 1.1
    #[serde(rename = "TLSv1.1")]
    Tls11,
    /// TLS 1.2
    #[serde(rename = "TLSv1.2")]
    Tls12,
    /// TLS 1.3
    #[serde(rename = "TLSv1.3")]
    Tls13,
}

impl ProtocolVersion {
    /// All supported versions, oldest first.
    pub const ALL: [ProtocolVersion; 4] = [
        ProtocolVersion::Tls10,
        ProtocolVersion::Tls11,
        ProtocolVersion::Tls12,
        ProtocolVersion::Tls13,
    ];

    /// Wire name, e.g. `TLSv1.2`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tls10 => "TLSv1.0",
            Self::Tls11 => "TLSv1.1",
            Self::Tls12 => "TLSv1.2",
            Self::Tls13 => "TLSv1.3",
        }
    }

    /// Code point carried in the TLS record layer.
    #[must_use]
    pub fn wire_code(&self) -> u16 {
        match self {
            Self::Tls10 => 0x0301,
            Self::Tls11 => 0x0302,
            Self::Tls12 => 0x0303,
            Self::Tls13 => 0x0304,
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the supported set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ProfileError::UnsupportedVersion {
            field: "tlsVersion",
            value: s.to_string(),
        })
    }
}

/// Maximum size of the ephemeral Diffie-Hellman parameters for DHE key exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DhParamSize {
    /// 1024-bit parameters.
    #[serde(rename = "1024")]
    Dh1024,
    /// 2048-bit parameters.
    #[serde(rename = "2048")]
    Dh2048,
}

impl DhParamSize {
    /// All supported sizes.
    pub const ALL: [DhParamSize; 2] = [DhParamSize::Dh1024, DhParamSize::Dh2048];

    /// Size in bits.
    #[must_use]
    pub fn bits(&self) -> u32 {
        match self {
            Self::Dh1024 => 1024,
            Self::Dh2048 => 2048,
        }
    }

    /// Wire form, e.g. `"2048"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dh1024 => "1024",
            Self::Dh2048 => "2048",
        }
    }

    /// Parse a wire value. Returns `None` for unsupported sizes.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for DhParamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DhParamSize {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ProfileError::UnsupportedDhSize { value: s.to_string() })
    }
}

// =============================================================================
// WIRE SETTINGS RECORD
// =============================================================================

/// Protocol version bounds as they appear on the wire.
///
/// An empty string means the bound is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsVersion {
    /// Oldest version that may be negotiated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum_version: String,
    /// Newest version that may be negotiated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub maximum_version: String,
}

impl TlsVersion {
    /// Both bounds set.
    #[must_use]
    pub fn new(minimum: ProtocolVersion, maximum: ProtocolVersion) -> Self {
        Self { minimum_version: minimum.to_string(), maximum_version: maximum.to_string() }
    }

    /// Whether neither bound is set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.minimum_version.is_empty() && self.maximum_version.is_empty()
    }
}

/// Settings record in its wire form: a Custom payload or a mirrored status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsProfileSpec {
    /// Cipher entries in preference order. A leading `!` excludes the cipher.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ciphers: Vec<String>,
    /// Protocol version bounds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tls_version: TlsVersion,
    /// Diffie-Hellman parameter size, e.g. `"2048"`.
    #[serde(default, deserialize_with = "dh_param_size_text")]
    pub dh_param_size: String,
}

impl TlsProfileSpec {
    /// Create a spec with the given ciphers and nothing else set.
    #[must_use]
    pub fn new<I, S>(ciphers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { ciphers: ciphers.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    /// Set both version bounds.
    #[must_use]
    pub fn with_versions(mut self, minimum: ProtocolVersion, maximum: ProtocolVersion) -> Self {
        self.tls_version = TlsVersion::new(minimum, maximum);
        self
    }

    /// Set the minimum version only.
    #[must_use]
    pub fn with_minimum_version(mut self, version: ProtocolVersion) -> Self {
        self.tls_version.minimum_version = version.to_string();
        self
    }

    /// Set the maximum version only.
    #[must_use]
    pub fn with_maximum_version(mut self, version: ProtocolVersion) -> Self {
        self.tls_version.maximum_version = version.to_string();
        self
    }

    /// Set the Diffie-Hellman parameter size.
    #[must_use]
    pub fn with_dh_param_size(mut self, size: DhParamSize) -> Self {
        self.dh_param_size = size.to_string();
        self
    }
}

// YAML authors write `dhParamSize: 2048` as often as `"2048"`.
fn dh_param_size_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Number(u64),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::String(s)) => s,
        Some(Text::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

// =============================================================================
// TYPED SETTINGS RECORD
// =============================================================================

/// Inclusive protocol version range of a validated settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsVersionRange {
    /// Oldest negotiable version.
    pub minimum_version: ProtocolVersion,
    /// Newest negotiable version.
    pub maximum_version: ProtocolVersion,
}

impl TlsVersionRange {
    /// Construct a range without checking its ordering.
    #[must_use]
    pub fn new(minimum_version: ProtocolVersion, maximum_version: ProtocolVersion) -> Self {
        Self { minimum_version, maximum_version }
    }

    /// Whether `version` lies inside the range.
    #[must_use]
    pub fn contains(&self, version: ProtocolVersion) -> bool {
        self.minimum_version <= version && version <= self.maximum_version
    }

    /// Every supported version inside the range, oldest first.
    pub fn versions(&self) -> impl Iterator<Item = ProtocolVersion> + '_ {
        ProtocolVersion::ALL.into_iter().filter(move |v| self.contains(*v))
    }
}

/// A fully resolved, internally consistent set of connection settings.
///
/// This is what a TLS-terminating listener consumes. Instances returned by the
/// resolver or validator always satisfy: ciphers non-empty and
/// `minimum_version <= maximum_version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSpec {
    /// Cipher entries in preference order, negations included.
    pub ciphers: Vec<String>,
    /// Negotiable protocol versions.
    pub tls_version: TlsVersionRange,
    /// Diffie-Hellman parameter size ceiling.
    pub dh_param_size: DhParamSize,
}

impl SettingsSpec {
    /// Oldest negotiable version.
    #[must_use]
    pub fn minimum_version(&self) -> ProtocolVersion {
        self.tls_version.minimum_version
    }

    /// Newest negotiable version.
    #[must_use]
    pub fn maximum_version(&self) -> ProtocolVersion {
        self.tls_version.maximum_version
    }

    /// Cipher entries to offer, in preference order.
    pub fn preferred_ciphers(&self) -> impl Iterator<Item = &str> + '_ {
        self.ciphers.iter().map(String::as_str).filter(|c| !c.starts_with(CIPHER_DISABLE_PREFIX))
    }

    /// Ciphers excluded by a `!` entry, with the marker stripped.
    pub fn excluded_ciphers(&self) -> impl Iterator<Item = &str> + '_ {
        self.ciphers.iter().filter_map(|c| c.strip_prefix(CIPHER_DISABLE_PREFIX))
    }

    /// Wire form of this record.
    #[must_use]
    pub fn to_profile_spec(&self) -> TlsProfileSpec {
        TlsProfileSpec::from(self)
    }
}

impl From<&SettingsSpec> for TlsProfileSpec {
    fn from(settings: &SettingsSpec) -> Self {
        Self {
            ciphers: settings.ciphers.clone(),
            tls_version: TlsVersion::new(settings.minimum_version(), settings.maximum_version()),
            dh_param_size: settings.dh_param_size.to_string(),
        }
    }
}

impl From<SettingsSpec> for TlsProfileSpec {
    fn from(settings: SettingsSpec) -> Self {
        Self::from(&settings)
    }
}
