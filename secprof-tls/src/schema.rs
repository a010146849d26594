#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Selection documents and the selection sum type.
//!
//! On the wire a profile selection is a discriminator (`type`) next to four
//! optional, mutually exclusive payload fields:
//!
//! ```json
//! {
//!   "type": "Custom",
//!   "custom": { "ciphers": ["AES128-SHA"], "tlsVersion": {...}, "dhParamSize": "1024" }
//! }
//! ```
//!
//! [`SecurityProfileDocument::selection`] checks that shape once, at the
//! boundary, and produces a [`ProfileSelection`] that cannot be ambiguous.
//! The same document layout serves two schemas, [`TlsSecurityProfile`] and
//! [`ConnectionSecurityProfile`]. Their wire field names are identical; the
//! schema only changes how errors and log lines name the document.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use secprof_core::serialization::null_as_default;
use secprof_core::{NamedProfile, ProfileError, ProfileType, Result, TlsProfileSpec};

// =============================================================================
// SCHEMA NAMING
// =============================================================================

/// Naming of a selection schema.
///
/// The name is diagnostic only: it appears in error messages and log fields.
/// Decoding and resolution are identical for every schema.
pub trait ProfileSchema {
    /// Name used in error messages and log fields.
    const KIND: &'static str;
}

/// The general TLS security profile schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlsSchema;

impl ProfileSchema for TlsSchema {
    const KIND: &'static str = "tlsSecurityProfile";
}

/// The connection profile schema used by a specific subsystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionSchema;

impl ProfileSchema for ConnectionSchema {
    const KIND: &'static str = "connectionSecurityProfile";
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Marker payload selecting the Old profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldProfile {}

/// Marker payload selecting the Intermediate profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediateProfile {}

/// Marker payload selecting the Modern profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModernProfile {}

/// User-defined settings, inlined into the `custom` field.
///
/// Be extremely careful with custom profiles: invalid configurations can be
/// catastrophic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomProfile {
    /// The caller-supplied settings.
    pub spec: TlsProfileSpec,
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A profile selection as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct SecurityProfileDocument<S: ProfileSchema> {
    /// `Old`, `Intermediate`, `Modern`, `Custom`, or empty.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub profile_type: String,
    /// Old profile marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<OldProfile>,
    /// Intermediate profile marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<IntermediateProfile>,
    /// Modern profile marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modern: Option<ModernProfile>,
    /// Custom settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomProfile>,
    #[serde(skip)]
    schema: PhantomData<S>,
}

/// Selection document of the general TLS security profile schema.
pub type TlsSecurityProfile = SecurityProfileDocument<TlsSchema>;

/// Selection document of the connection profile schema.
pub type ConnectionSecurityProfile = SecurityProfileDocument<ConnectionSchema>;

impl<S: ProfileSchema> Default for SecurityProfileDocument<S> {
    fn default() -> Self {
        Self {
            profile_type: String::new(),
            old: None,
            intermediate: None,
            modern: None,
            custom: None,
            schema: PhantomData,
        }
    }
}

impl<S: ProfileSchema> SecurityProfileDocument<S> {
    /// A document with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical document for a named profile: discriminator plus marker.
    #[must_use]
    pub fn named(profile: NamedProfile) -> Self {
        Self::from(ProfileSelection::Named(profile))
    }

    /// Canonical document for custom settings.
    #[must_use]
    pub fn custom(spec: TlsProfileSpec) -> Self {
        Self::from(ProfileSelection::Custom(spec))
    }

    /// Set the raw discriminator.
    #[must_use]
    pub fn with_type(mut self, profile_type: impl Into<String>) -> Self {
        self.profile_type = profile_type.into();
        self
    }

    /// Populate the Old marker.
    #[must_use]
    pub fn with_old(mut self) -> Self {
        self.old = Some(OldProfile {});
        self
    }

    /// Populate the Intermediate marker.
    #[must_use]
    pub fn with_intermediate(mut self) -> Self {
        self.intermediate = Some(IntermediateProfile {});
        self
    }

    /// Populate the Modern marker.
    #[must_use]
    pub fn with_modern(mut self) -> Self {
        self.modern = Some(ModernProfile {});
        self
    }

    /// Populate the Custom payload.
    #[must_use]
    pub fn with_custom(mut self, spec: TlsProfileSpec) -> Self {
        self.custom = Some(CustomProfile { spec });
        self
    }

    /// Schema name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        S::KIND
    }

    /// Profile types whose payload field is populated.
    #[must_use]
    pub fn populated(&self) -> Vec<ProfileType> {
        [
            (self.old.is_some(), ProfileType::Old),
            (self.intermediate.is_some(), ProfileType::Intermediate),
            (self.modern.is_some(), ProfileType::Modern),
            (self.custom.is_some(), ProfileType::Custom),
        ]
        .into_iter()
        .filter_map(|(present, profile_type)| present.then_some(profile_type))
        .collect()
    }

    /// Turn the document into an unambiguous selection.
    ///
    /// Returns `Ok(None)` when neither a discriminator nor a payload is set;
    /// what that means is a policy decision for the caller.
    ///
    /// # Errors
    ///
    /// - `UnknownProfile` if `type` is non-empty and not one of the four names
    /// - `AmbiguousSelection` if more than one payload is populated, if `type`
    ///   contradicts the populated payload, or if `type` is `Custom` without
    ///   a `custom` payload
    pub fn selection(&self) -> Result<Option<ProfileSelection>> {
        let declared = if self.profile_type.is_empty() {
            None
        } else {
            Some(self.profile_type.parse::<ProfileType>()?)
        };

        let populated = self.populated();
        if populated.len() > 1 {
            let fields: Vec<&str> = populated.iter().map(|t| payload_field(*t)).collect();
            return Err(ProfileError::AmbiguousSelection {
                kind: S::KIND,
                reason: format!("multiple profiles populated: {}", fields.join(", ")),
            });
        }

        let effective = match (declared, populated.first().copied()) {
            (None, None) => return Ok(None),
            (Some(declared), Some(payload)) if declared != payload => {
                return Err(ProfileError::AmbiguousSelection {
                    kind: S::KIND,
                    reason: format!(
                        "type is {} but the {} payload is populated",
                        declared,
                        payload_field(payload)
                    ),
                });
            }
            (Some(profile_type), _) | (None, Some(profile_type)) => profile_type,
        };

        match (effective.named(), &self.custom) {
            (Some(named), _) => Ok(Some(ProfileSelection::Named(named))),
            (None, Some(custom)) => Ok(Some(ProfileSelection::Custom(custom.spec.clone()))),
            (None, None) => Err(ProfileError::AmbiguousSelection {
                kind: S::KIND,
                reason: "type is Custom but the custom payload is missing".to_string(),
            }),
        }
    }
}

fn payload_field(profile_type: ProfileType) -> &'static str {
    match profile_type {
        ProfileType::Old => "old",
        ProfileType::Intermediate => "intermediate",
        ProfileType::Modern => "modern",
        ProfileType::Custom => "custom",
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// An unambiguous profile selection: exactly one payload per tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSelection {
    /// A profile from the registry.
    Named(NamedProfile),
    /// Caller-supplied settings.
    Custom(TlsProfileSpec),
}

impl ProfileSelection {
    /// Discriminator of this selection.
    #[must_use]
    pub fn profile_type(&self) -> ProfileType {
        match self {
            Self::Named(profile) => profile.profile_type(),
            Self::Custom(_) => ProfileType::Custom,
        }
    }
}

impl From<NamedProfile> for ProfileSelection {
    fn from(profile: NamedProfile) -> Self {
        Self::Named(profile)
    }
}

impl From<TlsProfileSpec> for ProfileSelection {
    fn from(spec: TlsProfileSpec) -> Self {
        Self::Custom(spec)
    }
}

impl<S: ProfileSchema> From<ProfileSelection> for SecurityProfileDocument<S> {
    fn from(selection: ProfileSelection) -> Self {
        let document = Self::new().with_type(selection.profile_type().as_str());
        match selection {
            ProfileSelection::Named(NamedProfile::Old) => document.with_old(),
            ProfileSelection::Named(NamedProfile::Intermediate) => document.with_intermediate(),
            ProfileSelection::Named(NamedProfile::Modern) => document.with_modern(),
            ProfileSelection::Custom(spec) => document.with_custom(spec),
        }
    }
}
