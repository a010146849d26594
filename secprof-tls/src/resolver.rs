#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Profile Resolver
//!
//! Turns a selection into a validated [`SettingsSpec`]:
//!
//! - Named profiles come verbatim from the registry table.
//! - Custom payloads are taken as-is, with one exception: when exactly one
//!   version bound is set, the other bound copies it. Nothing else is
//!   defaulted or merged.
//!
//! Anything the caller did not select is handled by the configured
//! [`ResolverConfig::fallback_profile`], or rejected when there is none.
//!
//! ## Quick Start
//!
//! ```rust
//! use secprof_core::{NamedProfile, ProtocolVersion, ResolverConfig};
//! use secprof_tls::{ProfileResolver, TlsSecurityProfile};
//!
//! let resolver = ProfileResolver::new(ResolverConfig::new());
//! let settings = resolver.resolve_document(&TlsSecurityProfile::named(NamedProfile::Modern))?;
//! assert_eq!(settings.minimum_version(), ProtocolVersion::Tls12);
//! # Ok::<(), secprof_core::ProfileError>(())
//! ```

use tracing::{debug, instrument, warn};

use secprof_core::{
    NamedProfile, ProfileError, ResolverConfig, Result, SettingsSpec, TlsProfileSpec, TlsVersion,
    summarize_ciphers,
};

use crate::registry::ProfileRegistry;
use crate::schema::{ProfileSchema, ProfileSelection, SecurityProfileDocument};
use crate::validator::{validate, validate_settings};

/// Resolves profile selections under a fixed policy.
///
/// Holds no mutable state: the same input always yields the same output, and
/// one resolver may be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct ProfileResolver {
    config: ResolverConfig,
}

impl ProfileResolver {
    /// Create a resolver with the given policy.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The policy in effect.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a selection document of either schema.
    ///
    /// # Errors
    ///
    /// - `UnknownProfile` or `AmbiguousSelection` from the boundary check
    /// - `NoProfileSelected` if the document selects nothing and no fallback
    ///   profile is configured
    /// - any error of [`ProfileResolver::resolve`]
    #[instrument(
        level = "debug",
        skip(self, document),
        fields(kind = S::KIND, profile_type = %document.profile_type)
    )]
    pub fn resolve_document<S: ProfileSchema>(
        &self,
        document: &SecurityProfileDocument<S>,
    ) -> Result<SettingsSpec> {
        let selection = match document.selection() {
            Ok(Some(selection)) => selection,
            Ok(None) => match self.config.fallback_profile {
                Some(profile) => {
                    debug!(fallback = %profile, "No profile selected, applying fallback profile");
                    ProfileSelection::Named(profile)
                }
                None => return Err(rejected(ProfileError::NoProfileSelected { kind: S::KIND })),
            },
            Err(err) => return Err(rejected(err)),
        };

        self.resolve(&selection)
    }

    /// Resolve an unambiguous selection.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for a malformed Custom payload:
    /// `EmptyCipherList`, `UnsupportedVersion`, `InvertedVersionRange` or
    /// `UnsupportedDhSize`.
    pub fn resolve(&self, selection: &ProfileSelection) -> Result<SettingsSpec> {
        let result = match selection {
            ProfileSelection::Named(profile) => Self::resolve_named(*profile),
            ProfileSelection::Custom(spec) => self.resolve_custom(spec),
        };

        match result {
            Ok(settings) => {
                debug!(
                    profile = %selection.profile_type(),
                    ciphers = %summarize_ciphers(&settings.ciphers),
                    minimum_version = %settings.minimum_version(),
                    maximum_version = %settings.maximum_version(),
                    dh_param_size = %settings.dh_param_size,
                    "Resolved TLS security profile"
                );
                Ok(settings)
            }
            Err(err) => Err(rejected(err)),
        }
    }

    fn resolve_named(profile: NamedProfile) -> Result<SettingsSpec> {
        let settings = ProfileRegistry::entry(profile).settings();
        validate_settings(&settings)?;
        Ok(settings)
    }

    fn resolve_custom(&self, spec: &TlsProfileSpec) -> Result<SettingsSpec> {
        if self.config.warn_on_custom {
            warn!("Custom TLS profile in use: invalid configurations can be catastrophic");
        }

        let candidate = TlsProfileSpec {
            tls_version: default_versions(&spec.tls_version, self.config.fallback_profile),
            ..spec.clone()
        };
        validate(&candidate)
    }
}

/// Fill in unset version bounds of a Custom payload.
///
/// - only `maximumVersion` set: `minimumVersion` copies it
/// - only `minimumVersion` set: `maximumVersion` copies it
/// - neither set: the fallback profile's range, or left unset without one
/// - both set: unchanged, including invalid values
#[must_use]
pub fn default_versions(version: &TlsVersion, fallback: Option<NamedProfile>) -> TlsVersion {
    match (version.minimum_version.is_empty(), version.maximum_version.is_empty()) {
        (true, false) => TlsVersion {
            minimum_version: version.maximum_version.clone(),
            maximum_version: version.maximum_version.clone(),
        },
        (false, true) => TlsVersion {
            minimum_version: version.minimum_version.clone(),
            maximum_version: version.minimum_version.clone(),
        },
        (true, true) => match fallback {
            Some(profile) => {
                let entry = ProfileRegistry::entry(profile);
                TlsVersion::new(entry.min_version, entry.max_version)
            }
            None => version.clone(),
        },
        (false, false) => version.clone(),
    }
}

fn rejected(err: ProfileError) -> ProfileError {
    warn!(code = %err.code(), "Rejected TLS security profile: {}", err);
    err
}
