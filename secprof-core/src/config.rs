//! Resolver configuration.
//!
//! The resolver itself never guesses. Anything that amounts to a defaulting
//! policy (what an empty selection means, what an unset Custom version range
//! means) is supplied here by the invoking component.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::types::NamedProfile;

/// Policy knobs for profile resolution.
///
/// # Examples
/// ```rust
/// use secprof_core::config::ResolverConfig;
/// use secprof_core::types::NamedProfile;
///
/// // Strict: reject empty selections and unset Custom versions
/// let strict = ResolverConfig::new();
/// assert!(strict.fallback_profile.is_none());
///
/// // Follow the schema documentation: treat "nothing selected" as Old
/// let documented = ResolverConfig::documented_defaults();
/// assert_eq!(documented.fallback_profile, Some(NamedProfile::Old));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Profile applied when nothing is selected, and whose version range a
    /// Custom payload inherits when both of its version bounds are unset.
    ///
    /// Default: `None`
    pub fallback_profile: Option<NamedProfile>,

    /// Emit a warning whenever a Custom profile is resolved.
    ///
    /// Default: `true`
    pub warn_on_custom: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { fallback_profile: None, warn_on_custom: true }
    }
}

impl ResolverConfig {
    /// Create a strict configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching the documented schema defaults: an empty
    /// selection behaves as Old, and a Custom payload without versions takes
    /// Old's range (TLSv1.0 to TLSv1.2).
    #[must_use]
    pub fn documented_defaults() -> Self {
        Self::default().with_fallback_profile(NamedProfile::Old)
    }

    /// Set the fallback profile and return self for method chaining.
    #[must_use]
    pub fn with_fallback_profile(mut self, profile: NamedProfile) -> Self {
        self.fallback_profile = Some(profile);
        self
    }

    /// Clear the fallback profile and return self for method chaining.
    #[must_use]
    pub fn without_fallback_profile(mut self) -> Self {
        self.fallback_profile = None;
        self
    }

    /// Enable or disable the Custom profile warning.
    #[must_use]
    pub fn with_custom_warning(mut self, enabled: bool) -> Self {
        self.warn_on_custom = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = ResolverConfig::default();
        assert_eq!(config.fallback_profile, None);
        assert!(config.warn_on_custom);
    }

    #[test]
    fn test_builder_chain() {
        let config = ResolverConfig::new()
            .with_fallback_profile(NamedProfile::Intermediate)
            .with_custom_warning(false);
        assert_eq!(config.fallback_profile, Some(NamedProfile::Intermediate));
        assert!(!config.warn_on_custom);
        assert_eq!(config.without_fallback_profile().fallback_profile, None);
    }
}
