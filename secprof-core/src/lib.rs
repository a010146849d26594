//! # secprof Core
//!
//! Shared vocabulary for resolving named TLS security profiles into concrete
//! connection settings.
//!
//! ## Key Types
//!
//! - [`ProfileType`] / [`NamedProfile`]: the closed set Old, Intermediate,
//!   Modern and Custom
//! - [`ProtocolVersion`]: ordered TLSv1.0 < TLSv1.1 < TLSv1.2 < TLSv1.3
//! - [`DhParamSize`]: 1024 or 2048 bits
//! - [`TlsProfileSpec`]: settings as they appear on the wire (Custom payloads,
//!   mirrored status)
//! - [`SettingsSpec`]: typed, validated settings ready for a TLS listener
//! - [`ProfileError`]: every way a selection can be rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use secprof_core::{DhParamSize, ProtocolVersion, TlsProfileSpec};
//!
//! let custom = TlsProfileSpec::new(["ECDHE-RSA-AES128-GCM-SHA256", "!aNULL"])
//!     .with_versions(ProtocolVersion::Tls12, ProtocolVersion::Tls13)
//!     .with_dh_param_size(DhParamSize::Dh2048);
//! assert_eq!(custom.tls_version.minimum_version, "TLSv1.2");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Resolver policy configuration.
pub mod config;
/// Error types and result aliases.
pub mod error;
/// Tracing initialization and log formatting helpers.
pub mod logging;
/// JSON encoding helpers.
pub mod serialization;
/// Profile vocabulary types.
pub mod types;

pub use config::ResolverConfig;
pub use error::{ErrorCode, ProfileError, RecoveryHint, Result};
pub use logging::{init_tracing, summarize_ciphers};
pub use serialization::{from_json, to_json, to_json_pretty};
pub use types::{
    CIPHER_DISABLE_PREFIX, DhParamSize, NamedProfile, ProfileType, ProtocolVersion, SettingsSpec,
    TlsProfileSpec, TlsVersion, TlsVersionRange,
};

/// Library version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
