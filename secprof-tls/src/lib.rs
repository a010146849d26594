#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # secprof TLS
//!
//! Resolution of named TLS security profiles into concrete connection
//! settings.
//!
//! ## Features
//!
//! - **Profile Registry**: the fixed Old / Intermediate / Modern table,
//!   reproduced exactly from Mozilla's Server Side TLS recommendations
//! - **Boundary check**: selection documents become an unambiguous
//!   [`ProfileSelection`] before anything is resolved
//! - **Resolver**: registry rows verbatim, Custom payloads as-is with single
//!   bound version defaulting
//! - **Validator**: usable on its own, e.g. for mirrored status objects
//! - **rustls handoff**: resolved version ranges as rustls protocol versions
//!
//! ## Quick Start
//!
//! ```rust
//! use secprof_core::{ResolverConfig, from_json};
//! use secprof_tls::{ProfileResolver, TlsSecurityProfile};
//!
//! let doc: TlsSecurityProfile = from_json(r#"{"type": "Intermediate"}"#)?;
//! let settings = ProfileResolver::new(ResolverConfig::new()).resolve_document(&doc)?;
//! assert_eq!(settings.ciphers.last().map(String::as_str), Some("!DSS"));
//! # Ok::<(), secprof_core::ProfileError>(())
//! ```
//!
//! ## Profiles
//!
//! ### Old
//! Broadest client compatibility: TLSv1.0 to TLSv1.2, 1024-bit DH.
//!
//! ### Intermediate
//! General purpose servers: TLSv1.0 to TLSv1.2, 2048-bit DH.
//!
//! ### Modern
//! AEAD and forward-secret ciphers only, TLSv1.2, 2048-bit DH.
//!
//! ### Custom
//! Caller-supplied settings. Validated with the same invariants as the named
//! profiles.
//!
//! ## Concurrency
//!
//! All operations are synchronous and pure. The registry is immutable, so a
//! single [`ProfileResolver`] can serve any number of threads.

/// rustls handoff for resolved settings.
pub mod handoff;
/// Fixed table of named profiles.
pub mod registry;
/// Profile resolution.
pub mod resolver;
/// Selection documents and the selection sum type.
pub mod schema;
/// Structural checks over settings records.
pub mod validator;

pub use handoff::{ListenerSettings, rustls_protocol_versions, rustls_version};
pub use registry::{
    INTERMEDIATE_CIPHERS, INTERMEDIATE_PROFILE, MODERN_CIPHERS, MODERN_PROFILE, OLD_CIPHERS,
    OLD_PROFILE, ProfileRegistry, ProfileRegistryEntry,
};
pub use resolver::{ProfileResolver, default_versions};
pub use schema::{
    ConnectionSchema, ConnectionSecurityProfile, CustomProfile, IntermediateProfile, ModernProfile,
    OldProfile, ProfileSchema, ProfileSelection, SecurityProfileDocument, TlsSchema,
    TlsSecurityProfile,
};
pub use validator::{is_valid, validate, validate_settings};
