#![deny(unsafe_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

//! End-to-End Integration Tests
//!
//! Validates that the public `secprof` facade resolves selection documents
//! from JSON into listener-ready settings, and rejects malformed ones.
//!
//! Run with: `cargo test --package secprof --test e2e_integration -- --nocapture`

use proptest::prelude::*;
use secprof::{
    ConnectionSecurityProfile, DhParamSize, ErrorCode, ListenerSettings, NamedProfile,
    ProfileError, ProfileRegistry, ProtocolVersion, RecoveryHint, ResolverConfig, TlsProfileSpec,
    TlsSecurityProfile, from_json, resolve_profile, resolve_tls_profile_json,
    resolve_tls_profile_json_with, rustls_protocol_versions, to_json, to_json_pretty, validate,
};

// ============================================================================
// Named profiles
// ============================================================================

#[test]
fn test_intermediate_end_to_end() {
    let settings =
        resolve_tls_profile_json(r#"{"type": "Intermediate"}"#).expect("resolve failed");

    assert_eq!(settings.preferred_ciphers().count(), 30);
    assert_eq!(settings.ciphers.last().map(String::as_str), Some("!DSS"));
    assert_eq!(settings.minimum_version(), ProtocolVersion::Tls10);
    assert_eq!(settings.maximum_version(), ProtocolVersion::Tls12);
    assert_eq!(settings.dh_param_size, DhParamSize::Dh2048);

    let wire: serde_json::Value = serde_json::from_str(&to_json(&settings).unwrap()).unwrap();
    assert_eq!(wire["dhParamSize"], "2048");
    assert_eq!(wire["tlsVersion"]["minimumVersion"], "TLSv1.0");
}

#[test]
fn test_every_named_profile_is_its_registry_row() {
    for profile in NamedProfile::ALL {
        let json = format!(r#"{{"type": "{profile}"}}"#);
        let settings = resolve_tls_profile_json(&json).expect("resolve failed");
        assert_eq!(settings, ProfileRegistry::entry(profile).settings());
    }
}

#[test]
fn test_named_profiles_hand_off_to_rustls() {
    for profile in NamedProfile::ALL {
        let settings = ProfileRegistry::entry(profile).settings();
        let listener = ListenerSettings::from_settings(&settings).expect("handoff failed");
        assert!(!listener.protocol_versions.is_empty());
        assert_eq!(listener.cipher_rules, settings.ciphers);
        assert_eq!(listener.dh_param_bits, settings.dh_param_size.bits());
    }
}

// ============================================================================
// Custom profiles
// ============================================================================

#[test]
fn test_custom_round_trip_verbatim() {
    let payload = concat!(
        r#"{"ciphers":["AES128-SHA"],"#,
        r#""tlsVersion":{"minimumVersion":"TLSv1.1","maximumVersion":"TLSv1.2"},"#,
        r#""dhParamSize":"1024"}"#,
    );
    let settings =
        resolve_tls_profile_json(&format!(r#"{{"custom":{payload}}}"#)).expect("resolve failed");
    assert_eq!(to_json(&settings).unwrap(), payload);
}

#[test]
fn test_custom_tls13_only() {
    let spec = TlsProfileSpec::new(["TLS_AES_128_GCM_SHA256"])
        .with_maximum_version(ProtocolVersion::Tls13)
        .with_dh_param_size(DhParamSize::Dh2048);
    let settings = resolve_profile(&TlsSecurityProfile::custom(spec)).expect("resolve failed");

    assert_eq!(settings.minimum_version(), ProtocolVersion::Tls13);
    let versions = rustls_protocol_versions(&settings).expect("handoff failed");
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].version, rustls::ProtocolVersion::TLSv1_3);
}

#[test]
fn test_custom_legacy_range_resolves_but_cannot_hand_off() {
    let json = concat!(
        r#"{"custom":{"ciphers":["AES128-SHA"],"#,
        r#""tlsVersion":{"minimumVersion":"TLSv1.0","maximumVersion":"TLSv1.1"},"#,
        r#""dhParamSize":"1024"}}"#,
    );
    let settings = resolve_tls_profile_json(json).expect("resolve failed");
    let err = rustls_protocol_versions(&settings).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoNegotiableVersion);
}

#[test]
fn test_custom_empty_ciphers_rejected() {
    let json = concat!(
        r#"{"custom":{"ciphers":[],"#,
        r#""tlsVersion":{"minimumVersion":"TLSv1.1","maximumVersion":"TLSv1.2"},"#,
        r#""dhParamSize":"1024"}}"#,
    );
    let err = resolve_tls_profile_json(json).unwrap_err();
    assert_eq!(err, ProfileError::EmptyCipherList);
    match err.recovery_hint() {
        RecoveryHint::Reconfigure { field, .. } => assert_eq!(field, "ciphers"),
        RecoveryHint::NoRecovery => panic!("expected a reconfiguration hint"),
    }
}

// ============================================================================
// Rejections and policy
// ============================================================================

#[test]
fn test_ambiguous_selection_rejected() {
    let err = resolve_tls_profile_json(r#"{"type": "Modern", "old": {}}"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::AmbiguousSelection);
    assert!(!err.is_recoverable());
}

#[test]
fn test_empty_selection_policy() {
    let strict = resolve_tls_profile_json("{}").unwrap_err();
    assert_eq!(strict.code(), ErrorCode::NoProfileSelected);

    let settings = resolve_tls_profile_json_with("{}", &ResolverConfig::documented_defaults())
        .expect("resolve failed");
    assert_eq!(settings, ProfileRegistry::entry(NamedProfile::Old).settings());
}

#[test]
fn test_connection_profile_document() {
    let doc: ConnectionSecurityProfile = from_json(r#"{"intermediate": {}}"#).unwrap();
    let settings = resolve_profile(&doc).expect("resolve failed");
    assert_eq!(settings.dh_param_size, DhParamSize::Dh2048);
}

// ============================================================================
// Status mirroring
// ============================================================================

#[test]
fn test_status_mirror_validates() {
    let settings = resolve_tls_profile_json(r#"{"type": "Old"}"#).expect("resolve failed");
    let status: TlsProfileSpec = from_json(&to_json_pretty(&settings).unwrap()).unwrap();
    assert_eq!(validate(&status).expect("status invalid"), settings);
}

// ============================================================================
// Resubmission
// ============================================================================

fn any_version() -> impl Strategy<Value = ProtocolVersion> {
    prop::sample::select(ProtocolVersion::ALL.to_vec())
}

fn any_dh_size() -> impl Strategy<Value = DhParamSize> {
    prop::sample::select(DhParamSize::ALL.to_vec())
}

fn any_named() -> impl Strategy<Value = NamedProfile> {
    prop::sample::select(NamedProfile::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Resolved settings submitted back as a Custom payload resolve to themselves
    #[test]
    fn resolved_custom_resubmits_unchanged(
        ciphers in prop::collection::vec("!?[A-Z0-9-]{1,32}", 1..20),
        a in any_version(),
        b in any_version(),
        dh in any_dh_size()
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let spec = TlsProfileSpec::new(ciphers).with_versions(min, max).with_dh_param_size(dh);
        let resolved = resolve_profile(&TlsSecurityProfile::custom(spec)).unwrap();

        let json = format!(r#"{{"custom":{}}}"#, to_json(&resolved).unwrap());
        prop_assert_eq!(resolve_tls_profile_json(&json).unwrap(), resolved);
    }

    /// A named row pinned as a Custom payload resolves to the same row
    #[test]
    fn named_row_resubmits_as_custom(profile in any_named()) {
        let row = ProfileRegistry::entry(profile).settings();
        let json = format!(r#"{{"type":"Custom","custom":{}}}"#, to_json(&row).unwrap());
        prop_assert_eq!(resolve_tls_profile_json(&json).unwrap(), row);
    }
}
