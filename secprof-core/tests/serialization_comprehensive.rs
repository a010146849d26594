//! Comprehensive serialization tests for secprof-core
//!
//! Tests the wire shape of settings records: TlsProfileSpec, SettingsSpec,
//! and their lenient decoding.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, missing_docs)]

use secprof_core::{
    DhParamSize, ErrorCode, ProtocolVersion, SettingsSpec, TlsProfileSpec, TlsVersionRange,
    from_json, to_json, to_json_pretty,
};

fn sample_settings() -> SettingsSpec {
    SettingsSpec {
        ciphers: vec!["ECDHE-RSA-AES128-GCM-SHA256".into(), "!aNULL".into()],
        tls_version: TlsVersionRange::new(ProtocolVersion::Tls12, ProtocolVersion::Tls13),
        dh_param_size: DhParamSize::Dh2048,
    }
}

#[test]
fn test_settings_json_field_names() {
    let value: serde_json::Value =
        serde_json::from_str(&to_json(&sample_settings()).unwrap()).unwrap();
    assert_eq!(value["ciphers"][1], "!aNULL");
    assert_eq!(value["tlsVersion"]["minimumVersion"], "TLSv1.2");
    assert_eq!(value["tlsVersion"]["maximumVersion"], "TLSv1.3");
    assert_eq!(value["dhParamSize"], "2048");
}

#[test]
fn test_settings_decode_from_wire_form() {
    let settings = sample_settings();
    let wire = to_json(&settings.to_profile_spec()).unwrap();
    assert_eq!(from_json::<SettingsSpec>(&wire).unwrap(), settings);
}

#[test]
fn test_pretty_output_decodes_identically() {
    let settings = sample_settings();
    let pretty = to_json_pretty(&settings).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(from_json::<SettingsSpec>(&pretty).unwrap(), settings);
}

#[test]
fn test_typed_decode_rejects_unsupported_values() {
    let bad_version = concat!(
        r#"{"ciphers":["HIGH"],"#,
        r#""tlsVersion":{"minimumVersion":"SSLv3.0","maximumVersion":"TLSv1.2"},"#,
        r#""dhParamSize":"2048"}"#,
    );
    let err = from_json::<SettingsSpec>(bad_version).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Serialization);

    let bad_dh = concat!(
        r#"{"ciphers":["HIGH"],"#,
        r#""tlsVersion":{"minimumVersion":"TLSv1.2","maximumVersion":"TLSv1.2"},"#,
        r#""dhParamSize":"4096"}"#,
    );
    let err = from_json::<SettingsSpec>(bad_dh).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Serialization);
}

#[test]
fn test_wire_decode_keeps_unsupported_values() {
    let json =
        r#"{"ciphers":["HIGH"],"tlsVersion":{"minimumVersion":"SSLv3.0"},"dhParamSize":"4096"}"#;
    let spec: TlsProfileSpec = from_json(json).unwrap();
    assert_eq!(spec.tls_version.minimum_version, "SSLv3.0");
    assert_eq!(spec.tls_version.maximum_version, "");
    assert_eq!(spec.dh_param_size, "4096");
}

#[test]
fn test_empty_object_is_unset_spec() {
    assert_eq!(from_json::<TlsProfileSpec>("{}").unwrap(), TlsProfileSpec::default());
}
