use std::fs;
use tempfile::tempdir;

use synccode_cli::{
    commands::{devices, make},
    OutputFormat,
};
use synccode_core::{DeviceEntry, ErrorKind, SyncCodeError, SyncCodeValidator};

fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<SyncCodeError>().map(SyncCodeError::kind)
}

#[test]
fn make_from_flags() {
    let v = SyncCodeValidator::default();
    let code = make::execute(
        &v,
        Some("a".into()),
        Some("btu".into()),
        Some("1234".into()),
        None,
    )
    .unwrap();
    assert_eq!(code, "ABTU-1234");
}

#[test]
fn make_from_flags_missing_part() {
    let v = SyncCodeValidator::default();
    let err = make::execute(&v, Some("A".into()), None, Some("1234".into()), None).unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::MissingParts));
}

#[test]
fn make_from_json_numeric_identifier() {
    let v = SyncCodeValidator::default();
    let code = make::make_from_json(&v, r#"{"series":"A","device":"BTU","identifier":1234}"#)
        .unwrap();
    assert_eq!(code, "ABTU-1234");
}

#[test]
fn make_from_json_short_number_fails_identifier() {
    let v = SyncCodeValidator::default();
    let err =
        make::make_from_json(&v, r#"{"series":"Z","device":"BTU","identifier":34}"#).unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::Identifier));
}

#[test]
fn make_from_json_rejects_non_records() {
    let v = SyncCodeValidator::default();
    for json in ["null", "[1, 2, 3]", "\"ABTU-1234\"", "42"] {
        let err = make::make_from_json(&v, json).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::MissingParts), "{}", json);
    }
}

#[test]
fn make_from_json_rejects_blank_fields() {
    let v = SyncCodeValidator::default();
    for json in [
        r#"{}"#,
        r#"{"series":"A","device":"BTU"}"#,
        r#"{"series":"","device":"BTU","identifier":"1234"}"#,
        r#"{"series":"A","device":null,"identifier":"1234"}"#,
        r#"{"series":"A","device":"BTU","identifier":0}"#,
        r#"{"series":"A","device":"BTU","identifier":false}"#,
        r#"{"series":"A","device":"BTU","identifier":0.0}"#,
        r#"{"series":0,"device":"BTU","identifier":"1234"}"#,
        r#"{"series":"A","device":false,"identifier":"1234"}"#,
    ] {
        let err = make::make_from_json(&v, json).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::MissingParts), "{}", json);
    }
}

#[test]
fn make_from_json_scalars_reach_validation() {
    let v = SyncCodeValidator::default();
    for (json, kind) in [
        (r#"{"series":"A","device":"BTU","identifier":12.5}"#, ErrorKind::Identifier),
        (r#"{"series":"A","device":"BTU","identifier":-5}"#, ErrorKind::Structure),
        (r#"{"series":"A","device":"BTU","identifier":true}"#, ErrorKind::Identifier),
        (r#"{"series":1,"device":"BTU","identifier":"1234"}"#, ErrorKind::Series),
        (r#"{"series":"A","device":["BTU"],"identifier":"1234"}"#, ErrorKind::DeviceFormat),
    ] {
        let err = make::make_from_json(&v, json).unwrap_err();
        assert_eq!(error_kind(&err), Some(kind), "{}", json);
    }
}

#[test]
fn make_from_json_whole_float_renders_as_integer() {
    let v = SyncCodeValidator::default();
    let code =
        make::make_from_json(&v, r#"{"series":"A","device":"BTU","identifier":1234.0}"#).unwrap();
    assert_eq!(code, "ABTU-1234");
}

#[test]
fn make_from_json_file() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("parts.json");
    fs::write(&in_path, r#"{"series":"q","device":"sun","identifier":"0042"}"#).unwrap();

    let v = SyncCodeValidator::default();
    let code = make::execute(&v, None, None, None, Some(in_path.to_str().unwrap())).unwrap();
    assert_eq!(code, "QSUN-0042");
}

#[test]
fn make_from_malformed_json_is_an_error() {
    let v = SyncCodeValidator::default();
    let err = make::make_from_json(&v, "{not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse sync code parts"));
    assert_eq!(error_kind(&err), None);
}

#[test]
fn devices_json_lists_registry_in_order() {
    let v = SyncCodeValidator::default();
    let json = devices::render(&v, OutputFormat::Json).unwrap();
    let entries: Vec<DeviceEntry> = serde_json::from_str(&json).unwrap();

    assert_eq!(entries.len(), 14);
    assert_eq!(entries[0].token, "BTU");
    assert_eq!(entries[10].model.as_deref(), Some("SESF-3221"));
}

#[test]
fn devices_text_mentions_every_token() {
    let v = SyncCodeValidator::default();
    let text = devices::render(&v, OutputFormat::Text).unwrap();

    for token in v.allowed_devices() {
        assert!(text.contains(token), "missing {}", token);
    }
    assert!(text.contains("Snow-melt Controller"));
    assert!(text.ends_with("14 device types"));
}
