use wallet_import_adapters::{ConfigError, ImportScreenConfig};
use wallet_import_core::{ClipboardEmptiness, PlatformFamily};

#[test]
fn defaults_preserve_single_space_rule() {
    let cfg = ImportScreenConfig::default();
    assert_eq!(cfg.clipboard_emptiness, ClipboardEmptiness::SingleSpace);
    assert!(cfg.image_extensions.iter().any(|e| e == "png"));
    assert!(cfg.capabilities.is_none());
    assert!(cfg.label.is_empty());
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("import.json");
    std::fs::write(
        &path,
        r#"{
            "clipboard_emptiness": "any_whitespace",
            "label": "Vault",
            "capabilities": {
                "family": "BarePath",
                "has_native_accessory": false,
                "has_action_sheet": false
            }
        }"#,
    )
    .expect("write config");

    let cfg = ImportScreenConfig::from_json_file(&path).expect("load");
    assert_eq!(cfg.clipboard_emptiness, ClipboardEmptiness::AnyWhitespace);
    assert_eq!(cfg.label, "Vault");
    assert_eq!(cfg.max_image_bytes, ImportScreenConfig::default().max_image_bytes);

    let caps = cfg.capabilities();
    assert_eq!(caps.family, PlatformFamily::BarePath);
    assert!(!caps.has_native_accessory);
    assert!(!caps.has_action_sheet);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write config");

    let err = ImportScreenConfig::from_json_file(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ImportScreenConfig::from_json_file(&dir.path().join("absent.json"))
        .expect_err("must fail");
    assert!(matches!(err, ConfigError::Io { .. }));
}
