use complexflag::{unmarshal, ErrorKind};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    format!("@{}", path.display())
}

#[test]
fn struct_from_json_file() -> anyhow::Result<()> {
    let value = unmarshal(&fixture("struct.json"))?;
    let map = value.as_object().expect("object");
    assert_eq!(map["name"], "John");
    assert_eq!(map["surname"], "Doe");
    assert_eq!(map["age"].as_f64(), Some(23.0));
    Ok(())
}

#[test]
fn array_from_json_file() -> anyhow::Result<()> {
    let value = unmarshal(&fixture("array.json"))?;
    assert_eq!(value.into_value(), json!(["one", "two", "three"]));
    Ok(())
}

#[test]
fn struct_from_yaml_file() -> anyhow::Result<()> {
    let value = unmarshal(&fixture("struct.yaml"))?;
    let map = value.as_object().expect("object");
    assert_eq!(map["name"], "John");
    assert_eq!(map["age"].as_i64(), Some(23));
    Ok(())
}

#[test]
fn array_from_yaml_file() -> anyhow::Result<()> {
    let value = unmarshal(&fixture("array.yaml"))?;
    assert_eq!(value.into_value(), json!(["one", "two", "three"]));
    Ok(())
}

#[test]
fn yml_extension_is_case_insensitive() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("LIST.YML");
    fs::write(&path, "- a\n- b\n")?;
    let value = unmarshal(&format!("@{}", path.display()))?;
    assert_eq!(value.into_value(), json!(["a", "b"]));
    Ok(())
}

#[test]
fn missing_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.json");
    let err = unmarshal(&format!("@{}", path.display())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(err.to_string().contains("does not exist"));
    Ok(())
}

#[test]
fn directory_reference() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let sub = dir.path().join("adir");
    fs::create_dir(&sub)?;
    let err = unmarshal(&format!("@{}", sub.display())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IsADirectory);
    assert!(err.to_string().contains("is a directory"));
    Ok(())
}

#[test]
fn unsupported_extension() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("data.toml");
    fs::write(&path, "a = 1")?;
    let err = unmarshal(&format!("@{}", path.display())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFileExtension);
    assert_eq!(err.to_string(), "unsupported data format in file: .toml");
    Ok(())
}

#[test]
fn malformed_file_content() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"a": }"#)?;
    let err = unmarshal(&format!("@{}", path.display())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    Ok(())
}

#[test]
fn bare_dot_json_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join(".json");
    fs::write(&path, r#"["x"]"#)?;
    let value = unmarshal(&format!("@{}", path.display()))?;
    assert_eq!(value.into_value(), json!(["x"]));
    Ok(())
}

#[test]
fn yaml_file_with_merge_keys_and_second_document() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("values.yaml");
    fs::write(
        &path,
        "defaults: &d\n  retries: 3\nservice:\n  <<: *d\n  name: api\n---\nignored: true\n",
    )?;
    let value = unmarshal(&format!("@{}", path.display()))?;
    assert_eq!(
        value.into_value(),
        json!({"defaults": {"retries": 3}, "service": {"retries": 3, "name": "api"}})
    );
    Ok(())
}
