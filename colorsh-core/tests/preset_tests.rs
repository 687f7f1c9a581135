// colorsh-core/tests/preset_tests.rs
//! Integration tests for preset file loading and resolution.

use std::fs;

use colorsh_core::{load_preset_file, resolve_preset, ColorshError};
use tempfile::tempdir;

const PRESETS: &str = r#"
default:
  patterns:
    green: "OK"
  bold: true
  erase: "\\s+$"

logs:
  patterns:
    red: "ERROR|FATAL"
    yellow: "WARN"
  erase: "\\d+"
  grep: true

quiet_logs:
  patterns:
    red: "ERROR"
  bold: false
"#;

#[test]
fn selected_section_falls_back_to_default() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("presets.yaml");
    fs::write(&path, PRESETS)?;

    let presets = load_preset_file(&path)?;
    let resolved = resolve_preset(&presets, "logs", "presets.yaml")?;

    // Own values win; unset keys come from the default section.
    assert_eq!(resolved.patterns["red"], "ERROR|FATAL");
    assert_eq!(resolved.patterns["yellow"], "WARN");
    assert_eq!(resolved.patterns["green"], "OK");
    assert_eq!(resolved.erase.as_deref(), Some(r"\d+"));
    assert_eq!(resolved.bold, Some(true));
    assert_eq!(resolved.grep, Some(true));
    assert_eq!(resolved.and, None);
    Ok(())
}

#[test]
fn explicit_false_is_not_overridden_by_default() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("presets.yaml");
    fs::write(&path, PRESETS)?;

    let presets = load_preset_file(&path)?;
    let resolved = resolve_preset(&presets, "quiet_logs", "presets.yaml")?;
    assert_eq!(resolved.bold, Some(false));
    Ok(())
}

#[test]
fn unknown_preset_name_is_an_error() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("presets.yaml");
    fs::write(&path, PRESETS)?;

    let presets = load_preset_file(&path)?;
    assert!(matches!(
        resolve_preset(&presets, "nope", "presets.yaml"),
        Err(ColorshError::PresetNotFound(_, _))
    ));
    Ok(())
}

#[test]
fn unknown_color_key_fails_validation() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("presets.yaml");
    fs::write(
        &path,
        "logs:\n  patterns:\n    chartreuse: \"ERROR\"\n",
    )?;

    assert!(load_preset_file(&path).is_err());
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_preset_file("/definitely/not/here.yaml").is_err());
}
