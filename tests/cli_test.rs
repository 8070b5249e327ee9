use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_uuid-replacer"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_missing_argument_prints_usage() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = binary().current_dir(temp_dir.path()).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_missing_file_exits_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("ghost.json");

    let output = binary().arg(&input).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not find file"));
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_invalid_json_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("bad.json");
    std::fs::write(&input, "{ not json")?;

    let output = binary().arg(&input).output()?;

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("bad-replaced.json").exists());
    Ok(())
}

#[test]
fn test_replaces_and_reports_mapping() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.json");
    std::fs::write(
        &input,
        r#"{"id": "550E8400-E29B-41D4-A716-446655440000", "nested": ["550e8400-e29b-41d4-a716-446655440000"]}"#,
    )?;

    let output = binary().arg(&input).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("550E8400-E29B-41D4-A716-446655440000 -> "));

    let written = std::fs::read_to_string(temp_dir.path().join("input-replaced.json"))?;
    assert!(!written
        .to_lowercase()
        .contains("550e8400-e29b-41d4-a716-446655440000"));
    Ok(())
}

#[test]
fn test_json_report_on_dry_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.json");
    std::fs::write(&input, r#"["123e4567-e89b-12d3-a456-426614174000"]"#)?;

    let output = binary().arg("--dry-run").arg("--json").arg(&input).output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["written"], serde_json::json!(false));
    assert_eq!(report["occurrences"], serde_json::json!(1));
    assert_eq!(
        report["replacements"][0]["original"],
        serde_json::json!("123e4567-e89b-12d3-a456-426614174000")
    );
    assert!(!temp_dir.path().join("input-replaced.json").exists());
    Ok(())
}
