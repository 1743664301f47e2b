use std::process::Command;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "--quiet", "--"]);
    cmd
}

#[test]
fn test_cli_no_subcommand_shows_help() {
    let output = cargo_bin().output().unwrap();
    // clap exits with error when no subcommand is provided
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage") || stderr.contains("slugline"),
        "Expected usage info, got: {stderr}"
    );
}

#[test]
fn test_cli_check_validates_screenplay() {
    let output = cargo_bin()
        .args(["check", "demos/episode.md"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is valid"));
    assert!(stdout.contains("3 scenes"));
    assert!(stdout.contains("2 acts"));
    assert!(stdout.contains("scene_1"));
}

#[test]
fn test_cli_check_missing_file_errors() {
    let output = cargo_bin()
        .args(["check", "nonexistent.md"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_check_rejects_input_without_scenes() {
    let path = std::env::temp_dir().join("slugline_no_scenes.md");
    std::fs::write(&path, "Just prose, no headings.\n").unwrap();

    let output = cargo_bin()
        .args(["check", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no usable screenplay"),
        "Expected rejection message, got: {stderr}"
    );
}

#[test]
fn test_cli_dump_emits_json() {
    let output = cargo_bin()
        .args(["dump", "demos/episode.md"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"scene_id\":\"scene_1\""));
    assert!(stdout.contains("\"INT/EXT\""));
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["scenes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_dump_pretty() {
    let output = cargo_bin()
        .args(["dump", "--pretty", "demos/episode.md"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"scene_number\": 1"));
}
