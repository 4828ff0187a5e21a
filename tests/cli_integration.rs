//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_glow", "-", "chat"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("GLOW_CHAT_VARIANT")
        .env_remove("GLOW_CHAT_FRAME_MS")
        .env_remove("GLOW_CHAT_MOUSE");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("glow-chat"));
    assert!(stdout.contains("--variant"));
    assert!(stdout.contains("Enter/Space/a"), "expected key help in output");
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("glow-chat"));
}

#[test]
fn cli_frame_prints_json() {
    // Run from temp dir so dotenv() won't load .env from project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["frame", "--at-ms", "2000", "--active"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("frame output is JSON");
    assert_eq!(json["active"], true);
    assert_eq!(json["color"], "#667EEA");
    assert_eq!(json["variant"], "edge");
    let alpha = json["alpha"].as_f64().expect("alpha is a number");
    assert!((alpha - 0.8).abs() < 1e-3, "alpha was {}", alpha);
}

#[test]
fn cli_frame_without_toggle_is_transparent() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["frame", "--at-ms", "7000", "--variant", "gradient"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["active"], false);
    assert_eq!(json["color"], "#00000000");
    assert_eq!(json["variant"], "gradient");
}

#[test]
fn cli_invalid_variant_env_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("GLOW_CHAT_VARIANT", "sparkle")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure for an unknown variant"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GLOW_CHAT_VARIANT"),
        "expected variant error message, got: {}",
        stderr
    );
}

#[test]
fn cli_config_prints_resolved_values() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["config", "--frame-ms", "50"])
        .env("GLOW_CHAT_MOUSE", "0")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frame_interval_ms"], 50);
    assert_eq!(json["mouse"], false);
    assert_eq!(json["variant"], "edge");
}

#[test]
fn cli_completions_bash() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("glow-chat"));
}

#[test]
fn cli_frame_accepts_huge_step_and_far_time() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["frame", "--at-ms", "10", "--toggle-at", "5"])
        .args(["--step-ms", "18446744073709551615"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = bin()
        .args(["frame", "--at-ms", "1000000000000", "--active"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["active"], true);
}
