use std::process::Command;

fn waterblocks() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_waterblocks"));
    // Disable color for consistent output
    cmd.env("NO_COLOR", "1");
    cmd.env("TERM", "dumb");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn compute_prints_total_and_levels() {
    let output = waterblocks()
        .args(["compute", "4,2,0,3,2,5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Levels:  4, 4, 4, 4, 4, 5"), "{}", stdout);
    assert!(stdout.contains("Total Water Trapped: 9 units"), "{}", stdout);
    // TERM=dumb falls back to ASCII glyphs
    assert!(stdout.contains("## ~~ ~~ ~~ ~~ ##"), "{}", stdout);
}

#[test]
fn compute_without_arguments_uses_demo_blocks() {
    let output = waterblocks().output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Heights: 4, 2, 0, 3, 2, 5"), "{}", stdout);
    assert!(stdout.contains("Total Water Trapped: 9 units"), "{}", stdout);
}

#[test]
fn compute_json_emits_result_event() {
    let output = waterblocks()
        .args(["--json", "compute", "0,1,0,2,1,0,1,3,2,1,2,1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");

    let result = events.iter().find(|e| e["event"] == "result").unwrap();
    assert_eq!(result["total"], 6);
    assert_eq!(
        result["water_levels"],
        serde_json::json!([0, 1, 1, 2, 2, 2, 2, 3, 2, 2, 2, 1])
    );
}

#[test]
fn compute_lenient_drops_bad_tokens() {
    let output = waterblocks()
        .args(["--json", "compute", "3, x, -1, 0, 3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .find(|e| e["event"] == "result")
        .unwrap();
    assert_eq!(result["heights"], serde_json::json!([3, 0, 3]));
    assert_eq!(result["total"], 3);
}

#[test]
fn compute_strict_rejects_bad_token() {
    let output = waterblocks()
        .args(["--strict", "compute", "3, x, 3"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid block height 'x' at position 1"),
        "{}",
        stderr
    );
}

#[test]
fn compute_rejects_input_without_valid_heights() {
    let output = waterblocks()
        .args(["--json", "compute", "a,b"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["event"], "error");
    assert!(last["message"]
        .as_str()
        .unwrap()
        .contains("Please enter valid, comma-separated non-negative numbers."));
}

#[test]
fn compute_reads_strict_mode_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("waterblocks.toml"),
        "[input]\nmode = \"strict\"\n",
    )
    .unwrap();

    let output = waterblocks()
        .current_dir(dir.path())
        .args(["compute", "1,-2,1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative block height -2"), "{}", stderr);
}

#[test]
fn compute_warns_about_unknown_config_keys() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("waterblocks.toml"), "[output]\ncolour = \"never\"\n").unwrap();

    let output = waterblocks()
        .current_dir(dir.path())
        .args(["compute", "1,0,1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown config key 'colour' (did you mean 'color'?)"),
        "{}",
        stderr
    );
}

#[test]
fn compute_huge_height_finishes_with_short_chart() {
    let output = waterblocks()
        .args(["compute", "3000000000,0,3000000000"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Total Water Trapped: 3000000000 units"),
        "{}",
        stdout
    );
    assert!(stdout.lines().count() < 40, "{}", stdout);
}

#[test]
fn compute_strict_file_with_trailing_commas() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("heights.txt");
    std::fs::write(&input, "4,\n2,\n0,\n3,\n2,\n5\n").unwrap();

    let output = waterblocks()
        .args(["--strict", "--json", "compute", "--file"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .find(|e| e["event"] == "result")
        .unwrap();
    assert_eq!(result["total"], 9);
}
