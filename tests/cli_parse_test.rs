use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn vertexgraph(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_vertexgraph"));
    command.current_dir(dir.path()).env_remove("RUST_LOG");
    command
}

#[test]
fn test_init_command() {
    let temp_dir = TempDir::new().unwrap();

    let output = vertexgraph(&temp_dir)
        .arg("init")
        .output()
        .expect("Failed to run init command");

    assert!(output.status.success());

    let config_path = temp_dir.path().join(".vertexgraph/settings.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[graph]"));
    assert!(content.contains("[logging]"));
}

#[test]
fn test_config_command_reads_workspace_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".vertexgraph");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("settings.toml"),
        "[graph]\nedge_suffix = \".deps\"\n",
    )
    .unwrap();

    let output = vertexgraph(&temp_dir)
        .arg("config")
        .output()
        .expect("Failed to run config command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("edge_suffix = \".deps\""));
}

#[test]
fn test_parse_command_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("pkg/lib")).unwrap();
    fs::write(
        temp_dir.path().join("pkg/app.edges.json"),
        r#"{"edges": [{"path": "lib", "name": "core"}]}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("pkg/lib/core.edges.json"), "{}").unwrap();

    let output = vertexgraph(&temp_dir)
        .args(["parse", "pkg", "app", "--json"])
        .output()
        .expect("Failed to run parse command");

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["order"], 2);
    assert_eq!(summary["vertices"][1]["path"], "pkg/lib/core");
    assert_eq!(summary["vertices"][0]["metadata"], "pkg/app.vertex.json");
    assert_eq!(summary["edges"][0]["from"], 0);
    assert_eq!(summary["edges"][0]["to"], 1);
}

#[test]
fn test_parse_command_reports_cycle() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("a.edges.json"),
        r#"{"edges": [{"path": "", "name": "b"}]}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("b.edges.json"),
        r#"{"edges": [{"path": "", "name": "a"}]}"#,
    )
    .unwrap();

    let output = vertexgraph(&temp_dir)
        .args(["parse", ".", "a"])
        .output()
        .expect("Failed to run parse command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cycle detected"));
}
