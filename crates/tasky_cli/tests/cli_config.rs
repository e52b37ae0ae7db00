use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasky-{nanos}-{file_name}"))
}

#[test]
fn config_file_store_path_is_used() {
    let exe = env!("CARGO_BIN_EXE_tasky");
    let config_path = temp_path("config-store.json");
    let store_path = temp_path("configured-tasks.json");
    let config = serde_json::json!({ "store_path": store_path });
    std::fs::write(&config_path, config.to_string()).unwrap();

    let output = Command::new(exe)
        .args(["add", "configured"])
        .env_remove("TASKY_STORE_PATH")
        .env("TASKY_CONFIG_PATH", &config_path)
        .output()
        .expect("failed to run add command");

    let exists = store_path.exists();
    std::fs::remove_file(&store_path).ok();
    std::fs::remove_file(&config_path).ok();

    assert!(output.status.success());
    assert!(exists);
}

#[test]
fn config_override_store_path_wins_over_file() {
    let exe = env!("CARGO_BIN_EXE_tasky");
    let config_path = temp_path("config-override.json");
    let file_store = temp_path("file-tasks.json");
    let override_store = temp_path("override-tasks.json");
    let config = serde_json::json!({ "store_path": file_store });
    std::fs::write(&config_path, config.to_string()).unwrap();

    let override_arg = format!("store_path={}", override_store.display());
    let output = Command::new(exe)
        .args(["add", "overridden", "--config-override", &override_arg])
        .env_remove("TASKY_STORE_PATH")
        .env("TASKY_CONFIG_PATH", &config_path)
        .output()
        .expect("failed to run add command");

    let override_exists = override_store.exists();
    let file_exists = file_store.exists();
    std::fs::remove_file(&override_store).ok();
    std::fs::remove_file(&file_store).ok();
    std::fs::remove_file(&config_path).ok();

    assert!(output.status.success());
    assert!(override_exists);
    assert!(!file_exists);
}

#[test]
fn invalid_config_override_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_tasky");
    let store_path = temp_path("bad-override.json");

    let output = Command::new(exe)
        .args(["list", "--config-override", "shape=round"])
        .env("TASKY_STORE_PATH", &store_path)
        .env("TASKY_CONFIG_PATH", temp_path("no-config.json"))
        .output()
        .expect("failed to run list command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
    assert!(stderr.contains("unknown config field"));
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let exe = env!("CARGO_BIN_EXE_tasky");
    let config_path = temp_path("broken-config.json");
    let store_path = temp_path("broken-config-tasks.json");
    std::fs::write(&config_path, "{ invalid json ").unwrap();

    let output = Command::new(exe)
        .args(["add", "still works"])
        .env("TASKY_STORE_PATH", &store_path)
        .env("TASKY_CONFIG_PATH", &config_path)
        .env("TASKY_LOG", "warn")
        .output()
        .expect("failed to run add command");

    std::fs::remove_file(&store_path).ok();
    std::fs::remove_file(&config_path).ok();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ignoring config file"));
}
