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

fn run(args: &[&str], store_path: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tasky"))
        .args(args)
        .env("TASKY_STORE_PATH", store_path)
        .env("TASKY_CONFIG_PATH", temp_path("no-config.json"))
        .output()
        .expect("failed to run tasky")
}

#[test]
fn list_command_shows_added_tasks() {
    let store_path = temp_path("cli-list.json");
    assert!(run(&["add", "First Task"], &store_path).status.success());
    assert!(run(&["add", "Second Task"], &store_path).status.success());
    assert!(run(&["done", "1"], &store_path).status.success());

    let output = run(&["list"], &store_path);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("First Task"));
    assert!(stdout.contains("Second Task"));
    assert!(stdout.contains("You have 1 pending task"));
}

#[test]
fn list_command_on_missing_file_is_empty() {
    let store_path = temp_path("cli-list-missing.json");

    let output = run(&["ls", "--json"], &store_path);

    assert!(output.status.success());
    assert!(!store_path.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn list_command_on_empty_file_is_empty() {
    let store_path = temp_path("cli-list-empty.json");
    std::fs::write(&store_path, "").unwrap();

    let output = run(&["list"], &store_path);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("You have 0 pending tasks"));
}

#[test]
fn list_command_reports_malformed_file() {
    let store_path = temp_path("cli-list-malformed.json");
    std::fs::write(&store_path, "{ not json").unwrap();

    let output = run(&["list"], &store_path);
    let content = std::fs::read_to_string(&store_path).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_data"));
    assert_eq!(content, "{ not json");
}

#[test]
fn list_command_colours_tasks_by_default() {
    let store_path = temp_path("cli-list-colour.json");
    assert!(run(&["add", "Pending Task", "-p", "Low"], &store_path).status.success());
    assert!(run(&["add", "Finished Task"], &store_path).status.success());
    assert!(run(&["done", "2"], &store_path).status.success());

    let output = run(&["list"], &store_path);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b[34mPending Task\x1b[0m"));
    assert!(stdout.contains("\x1b[32mFinished Task\x1b[0m"));
    assert!(stdout.contains("\x1b[31mYou have 1 pending task\x1b[0m"));
}

#[test]
fn list_command_without_colour_is_plain() {
    let store_path = temp_path("cli-list-plain.json");
    assert!(run(&["add", "Plain Task", "-p", "High"], &store_path).status.success());

    let output = run(&["list", "--config-override", "color=off"], &store_path);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("Plain Task"));
    assert!(stdout.trim_end().ends_with("You have 1 pending task"));
}
