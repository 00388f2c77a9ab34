use std::fs;
use std::path::Path;
use std::process::Command;

fn apidex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apidex"));
    cmd.env_remove("RUST_LOG").env_remove("APIDEX_GRAMMAR_PATH");
    cmd
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_index_prints_text_index() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "server.go", "package server\n\n// Start boots it.\nfunc Start() {}\n");
    write(dir.path(), "server_test.go", "package server\n\nfunc TestStart() {}\n");

    let output = apidex().arg("index").arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "--- server.go (go) ---\n  // // Start boots it.\n  [function] func Start() {}\n\n"
    );
}

#[test]
fn test_index_json() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "lib.rs", "/// Adds.\npub fn add() {}\n");

    let output = apidex()
        .args(["index", "--json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "lib.rs");
    assert_eq!(files[0]["language"], "rust");
    assert_eq!(files[0]["symbols"][0]["name"], "add");
    assert_eq!(files[0]["symbols"][0]["doc"], "/// Adds.");
    assert_eq!(files[0]["symbols"][0]["line"], 2);
}

#[test]
fn test_index_missing_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = apidex()
        .arg("index")
        .arg(dir.path().join("missing"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
}

#[test]
fn test_languages_lists_all() {
    let output = apidex().arg("languages").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.lines().any(|l| l.starts_with("go") && l.ends_with("bundled")));
    assert!(stdout.contains("runtime (mojo not found)"));
}
