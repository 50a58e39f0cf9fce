use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const ICON_FILES: [&str; 3] = ["icon16.png", "icon48.png", "icon128.png"];

/// Runs `scope-icons` with `dir` as the working directory
fn run_scope_icons(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scope-icons"))
        .current_dir(dir)
        .output()
        .expect("Failed to run scope-icons command")
}

fn report(output: &Output) {
    eprintln!("status: {}", output.status);
    eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
    eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
}

/// Against an empty `icons/` directory the tool leaves exactly the three icons behind
#[test]
fn test_generates_icons_into_existing_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let icons = temp_dir.path().join("icons");
    fs::create_dir(&icons).expect("Failed to create icons directory");

    let output = run_scope_icons(temp_dir.path());
    if !output.status.success() {
        report(&output);
        panic!("scope-icons command failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if cfg!(feature = "render") {
        let mut names: Vec<String> = fs::read_dir(&icons)
            .expect("Failed to list icons directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["icon128.png", "icon16.png", "icon48.png"]);

        for name in ICON_FILES {
            assert!(
                stdout.contains(&format!("icons/{name}")),
                "stdout should mention icons/{name}"
            );
        }
        assert!(stdout.contains("All icons created successfully!"));
    } else {
        assert_eq!(fs::read_dir(&icons).unwrap().count(), 0);
        for name in ICON_FILES {
            assert!(stdout.contains(name), "Instructions should name {name}");
        }
    }
}

/// Without an `icons/` directory rendering builds fail and create nothing
#[test]
fn test_missing_icons_dir_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_scope_icons(temp_dir.path());

    if cfg!(feature = "render") {
        assert!(!output.status.success(), "Expected failure without icons/");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("icon16.png"), "stderr: {stderr}");
    } else {
        assert!(output.status.success());
    }
    assert!(!temp_dir.path().join("icons").exists());
}

#[test]
fn test_rejects_unknown_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(env!("CARGO_BIN_EXE_scope-icons"))
        .current_dir(temp_dir.path())
        .arg("--size")
        .arg("64")
        .output()
        .expect("Failed to run scope-icons command");

    assert_eq!(output.status.code(), Some(2));
}
