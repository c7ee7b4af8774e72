//! word_stats 命令行测试

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn word_stats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_stats"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// 在临时目录写入输入文本
fn write_input(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("word_stats_{}_{}", std::process::id(), name));
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_missing_file_argument() {
    let output = word_stats().arg("no_such_input.txt").output().unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "File no_such_input.txt does not exist...\n");
}

#[test]
fn test_missing_file_from_prompt() {
    let mut child = word_stats()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"no_such_input.txt\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Enter the file: File no_such_input.txt does not exist...\n"
    );
}

#[test]
fn test_report_for_file() {
    let path = write_input("report.txt", "The quick brown fox.\nThe lazy dog -- the END!\n");
    let output = word_stats().arg(&path).output().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.starts_with("For load = 0.7\n\nInbuilt Function\ncollisions = "));
    assert_eq!(report.matches("Second Function\n").count(), 3);
    assert!(report.ends_with("is 'the' which occurs 3 times\n"));
}

#[test]
fn test_invalid_load_fails() {
    let path = write_input("load.txt", "a b c\n");
    let output = word_stats().arg(&path).args(["--load", "1e-30"]).output().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
