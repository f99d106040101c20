use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for chatsum, isolated from the user's config and log settings
pub fn chatsum() -> Command {
    let mut cmd = cargo_bin_cmd!("chatsum");
    cmd.env("CHATSUM_CONFIG_DIR", "/nonexistent/chatsum-test-config")
        .env_remove("CHATSUM_CONFIG")
        .env_remove("CHATSUM_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a transcript file and return its path
#[allow(dead_code)]
pub fn write_transcript(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
