//! Stamps the binary with the commit and date it was built from.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Reads `name` from the environment, treating an empty value as unset.
fn env_override(name: &str) -> Option<String> {
    println!("cargo:rerun-if-env-changed={}", name);
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Short hash of HEAD, if this is a git checkout with git on the path.
fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}

fn main() -> io::Result<()> {
    let commit = env_override("BUILD_COMMIT")
        .or_else(head_commit)
        .unwrap_or_else(|| UNKNOWN.to_owned());
    let date = env_override("BUILD_DATE")
        .unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;

    let generated = [
        ("BUILD_COMMIT", commit.as_str()),
        ("BUILD_DATE", date.as_str()),
        ("PKG_VERSION", env!("CARGO_PKG_VERSION")),
    ]
    .iter()
    .map(|(name, value)| format!("pub const {}: &str = {:?};\n", name, value))
    .collect::<String>();
    fs::write(out_dir.join("build_info.rs"), generated)?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}
