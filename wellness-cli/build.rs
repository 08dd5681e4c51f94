use std::path::{Path, PathBuf};
use std::process::Command;

fn git_short_sha(repo_root: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}

fn main() {
    let repo_root = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("..");

    let sha = git_short_sha(&repo_root).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=WELLNESS_BUILD_SHA={sha}");

    // No HEAD to watch outside a git checkout.
    let head = repo_root.join(".git").join("HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }
}
