//! Build script that stamps the `estate` binary with its version.
//!
//! The version comes from, in order: an `ESTATE_VERSION` set by the
//! packager, `git describe` of the workspace checkout, and finally the
//! crate version from Cargo.toml.

use std::env;
use std::process::Command;

/// The workspace root, relative to this crate.
const WORKSPACE_GIT_DIR: &str = "../../.git";

fn main() {
    println!("cargo:rerun-if-env-changed=ESTATE_VERSION");
    println!("cargo:rerun-if-changed={}/HEAD", WORKSPACE_GIT_DIR);
    println!("cargo:rerun-if-changed={}/refs/", WORKSPACE_GIT_DIR);

    let version = env::var("ESTATE_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe_checkout)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=ESTATE_VERSION={}", version.trim());
}

/// Version from `git describe`, with a release tag's `v` prefix removed.
fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    if described.is_empty() {
        return None;
    }

    Some(described.strip_prefix('v').unwrap_or(described).to_string())
}
