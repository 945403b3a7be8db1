use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rustc-env=PYREQS_VERSION={}", package_version());
}

/// `git describe` without the leading `v`, e.g. "1.2.0" or "1.2.0-3-gabc123".
/// Dirty trees and source tarballs get a build timestamp appended.
fn package_version() -> String {
    match git_describe() {
        Some(tag) if !tag.ends_with("-dirty") => tag,
        Some(tag) => format!("{}-{}", tag, build_time()),
        None => format!("0.0.0-unknown-{}", build_time()),
    }
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let tag = described.strip_prefix('v').unwrap_or(described);
    (!tag.is_empty()).then(|| tag.to_string())
}

fn build_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
