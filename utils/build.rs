use std::process::Command;

fn main() {
    println!("cargo:rustc-env=BUILD_COMMIT={}", short_commit());
}

/// Short hash of HEAD, or "unknown" outside a git checkout (source
/// tarballs, vendored builds).
fn short_commit() -> String {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_owned(),
        _ => "unknown".to_owned(),
    }
}
