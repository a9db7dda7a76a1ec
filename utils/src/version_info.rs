//! Version information for the application, populated at build time.

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Display string for the nav bar, `{version}+{commit}`.
pub fn format_version() -> String {
    format!("{}+{}", build_version(), build_commit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_not_empty() {
        assert!(!build_commit().is_empty());
    }

    #[test]
    fn test_format_version() {
        let formatted = format_version();
        assert!(formatted.contains('+'));
        assert!(formatted.starts_with(build_version()));
    }
}
