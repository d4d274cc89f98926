//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `montyhall 2026-10-16 (abc1234)` style line for `--version`.
pub fn version_line(binary: &str) -> String {
    format!(
        "{} {} {} ({})",
        binary,
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_line_names_binary() {
        let line = version_line("simulate");
        assert!(line.starts_with("simulate 0.1.0 "));
        assert!(line.ends_with(&format!("({})", BUILD_COMMIT)));
    }
}
