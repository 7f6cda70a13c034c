//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `reel --version`.
pub fn version_line() -> String {
    format!("reel {} ({}, {})", PKG_VERSION, BUILD_DATE, BUILD_COMMIT)
}
