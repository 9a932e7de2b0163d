//! Commit and date stamped in by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string printed by `--version`.
pub fn version_line() -> String {
    format!("dino-runner {} ({})", BUILD_DATE, BUILD_COMMIT)
}
