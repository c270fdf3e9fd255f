//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner printed by `bossrush --version`.
pub fn version_line() -> String {
    format!(
        "bossrush {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
