//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the version string prefixed with the binary name.
#[must_use]
pub fn full_version() -> String {
    format!("primegen {}", version())
}
