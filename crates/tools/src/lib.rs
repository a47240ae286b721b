//! Developer tooling: world inspector and summaries.
//!
//! # Invariants
//! - Tools are read-only over definitions.

pub mod inspector;

pub use inspector::{ObstacleInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "portalworld-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
