//! Shared value types used across portalworld crates.
//!
//! # Invariants
//! - A `Color` always holds a 24-bit RGB value.
//! - Value types are plain data: `Copy`, serde-friendly, no interior state.

pub mod color;
pub mod types;

pub use color::{Color, ColorError};
pub use types::{Point3, Span};
