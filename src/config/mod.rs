//! Configuration module for the article pipeline
//!
//! This module provides the `ScoutConfig` struct, its fluent builder and
//! environment overlay, and read-only getters.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ScoutConfigBuilder;
pub use types::ScoutConfig;
