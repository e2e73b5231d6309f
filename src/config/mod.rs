//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (last-used selection, display preferences)

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
