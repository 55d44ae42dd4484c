//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{TrackerPaths, DATA_DIR_ENV};
pub use settings::{Settings, SettingsUpdate};
