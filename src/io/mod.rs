//! Configuration, errors, command line and image output

/// Command-line arguments and the per-seed driver
pub mod cli;
/// Constants, defaults and the validated floor configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG export and output naming
pub mod image;
/// Progress display for multi-floor runs
pub mod progress;
