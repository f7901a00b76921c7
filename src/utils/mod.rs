//! Shared utilities

pub mod logging;

pub use logging::setup_logging;
