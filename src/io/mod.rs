//! Input/output operations, CLI surface, and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Layout and rendering constants plus runtime defaults
pub mod configuration;
/// Error types for engine and I/O operations
pub mod error;
/// Image decoding into engine-ready handles and PNG output
pub mod image;
/// Colored stderr logger behind the `log` facade
pub mod logger;
/// Progress display for decode and compose phases
pub mod progress;
