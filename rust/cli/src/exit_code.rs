//! Exit code constants for the CLI application.
//!
//! `bye` and end of input both end a session successfully; anything that
//! stops the player from answering the engine is an error.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code (configuration, stream failure, bad arguments).
pub const ERROR: i32 = 2;
