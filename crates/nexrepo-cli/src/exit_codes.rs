//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure, or the repository does not exist
pub const ERROR: i32 = 1;

/// Validation error - a required parameter is missing or invalid
pub const VALIDATION_ERROR: i32 = 2;

/// Nexus answered the creation request with a non-success status
pub const REJECTED: i32 = 3;

/// Network error - Nexus unreachable, timed out, or refused the credentials
pub const NETWORK_ERROR: i32 = 4;

/// IO error - file not found, permission denied, etc.
pub const IO_ERROR: i32 = 5;

/// Usage error - invalid arguments or configuration (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
