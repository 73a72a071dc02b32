//! Unified error type for vecrecord.
//!
//! Every operation in the facade reports a single [`Error`], which keeps the
//! schema, encode and decode categories of the underlying crates.

/// All vecrecord errors.
pub use vecrecord_core::CodecError as Error;

/// Result type for vecrecord operations.
pub type Result<T> = std::result::Result<T, Error>;
