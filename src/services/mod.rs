//! Services Layer
//!
//! Business operations the command line calls into. The codec itself stays
//! pure; logging and output policy live here.

pub mod isbn_service;

// Re-export for convenience
pub use isbn_service::*;
