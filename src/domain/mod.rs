//! Domain layer - Pure business abstractions
//!
//! No I/O, no logging setup, no CLI. Only the error taxonomy shared by the
//! codec, the models and the service layer.

pub mod errors;

pub use errors::IsbnError;
