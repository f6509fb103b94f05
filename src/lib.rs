pub mod config;
pub mod domain;
pub mod models;
pub mod modules;
pub mod services;

pub use domain::IsbnError;
pub use models::{Isbn, Isbn10, Isbn13, IsbnFormat};
pub use modules::codec;
