pub mod isbn;

pub use isbn::{Isbn, Isbn10, Isbn13, IsbnFormat};
