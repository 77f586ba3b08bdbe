pub mod error;
pub mod models;
pub mod prelude;

/// Delimiter used to pack a genre list into a single string.
pub static GENRE_DELIMITER: &str = ", ";
