pub mod add_book_cmd;
pub mod import_books_cmd;
pub mod list_books_cmd;
pub mod mark_read_cmd;
pub mod rate_book_cmd;
pub mod search_books_cmd;
pub mod suggest_book_cmd;

use crate::core::command::CommandError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub(crate) fn parse_number(text: &str, field: &str) -> Result<i32, CommandError> {
    text.trim().parse::<i32>().map_err(|_| CommandError::Validation {
        message: format!("Invalid {}.", field),
        reason_code: Some(text.to_string()),
    })
}

// User ratings live in 1..=5; 0 is reserved for "unrated".
pub(crate) fn parse_rating(text: &str) -> Result<i32, CommandError> {
    let rating = parse_number(text, "rating")?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CommandError::Validation {
            message: format!("Rating must be between {} and {}.", MIN_RATING, MAX_RATING),
            reason_code: Some(text.to_string()),
        });
    }
    Ok(rating)
}
