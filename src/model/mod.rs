//! Request and response DTOs shared by every API endpoint.
//!
//! All DTOs serialize with camelCase keys to match the JSON contract consumed by the
//! marketplace frontend.

pub mod api;
pub mod auction_winner;
pub mod auth;
pub mod bid;
pub mod category;
pub mod message;
pub mod payment;
pub mod product;
pub mod user;

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects strings that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}
