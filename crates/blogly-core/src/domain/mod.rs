//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{Post, PostDraft};
pub use tag::{Tag, TagDraft};
pub use user::{DEFAULT_IMAGE_URL, User, UserDraft};

use crate::error::DomainError;

/// Trims `value` and records a "required" message when nothing is left.
fn required(field: &str, value: String, errors: &mut Vec<String>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(format!("{field} is required"));
    }
    trimmed.to_string()
}

fn finish<T>(value: T, errors: Vec<String>) -> Result<T, DomainError> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(DomainError::Validation(errors))
    }
}
