use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{finish, required};
use crate::error::DomainError;

/// Post entity - a blog post written by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Human-readable creation time for templates.
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%a %b %-d %Y, %-I:%M %p").to_string()
    }
}

/// Validated input for creating or editing a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: String, content: String) -> Result<Self, DomainError> {
        let mut errors = Vec::new();
        let title = required("title", title, &mut errors);
        // Content keeps its inner whitespace; only the blank check trims.
        let content = if content.trim().is_empty() {
            errors.push("content is required".to_string());
            String::new()
        } else {
            content
        };

        finish(Self { title, content }, errors)
    }
}
