use serde::{Deserialize, Serialize};

use super::{finish, required};
use crate::error::DomainError;

/// Tag entity - a unique label attached to any number of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Validated input for creating or renaming a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDraft {
    pub name: String,
}

impl TagDraft {
    pub fn new(name: String) -> Result<Self, DomainError> {
        let mut errors = Vec::new();
        let name = required("name", name, &mut errors);
        finish(Self { name }, errors)
    }
}
