use serde::{Deserialize, Serialize};

use super::{finish, required};
use crate::error::DomainError;

/// Profile picture used when a user does not supply one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://www.nicepng.com/png/detail/933-9332131_profile-picture-default-png.png";

/// User entity - an author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated input for creating or editing a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserDraft {
    /// Build a draft, rejecting blank names. A missing or blank image URL
    /// falls back to [`DEFAULT_IMAGE_URL`].
    pub fn new(
        first_name: String,
        last_name: String,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        let mut errors = Vec::new();
        let first_name = required("first_name", first_name, &mut errors);
        let last_name = required("last_name", last_name, &mut errors);
        let image_url = image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        finish(
            Self {
                first_name,
                last_name,
                image_url,
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_url_uses_default() {
        let draft = UserDraft::new("Alice".into(), "Johnson".into(), Some("  ".into())).unwrap();
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);

        let draft = UserDraft::new("Alice".into(), "Johnson".into(), None).unwrap();
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn names_are_trimmed() {
        let draft = UserDraft::new(
            " Jane ".into(),
            "Smith\n".into(),
            Some("http://img/x.png".into()),
        )
        .unwrap();
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.last_name, "Smith");
        assert_eq!(draft.image_url, "http://img/x.png");
    }

    #[test]
    fn reports_every_missing_name() {
        let err = UserDraft::new("".into(), "   ".into(), None).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors, vec!["first_name is required", "last_name is required"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn full_name_joins_with_space() {
        let user = User {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        };
        assert_eq!(user.full_name(), "John Doe");
    }
}
