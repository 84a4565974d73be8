//! Data Transfer Objects - the HTML forms submitted by the browser.
//!
//! Bodies arrive as `application/x-www-form-urlencoded` pairs. Checkbox
//! groups repeat their key once per checked box, so fields are kept as an
//! ordered list of pairs rather than a map.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} contains an invalid id: {value:?}")]
    Malformed { field: &'static str, value: String },
}

/// Raw submitted form fields.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value under `name`, or an empty string when the field is absent.
    /// Required-field checks happen when the domain draft is built.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Every integer id submitted under `name`.
    pub fn ids(&self, name: &'static str) -> Result<Vec<i32>, FormError> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| {
                value.trim().parse().map_err(|_| FormError::Malformed {
                    field: name,
                    value: value.clone(),
                })
            })
            .collect()
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// New/edit user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl From<&FormFields> for UserForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            first_name: fields.text("first_name"),
            last_name: fields.text("last_name"),
            image_url: fields.get("image_url").map(str::to_string),
        }
    }
}

/// New/edit post form; `tags` is a checkbox group of tag ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl TryFrom<&FormFields> for PostForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            title: fields.text("title"),
            content: fields.text("content"),
            tag_ids: fields.ids("tags")?,
        })
    }
}

/// New/edit tag form; `posts` is a checkbox group of post ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
    pub post_ids: Vec<i32>,
}

impl TryFrom<&FormFields> for TagForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: fields.text("name"),
            post_ids: fields.ids("posts")?,
        })
    }
}
