//! # Blogly Shared
//!
//! Wire-level types shared by the server and its tests: HTML form payloads
//! and the problem-details body used for error pages.

pub mod dto;
pub mod response;

pub use dto::{FormError, FormFields, PostForm, TagForm, UserForm};
pub use response::ErrorResponse;
