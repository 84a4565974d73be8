//! Template-facing projections of domain entities.

use blogly_core::domain::{Post, User};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserView<'a> {
    pub id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub full_name: String,
    pub image_url: &'a str,
}

impl<'a> From<&'a User> for UserView<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id,
            first_name: &user.first_name,
            last_name: &user.last_name,
            full_name: user.full_name(),
            image_url: &user.image_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostView<'a> {
    pub id: i32,
    pub user_id: i32,
    pub title: &'a str,
    pub content: &'a str,
    pub created_at: String,
}

impl<'a> From<&'a Post> for PostView<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: &post.title,
            content: &post.content,
            created_at: post.created_at_display(),
        }
    }
}

pub fn users(users: &[User]) -> Vec<UserView<'_>> {
    users.iter().map(UserView::from).collect()
}

pub fn posts(posts: &[Post]) -> Vec<PostView<'_>> {
    posts.iter().map(PostView::from).collect()
}
