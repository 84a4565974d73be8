//! Post pages. Posts are created under a user and tagged through checkbox
//! groups; each submission replaces the post's whole tag set.

use actix_web::{HttpResponse, web};
use blogly_core::DomainError;
use blogly_core::domain::{Post, PostDraft};
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository};
use blogly_shared::PostForm;
use minijinja::context;

use super::users::load_user;
use super::{FormBody, fields, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates::render_page;
use crate::views::{PostView, UserView};

async fn load_post(state: &AppState, id: i32) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id).into())
}

fn parse(form: FormBody) -> AppResult<(PostDraft, Vec<i32>)> {
    let form = PostForm::try_from(&fields(form))?;
    let draft = PostDraft::new(form.title, form.content)?;
    Ok((draft, form.tag_ids))
}

/// GET /user/{user_id}/posts/new
pub async fn new_form(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;
    let tags = state.tags.list_by_name().await?;

    render_page(
        state.templates.as_ref(),
        "posts/new.html",
        context! {
            user => UserView::from(&user),
            tags => tags,
        },
    )
}

/// POST /user/{user_id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;
    let (draft, tag_ids) = parse(form)?;
    let post = state.posts.create(user.id, draft, &tag_ids).await?;

    tracing::info!(post_id = post.id, user_id = user.id, "Post created");
    Ok(redirect(format!("/users/{}", user.id)))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    let author = load_user(&state, post.user_id).await?;
    let tags = state.tags.find_by_post_id(post.id).await?;

    render_page(
        state.templates.as_ref(),
        "posts/show.html",
        context! {
            post => PostView::from(&post),
            author => UserView::from(&author),
            tags => tags,
        },
    )
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    let tags = state.tags.list_by_name().await?;
    let selected: Vec<i32> = state
        .tags
        .find_by_post_id(post.id)
        .await?
        .iter()
        .map(|tag| tag.id)
        .collect();

    render_page(
        state.templates.as_ref(),
        "posts/edit.html",
        context! {
            post => PostView::from(&post),
            tags => tags,
            selected => selected,
        },
    )
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    let (draft, tag_ids) = parse(form)?;
    state.posts.update(post.id, draft, &tag_ids).await?;

    tracing::info!(post_id = post.id, tags = tag_ids.len(), "Post updated");
    Ok(redirect(format!("/users/{}", post.user_id)))
}

/// POST /posts/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    state.posts.delete(post.id).await?;

    tracing::info!(post_id = post.id, "Post deleted");
    Ok(redirect(format!("/users/{}", post.user_id)))
}
