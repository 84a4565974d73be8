//! Tag pages.

use actix_web::{HttpResponse, web};
use blogly_core::DomainError;
use blogly_core::domain::{Tag, TagDraft};
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository};
use blogly_shared::TagForm;
use minijinja::context;

use super::{FormBody, fields, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates::render_page;
use crate::views;

async fn load_tag(state: &AppState, id: i32) -> AppResult<Tag> {
    state
        .tags
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Tag", id).into())
}

fn parse(form: FormBody) -> AppResult<(TagDraft, Vec<i32>)> {
    let form = TagForm::try_from(&fields(form))?;
    let draft = TagDraft::new(form.name)?;
    Ok((draft, form.post_ids))
}

/// GET /tags
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.list_by_name().await?;

    render_page(
        state.templates.as_ref(),
        "tags/index.html",
        context! { tags => tags },
    )
}

/// GET /tags/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_by_title().await?;

    render_page(
        state.templates.as_ref(),
        "tags/new.html",
        context! { posts => views::posts(&posts) },
    )
}

/// POST /tags/new
pub async fn create(state: web::Data<AppState>, form: FormBody) -> AppResult<HttpResponse> {
    let (draft, post_ids) = parse(form)?;
    let tag = state.tags.create(draft, &post_ids).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");
    Ok(redirect("/tags"))
}

/// GET /tags/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let tag = load_tag(&state, path.into_inner()).await?;
    let posts = state.posts.find_by_tag_id(tag.id).await?;

    render_page(
        state.templates.as_ref(),
        "tags/show.html",
        context! {
            tag => tag,
            posts => views::posts(&posts),
        },
    )
}

/// GET /tags/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = load_tag(&state, path.into_inner()).await?;
    let posts = state.posts.list_by_title().await?;
    let selected: Vec<i32> = state
        .posts
        .find_by_tag_id(tag.id)
        .await?
        .iter()
        .map(|post| post.id)
        .collect();

    render_page(
        state.templates.as_ref(),
        "tags/edit.html",
        context! {
            tag => tag,
            posts => views::posts(&posts),
            selected => selected,
        },
    )
}

/// POST /tags/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let tag = load_tag(&state, path.into_inner()).await?;
    let (draft, post_ids) = parse(form)?;
    let updated = state.tags.update(tag.id, draft, &post_ids).await?;

    tracing::info!(tag_id = tag.id, name = %updated.name, "Tag updated");
    Ok(redirect("/tags"))
}

/// POST /tags/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.tags.delete(id).await?;

    tracing::info!(tag_id = id, "Tag deleted");
    Ok(redirect("/tags"))
}
