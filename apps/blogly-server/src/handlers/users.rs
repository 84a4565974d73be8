//! User pages.

use actix_web::{HttpResponse, web};
use blogly_core::DomainError;
use blogly_core::domain::{User, UserDraft};
use blogly_core::ports::{BaseRepository, PostRepository, UserRepository};
use blogly_shared::UserForm;
use minijinja::context;

use super::{FormBody, fields, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates::render_page;
use crate::views::{self, UserView};

/// Fetch a user or fail with 404.
pub(super) async fn load_user(state: &AppState, id: i32) -> AppResult<User> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", id).into())
}

fn draft_from(form: FormBody) -> Result<UserDraft, DomainError> {
    let form = UserForm::from(&fields(form));
    UserDraft::new(form.first_name, form.last_name, form.image_url)
}

/// GET /users
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list_by_name().await?;

    render_page(
        state.templates.as_ref(),
        "users/index.html",
        context! { users => views::users(&users) },
    )
}

/// GET /users/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render_page(state.templates.as_ref(), "users/new.html", context! {})
}

/// POST /users/new
pub async fn create(state: web::Data<AppState>, form: FormBody) -> AppResult<HttpResponse> {
    let draft = draft_from(form)?;
    let user = state.users.create(draft).await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(redirect("/users"))
}

/// GET /users/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;
    let posts = state.posts.find_by_user_id(user.id).await?;

    render_page(
        state.templates.as_ref(),
        "users/show.html",
        context! {
            user => UserView::from(&user),
            posts => views::posts(&posts),
        },
    )
}

/// GET /users/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;

    render_page(
        state.templates.as_ref(),
        "users/edit.html",
        context! { user => UserView::from(&user) },
    )
}

/// POST /users/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;
    let draft = draft_from(form)?;
    state.users.update(user.id, draft).await?;

    tracing::info!(user_id = user.id, "User updated");
    Ok(redirect("/users"))
}

/// POST /users/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.users.delete(id).await?;

    tracing::info!(user_id = id, "User deleted along with their posts");
    Ok(redirect("/users"))
}
