#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use blogly_core::domain::{Post, PostDraft, Tag, TagDraft, User, UserDraft};
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::{DatabaseConfig, connect};
use blogly_server::AppState;
use migration::{Migrator, MigratorTrait};

/// Build the app service over `$state`, configured like the real server.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(blogly_server::handlers::configure_routes),
        )
        .await
    };
}

/// Fresh application state over a migrated in-memory SQLite database.
pub async fn test_state() -> AppState {
    let db = connect(&DatabaseConfig::sqlite_memory())
        .await
        .expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    AppState::new(db)
}

pub fn form_post<T: serde::Serialize>(uri: &str, form: T) -> TestRequest {
    TestRequest::post().uri(uri).set_form(form)
}

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .expect("ascii location")
        .to_string()
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn seed_user(state: &AppState, first: &str, last: &str) -> User {
    let draft = UserDraft::new(first.into(), last.into(), None).unwrap();
    state.users.create(draft).await.unwrap()
}

pub async fn seed_tag(state: &AppState, name: &str) -> Tag {
    let draft = TagDraft::new(name.into()).unwrap();
    state.tags.create(draft, &[]).await.unwrap()
}

pub async fn seed_post(state: &AppState, user: &User, title: &str, tags: &[i32]) -> Post {
    let draft = PostDraft::new(title.into(), format!("{title} body")).unwrap();
    state.posts.create(user.id, draft, tags).await.unwrap()
}
