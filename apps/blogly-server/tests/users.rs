#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use blogly_core::domain::{DEFAULT_IMAGE_URL, Post, User};
use blogly_core::ports::{BaseRepository, UserRepository};
use common::{body_text, form_post, get, location, seed_post, seed_user, test_state};

#[actix_web::test]
async fn root_redirects_to_users() {
    let state = test_state().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");
}

#[actix_web::test]
async fn created_user_appears_in_listing() {
    let state = test_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        form_post(
            "/users/new",
            &[("first_name", "John"), ("last_name", "Doe")],
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, get("/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("John Doe"));
}

#[actix_web::test]
async fn listing_shows_each_user_once_by_last_then_first_name() {
    let state = test_state().await;
    let app = init_app!(state);

    for (first, last) in [("Jane", "Smith"), ("John", "Doe"), ("Alice", "Smith")] {
        let req = form_post(
            "/users/new",
            &[("first_name", first), ("last_name", last), ("image_url", "")],
        );
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    let body = body_text(test::call_service(&app, get("/users").to_request()).await).await;
    let expected = ["John Doe", "Alice Smith", "Jane Smith"];
    for name in expected {
        assert_eq!(body.matches(name).count(), 1, "{name} should appear once");
    }
    let positions: Vec<usize> = expected.iter().map(|n| body.find(n).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[actix_web::test]
async fn user_without_image_gets_default_placeholder() {
    let state = test_state().await;
    let app = init_app!(state);

    let req = form_post(
        "/users/new",
        &[("first_name", "Alice"), ("last_name", "Johnson")],
    );
    test::call_service(&app, req.to_request()).await;

    let users = state.users.list_by_name().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].image_url, DEFAULT_IMAGE_URL);

    let resp = test::call_service(&app, get(&format!("/users/{}", users[0].id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let file_name = DEFAULT_IMAGE_URL.rsplit('/').next().unwrap();
    assert!(body_text(resp).await.contains(file_name));
}

#[actix_web::test]
async fn incomplete_user_is_rejected() {
    let state = test_state().await;
    let app = init_app!(state);

    let req = form_post("/users/new", &[("last_name", "Doe")]);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp).await.contains("first_name is required"));

    let req = form_post("/users/new", &[("first_name", "  "), ("last_name", "Doe")]);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(state.users.list_by_name().await.unwrap().is_empty());
}

#[actix_web::test]
async fn editing_user_overwrites_fields() {
    let state = test_state().await;
    let user = seed_user(&state, "John", "Doe").await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get(&format!("/users/{}/edit", user.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("value=\"John\""));

    let req = form_post(
        &format!("/users/{}/edit", user.id),
        &[
            ("first_name", "Johnny"),
            ("last_name", "Dough"),
            ("image_url", "https://example.com/me.png"),
        ],
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let stored: User = state.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.full_name(), "Johnny Dough");
    assert_eq!(stored.image_url, "https://example.com/me.png");
}

#[actix_web::test]
async fn missing_user_is_not_found() {
    let state = test_state().await;
    let app = init_app!(state);

    for req in [
        get("/users/999"),
        get("/users/999/edit"),
        form_post("/users/999/edit", &[("first_name", "A"), ("last_name", "B")]),
        form_post("/users/999/delete", &[] as &[(&str, &str)]),
        get("/users/not-a-number"),
    ] {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn deleting_user_removes_their_posts() {
    let state = test_state().await;
    let user = seed_user(&state, "Ronald", "McDonald").await;
    let post = seed_post(&state, &user, "Fries", &[]).await;
    let app = init_app!(state);

    let req = form_post(&format!("/users/{}/delete", user.id), &[] as &[(&str, &str)]);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, get(&format!("/users/{}", user.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, get(&format!("/posts/{}", post.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let gone: Option<Post> = state.posts.find_by_id(post.id).await.unwrap();
    assert!(gone.is_none());
}

#[actix_web::test]
async fn delete_requires_post() {
    let state = test_state().await;
    let user = seed_user(&state, "John", "Doe").await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get(&format!("/users/{}/delete", user.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let still_there: Option<User> = state.users.find_by_id(user.id).await.unwrap();
    assert!(still_there.is_some());
}

#[actix_web::test]
async fn health_reports_database() {
    let state = test_state().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
