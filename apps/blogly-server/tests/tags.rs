#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use blogly_core::domain::Tag;
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository};
use common::{body_text, form_post, get, location, seed_post, seed_tag, seed_user, test_state};

#[actix_web::test]
async fn created_tags_are_listed_by_name() {
    let state = test_state().await;
    let user = seed_user(&state, "John", "Doe").await;
    let post = seed_post(&state, &user, "Weekly digest", &[]).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get("/tags/new").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Weekly digest"));

    let post_id = post.id.to_string();
    for name in ["zebra", "news"] {
        let req = form_post("/tags/new", &[("name", name), ("posts", post_id.as_str())]);
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/tags");
    }

    let body = body_text(test::call_service(&app, get("/tags").to_request()).await).await;
    let news = body.find("news").expect("news listed");
    let zebra = body.find("zebra").expect("zebra listed");
    assert!(news < zebra);

    let names: Vec<String> = state
        .tags
        .find_by_post_id(post.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["news", "zebra"]);
}

#[actix_web::test]
async fn duplicate_tag_name_conflicts() {
    let state = test_state().await;
    seed_tag(&state, "rust").await;
    let app = init_app!(state);

    let resp = test::call_service(&app, form_post("/tags/new", &[("name", "rust")]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let all: Vec<Tag> = state.tags.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[actix_web::test]
async fn blank_tag_name_is_rejected() {
    let state = test_state().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, form_post("/tags/new", &[("name", "   ")]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(state.tags.list_by_name().await.unwrap().is_empty());
}

#[actix_web::test]
async fn tag_page_lists_its_posts() {
    let state = test_state().await;
    let user = seed_user(&state, "John", "Doe").await;
    let tag = seed_tag(&state, "news").await;
    seed_post(&state, &user, "Tagged post", &[tag.id]).await;
    seed_post(&state, &user, "Untagged post", &[]).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get(&format!("/tags/{}", tag.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Tagged post"));
    assert!(!body.contains("Untagged post"));
}

#[actix_web::test]
async fn editing_tag_renames_and_replaces_posts() {
    let state = test_state().await;
    let user = seed_user(&state, "John", "Doe").await;
    let tag = seed_tag(&state, "news").await;
    let one = seed_post(&state, &user, "One", &[tag.id]).await;
    let two = seed_post(&state, &user, "Two", &[]).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get(&format!("/tags/{}/edit", tag.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(&format!("value=\"{}\" checked", one.id)));

    let two_id = two.id.to_string();
    let req = form_post(
        &format!("/tags/{}/edit", tag.id),
        &[("name", "headlines"), ("posts", two_id.as_str())],
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/tags");

    let stored: Tag = state.tags.find_by_id(tag.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "headlines");
    let tagged: Vec<i32> = state
        .posts
        .find_by_tag_id(tag.id)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(tagged, vec![two.id]);
}

#[actix_web::test]
async fn renaming_onto_another_tag_conflicts() {
    let state = test_state().await;
    seed_tag(&state, "rust").await;
    let other = seed_tag(&state, "go").await;
    let app = init_app!(state);

    let req = form_post(&format!("/tags/{}/edit", other.id), &[("name", "rust")]);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let stored: Tag = state.tags.find_by_id(other.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "go");
}

#[actix_web::test]
async fn deleting_tag_keeps_its_posts() {
    let state = test_state().await;
    let user = seed_user(&state, "John", "Doe").await;
    let tag = seed_tag(&state, "news").await;
    let post = seed_post(&state, &user, "Still here", &[tag.id]).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, get(&format!("/tags/{}/delete", tag.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = form_post(&format!("/tags/{}/delete", tag.id), &[] as &[(&str, &str)]);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/tags");

    let resp = test::call_service(&app, get(&format!("/tags/{}", tag.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, get(&format!("/posts/{}", post.id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(state.tags.find_by_post_id(post.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn missing_tag_is_not_found() {
    let state = test_state().await;
    let app = init_app!(state);

    for req in [
        get("/tags/3"),
        get("/tags/3/edit"),
        form_post("/tags/3/edit", &[("name", "x")]),
        form_post("/tags/3/delete", &[] as &[(&str, &str)]),
    ] {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
