//! End-to-end tests for the bookshelf HTTP surface
//!
//! Each test builds a fresh router around injected stores and drives it with
//! `tower::ServiceExt::oneshot`, the whole request/response cycle in memory.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use bookshelf_core::{Book, BookCatalog, UserDirectory};
use bookshelf_web::{create_app, AppState, WebConfig};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn seeded_app() -> Router {
    create_app(AppState::new(WebConfig::default()))
}

fn single_book_app() -> Router {
    let catalog = BookCatalog::from_books(vec![Book::new("1", "A", "T")]);
    create_app(AppState::with_stores(
        WebConfig::default(),
        catalog,
        UserDirectory::new(),
    ))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let _ = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "username": username, "password": password }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({ "username": username, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn full_review_scenario() {
    let app = single_book_app();

    // register + login as bob
    let register = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "username": "bob", "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);

    let login_response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({ "username": "bob", "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(login_response.status(), StatusCode::OK);

    let session = body_json(login_response).await;
    assert_eq!(session["username"], "bob");
    assert_eq!(session["expires_in"], 3600);
    let token = session["token"].as_str().unwrap().to_string();

    // write a review as bob
    let put = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/1?review=great", &token))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let reviews = app.clone().oneshot(get("/review/1")).await.unwrap();
    assert_eq!(body_json(reviews).await, json!({ "bob": "great" }));

    // delete it again
    let delete = app
        .clone()
        .oneshot(authed("DELETE", "/auth/review/1", &token))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::OK);

    let reviews = app.clone().oneshot(get("/review/1")).await.unwrap();
    assert_eq!(body_json(reviews).await, json!({}));

    // unknown book is a 404
    let missing = app.clone().oneshot(get("/isbn/2")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_listing_keeps_seed_order() {
    let app = seeded_app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let catalog = body_json(response).await;
    let keys: Vec<&String> = catalog.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    assert_eq!(catalog["1"]["author"], "Chinua Achebe");
}

#[tokio::test]
async fn isbn_lookup_returns_the_book() {
    let app = seeded_app();

    let response = app.oneshot(get("/isbn/8")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let book = body_json(response).await;
    assert_eq!(book["author"], "Jane Austen");
    assert_eq!(book["title"], "Pride and Prejudice");
}

#[tokio::test]
async fn author_and_title_queries_are_exact() {
    let app = seeded_app();

    let by_author = app.clone().oneshot(get("/author/Unknown")).await.unwrap();
    assert_eq!(by_author.status(), StatusCode::OK);
    let matches = body_json(by_author).await;
    let keys: Vec<&String> = matches.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["4", "5", "6", "7"]);

    // case matters
    let wrong_case = app.clone().oneshot(get("/author/unknown")).await.unwrap();
    assert_eq!(wrong_case.status(), StatusCode::NOT_FOUND);

    let by_title = app
        .clone()
        .oneshot(get("/title/Fairy%20tales"))
        .await
        .unwrap();
    assert_eq!(by_title.status(), StatusCode::OK);
    let matches = body_json(by_title).await;
    assert!(matches.as_object().unwrap().contains_key("2"));

    let no_title = app.clone().oneshot(get("/title/Nothing")).await.unwrap();
    assert_eq!(no_title.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_writes_require_a_session() {
    let app = single_book_app();

    let no_token = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/auth/review/1?review=great")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);

    let bad_token = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/1?review=great", "garbage"))
        .await
        .unwrap();
    assert_eq!(bad_token.status(), StatusCode::UNAUTHORIZED);

    // the failed writes left no review behind
    let reviews = app.clone().oneshot(get("/review/1")).await.unwrap();
    assert_eq!(body_json(reviews).await, json!({}));
}

#[tokio::test]
async fn review_write_validations() {
    let app = single_book_app();
    let token = login(&app, "bob", "pw").await;

    // missing review text
    let empty = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/1", &token))
        .await
        .unwrap();
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

    // unknown book
    let missing_book = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/2?review=great", &token))
        .await
        .unwrap();
    assert_eq!(missing_book.status(), StatusCode::NOT_FOUND);

    // deleting a review that was never written
    let missing_review = app
        .clone()
        .oneshot(authed("DELETE", "/auth/review/1", &token))
        .await
        .unwrap();
    assert_eq!(missing_review.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rewriting_a_review_overwrites_it() {
    let app = single_book_app();
    let token = login(&app, "bob", "pw").await;

    for text in ["good", "better"] {
        let uri = format!("/auth/review/1?review={}", text);
        let response = app
            .clone()
            .oneshot(authed("PUT", &uri, &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let reviews = app.clone().oneshot(get("/review/1")).await.unwrap();
    assert_eq!(body_json(reviews).await, json!({ "bob": "better" }));
}

#[tokio::test]
async fn reviews_from_two_users_coexist() {
    let app = single_book_app();
    let bob = login(&app, "bob", "pw").await;
    let alice = login(&app, "alice", "pw").await;

    let _ = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/1?review=great", &bob))
        .await
        .unwrap();
    let _ = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/1?review=meh", &alice))
        .await
        .unwrap();

    // alice's delete removes only her own entry
    let delete = app
        .clone()
        .oneshot(authed("DELETE", "/auth/review/1", &alice))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::OK);

    let reviews = app.clone().oneshot(get("/review/1")).await.unwrap();
    assert_eq!(body_json(reviews).await, json!({ "bob": "great" }));
}

#[tokio::test]
async fn login_failures() {
    let app = seeded_app();

    let missing = app
        .clone()
        .oneshot(post_json("/login", json!({ "username": "", "password": "" })))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let unknown = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({ "username": "nobody", "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_tokens_are_rejected() {
    use bookshelf_web::auth::jwt::{Claims, JwtService};

    let app = single_book_app();

    let expired = Claims {
        sub: "bob".to_string(),
        iat: chrono::Utc::now().timestamp() - 7200,
        exp: chrono::Utc::now().timestamp() - 3600,
    };
    let token = JwtService::sign(&expired).unwrap();

    let response = app
        .clone()
        .oneshot(authed("PUT", "/auth/review/1?review=great", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let reviews = app.clone().oneshot(get("/review/1")).await.unwrap();
    assert_eq!(body_json(reviews).await, json!({}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = seeded_app();

    let response = app.oneshot(get("/api/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert_eq!(doc["info"]["title"], "Bookshelf API");
}
