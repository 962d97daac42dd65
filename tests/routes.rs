//! Router tests that never reach the database: the pool points at a closed
//! port, so any handler that queried it would fail with a 500.

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use cinema_admin::{app, config::Config, database::Database, AppState};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://nobody@127.0.0.1:1/unreachable".to_string()),
        "DB_ACQUIRE_TIMEOUT_SECS" => Some("1".to_string()),
        _ => None,
    })
    .expect("test config");
    let db = Database::connect_lazy(&config.database).expect("lazy pool");
    app(AppState::with_database(db, config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn static_pages_render() {
    let app = test_app();

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Film-Ticket Reservation System"));

    let (status, body) = send(&app, get("/admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/admin/tickets"));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn showtime_edit_rejects_malformed_date() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_form("/admin/edit_showtime/1", &[("showdate", "2025/01/01"), ("starttime", "20:00")]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid input"));
    assert!(body.contains("ShowDate must be in YYYY-MM-DD format."));
    assert!(body.contains(r#"href="/admin/showtimes""#));
}

#[tokio::test]
async fn showtime_edit_rejects_malformed_time() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_form("/admin/edit_showtime/1", &[("showdate", "2025-01-01"), ("starttime", "8pm")]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("StartTime must be in HH:MM format."));
}

#[tokio::test]
async fn showtime_edit_with_missing_fields_is_invalid() {
    let app = test_app();
    let (status, _) = send(&app, post_form("/admin/edit_showtime/1", &[])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_path_ids_are_rejected() {
    let app = test_app();
    let cases = [
        (get("/admin/edit_showtime/abc"), "Showtime ID must be numeric.", "/admin/showtimes"),
        (
            post_form("/admin/edit_showtime/abc", &[("showdate", "2025-03-01"), ("starttime", "19:00")]),
            "Showtime ID must be numeric.",
            "/admin/showtimes",
        ),
        (get("/admin/edit_ticket/1x"), "Ticket ID must be numeric.", "/admin/tickets"),
        (post_form("/admin/edit_ticket/-1", &[("price", "120")]), "Ticket ID must be numeric.", "/admin/tickets"),
        (post_form("/admin/delete_ticket/abc", &[]), "Ticket ID must be numeric.", "/admin/tickets"),
    ];
    for (request, message, back) in cases {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{message}");
        assert!(body.contains(message), "{body}");
        assert!(body.contains(&format!(r#"href="{back}""#)), "{body}");
    }
}

#[tokio::test]
async fn ticket_price_edit_rejects_bad_price() {
    let app = test_app();
    for price in ["abc", "-5", "12.345", ""] {
        let (status, body) = send(&app, post_form("/admin/edit_ticket/1", &[("price", price)])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price:?}");
        assert!(body.contains("Price must be numeric (e.g., 120 or 120.00)."));
    }
}

#[tokio::test]
async fn purchase_requires_every_selection() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_form(
            "/buy_ticket",
            &[("customer_id", "1"), ("showtime_id", "10"), ("seat_id", ""), ("price", "120")],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Customer, showtime, and seat must be selected."));
    assert!(body.contains(r#"href="/buy_ticket""#));
}

#[tokio::test]
async fn purchase_rejects_bad_price() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_form(
            "/buy_ticket",
            &[("customer_id", "1"), ("showtime_id", "10"), ("seat_id", "2"), ("price", "free")],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Price must be numeric"));
}

#[tokio::test]
async fn add_customer_rejects_non_digit_phone() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_form(
            "/add_customer",
            &[("name", "Ada"), ("surname", "Lovelace"), ("email", "ada@example.com"), ("phone", "abc123")],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid phone"));
    assert!(body.contains("Phone number must contain digits only (e.g., 5051234567)."));
}

#[tokio::test]
async fn remove_customer_rejects_non_numeric_id() {
    let app = test_app();
    let (status, body) = send(&app, post_form("/remove_customer", &[("customerid", "x1")])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Customer ID must be numeric."));
}

#[tokio::test]
async fn unreachable_database_is_reported_not_swallowed() {
    let app = test_app();
    let (status, body) = send(&app, get("/films")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Database Error"));
}
