//! End-to-end API integration tests
//!
//! These tests drive the complete router (routing, JSON extraction, handlers,
//! error mapping) over the in-memory store:
//! - Player, guild and item CRUD flows
//! - Validation failures surfaced as 500 with their message
//! - Inventory cascade and guild release on delete

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use gamehive_api::api::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Setup test application backed by a fresh in-memory store
fn setup_app() -> Router {
    build_router(AppState::in_memory())
}

/// Send a request and return the status with the decoded JSON body
/// (`Value::Null` when the body is not JSON)
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// Create a player and return its id
async fn create_player(app: &Router, nickname: &str, email: &str) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/players",
        Some(json!({ "nickname": nickname, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["player"]["id"].as_i64().unwrap()
}

/// Create Jack, Mike and Alice (ids 1, 2, 3)
async fn create_roster(app: &Router) {
    create_player(app, "Jack", "jack@example.com").await;
    create_player(app, "Mike", "mike@example.com").await;
    create_player(app, "Alice", "alice@example.com").await;
}

#[tokio::test]
async fn test_root_liveness() {
    let app = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Game Hive Player API");
}

#[tokio::test]
async fn test_player_creation() {
    let app = setup_app();

    let (status, json) = send(
        &app,
        "POST",
        "/players",
        Some(json!({ "nickname": "Jack", "email": "Jack@Example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], "true");
    assert_eq!(json["player"]["id"], 1);
    assert_eq!(json["player"]["nickname"], "Jack");
}

#[tokio::test]
async fn test_get_player_by_id() {
    let app = setup_app();
    let id = create_player(&app, "Jack", "JACK@example.com").await;

    let (status, json) = send(&app, "GET", &format!("/players/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["nickname"], "Jack");
    assert_eq!(json["email"], "jack@example.com");
    assert_eq!(json["skill_points"], 0);
    assert_eq!(json["guild"], Value::Null);
    assert_eq!(json["inventory"], json!([]));
}

#[tokio::test]
async fn test_player_creation_defaults() {
    let app = setup_app();

    let (status, json) = send(
        &app,
        "POST",
        "/players",
        Some(json!({ "email": "anon@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["player"]["nickname"], "Untitled Player");
}

#[tokio::test]
async fn test_player_creation_invalid_email_failure() {
    let app = setup_app();

    let (status, json) = send(
        &app,
        "POST",
        "/players",
        Some(json!({ "nickname": "Jack", "email": "jack.example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Email is not valid!");

    // Missing email defaults to "" and fails the same way
    let (status, _) = send(&app, "POST", "/players", Some(json!({ "nickname": "Jack" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, players) = send(&app, "GET", "/players", None).await;
    assert_eq!(players, json!([]));
}

#[tokio::test]
async fn test_get_missing_player_returns_404() {
    let app = setup_app();

    let (status, json) = send(&app, "GET", "/players/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Player not found");
}

#[tokio::test]
async fn test_update_player_info_by_id() {
    let app = setup_app();
    create_player(&app, "Jack", "jack@example.com").await;

    let (status, json) = send(
        &app,
        "PUT",
        "/players/1",
        Some(json!({ "nickname": "Albs", "email": "Albs@Example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "success");
    assert_eq!(json["player"]["nickname"], "Albs");

    let (_, json) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(json["nickname"], "Albs");
    assert_eq!(json["email"], "albs@example.com");
}

#[tokio::test]
async fn test_partial_update_keeps_omitted_fields() {
    let app = setup_app();
    create_player(&app, "Jack", "jack@example.com").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/players/1",
        Some(json!({ "nickname": "Jacky", "email": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(json["nickname"], "Jacky");
    assert_eq!(json["email"], "jack@example.com");
    assert_eq!(json["skill_points"], 0);

    send(&app, "PUT", "/players/1", Some(json!({ "skill_points": 12 }))).await;

    let (_, json) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(json["nickname"], "Jacky");
    assert_eq!(json["skill_points"], 12);
}

#[tokio::test]
async fn test_update_player_invalid_email_failure() {
    let app = setup_app();
    create_player(&app, "Jack", "jack@example.com").await;

    let (status, json) = send(
        &app,
        "PUT",
        "/players/1",
        Some(json!({ "nickname": "Albs", "email": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Email is not valid!");

    let (_, json) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(json["nickname"], "Jack");
    assert_eq!(json["email"], "jack@example.com");
}

#[tokio::test]
async fn test_update_missing_player_returns_404() {
    let app = setup_app();

    let (status, _) = send(&app, "PUT", "/players/5", Some(json!({ "nickname": "X" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_player_deletion() {
    let app = setup_app();
    create_player(&app, "Jack", "jack@example.com").await;

    let (status, json) = send(&app, "DELETE", "/players/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Player 1 deleted successfully");

    let (status, _) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/players/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_players_in_id_order() {
    let app = setup_app();
    create_roster(&app).await;

    let (status, json) = send(&app, "GET", "/players", None).await;

    assert_eq!(status, StatusCode::OK);
    let nicknames: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nickname"].as_str().unwrap())
        .collect();
    assert_eq!(nicknames, vec!["Jack", "Mike", "Alice"]);
}

#[tokio::test]
async fn test_guild_creation() {
    let app = setup_app();
    create_roster(&app).await;

    let (status, json) = send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Red", "members": [{ "id": 1 }, { "id": 3 }] })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], "true");
    assert_eq!(json["guild"]["name"], "Red");

    let (status, json) = send(&app, "GET", "/guilds", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["name"], "Red");
    assert_eq!(json[0]["members"], json!(["Jack", "Alice"]));

    let (_, json) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(json["guild"], "Red");

    let (_, json) = send(&app, "GET", "/players/2", None).await;
    assert_eq!(json["guild"], Value::Null);
}

#[tokio::test]
async fn test_guild_creation_single_member_failure() {
    let app = setup_app();
    create_roster(&app).await;

    let (status, json) = send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Red", "members": [{ "id": 1 }] })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["message"].as_str().unwrap().contains("lonely"));

    let (_, json) = send(&app, "GET", "/guilds", None).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_guild_creation_without_members_failure() {
    let app = setup_app();

    let (status, json) = send(&app, "POST", "/guilds", Some(json!({ "name": "Red" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["message"].as_str().unwrap().contains("lonely"));
}

#[tokio::test]
async fn test_guild_creation_drops_guilded_and_unknown_members() {
    let app = setup_app();
    create_roster(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Red", "members": [{ "id": 1 }, { "id": 2 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Jack is taken and 42 does not exist, leaving only Alice
    let (status, json) = send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Blue", "members": [{ "id": 1 }, { "id": 3 }, { "id": 42 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["message"].as_str().unwrap().contains("lonely"));

    create_player(&app, "Bob", "bob@example.com").await;

    // Jack is silently dropped; Alice and Bob found the guild
    let (status, _) = send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Blue", "members": [{ "id": 1 }, { "id": 3 }, { "id": 4 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, json) = send(&app, "GET", "/guilds/2", None).await;
    assert_eq!(json["members"], json!(["Alice", "Bob"]));

    let (_, json) = send(&app, "GET", "/players/1", None).await;
    assert_eq!(json["guild"], "Red");
}

#[tokio::test]
async fn test_get_and_update_guild() {
    let app = setup_app();
    create_roster(&app).await;
    send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Red", "country_code": "PT", "members": [{ "id": 1 }, { "id": 2 }] })),
    )
    .await;

    let (status, json) = send(&app, "GET", "/guilds/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Red");
    assert_eq!(json["country_code"], "PT");
    assert_eq!(json["members"], json!(["Jack", "Mike"]));

    let (status, json) = send(&app, "PUT", "/guilds/1", Some(json!({ "name": "Crimson" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Crimson");
    assert_eq!(json["country_code"], "PT");

    let (status, json) = send(&app, "GET", "/guilds/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Guild not found");
}

#[tokio::test]
async fn test_delete_guild_keeps_members() {
    let app = setup_app();
    create_roster(&app).await;
    send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Red", "members": [{ "id": 1 }, { "id": 3 }] })),
    )
    .await;

    let (status, json) = send(&app, "DELETE", "/guilds/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Guild 1 deleted successfully");

    let (status, _) = send(&app, "GET", "/guilds/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, players) = send(&app, "GET", "/players", None).await;
    let players = players.as_array().unwrap();
    assert_eq!(players.len(), 3);
    assert!(players.iter().all(|p| p["guild"].is_null()));

    // Former members can found a new guild
    let (status, _) = send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Blue", "members": [{ "id": 1 }, { "id": 3 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_remove_guild_member() {
    let app = setup_app();
    create_roster(&app).await;
    send(
        &app,
        "POST",
        "/guilds",
        Some(json!({ "name": "Red", "members": [{ "id": 1 }, { "id": 3 }] })),
    )
    .await;

    let (status, json) = send(&app, "DELETE", "/guilds/1/members/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Player 3 removed from guild 1");

    // The guild may drop below two members after creation
    let (_, json) = send(&app, "GET", "/guilds/1", None).await;
    assert_eq!(json["members"], json!(["Jack"]));

    let (_, json) = send(&app, "GET", "/players/3", None).await;
    assert_eq!(json["guild"], Value::Null);

    let (status, _) = send(&app, "DELETE", "/guilds/1/members/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/guilds/9/members/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_crud() {
    let app = setup_app();

    let (status, json) = send(
        &app,
        "POST",
        "/items",
        Some(json!({ "name": "Sword", "skill_points": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], "true");
    assert_eq!(json["item"], json!({ "id": 1, "name": "Sword" }));

    let (status, json) = send(&app, "POST", "/items", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["item"]["name"], "Untitled Item");

    let (_, json) = send(&app, "GET", "/items", None).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["skill_points"], 0);

    let (status, json) = send(&app, "PUT", "/items/1", Some(json!({ "skill_points": 8 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Sword");
    assert_eq!(json["skill_points"], 8);

    let (status, json) = send(&app, "DELETE", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Item 1 deleted successfully");

    let (status, json) = send(&app, "GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Item not found");
}

#[tokio::test]
async fn test_item_owner_must_exist() {
    let app = setup_app();

    let (status, json) = send(
        &app,
        "POST",
        "/items",
        Some(json!({ "name": "Orb", "player_id": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Player not found");
}

#[tokio::test]
async fn test_delete_player_cascades_inventory() {
    let app = setup_app();
    let jack = create_player(&app, "Jack", "jack@example.com").await;
    let mike = create_player(&app, "Mike", "mike@example.com").await;

    send(
        &app,
        "POST",
        "/items",
        Some(json!({ "name": "Sword", "skill_points": 5, "player_id": jack })),
    )
    .await;
    send(&app, "POST", "/items", Some(json!({ "name": "Bow" }))).await;
    send(&app, "PUT", "/items/2", Some(json!({ "player_id": mike }))).await;

    let (_, json) = send(&app, "GET", &format!("/players/{}", jack), None).await;
    assert_eq!(
        json["inventory"],
        json!([{ "id": 1, "name": "Sword", "skill_points": 5 }])
    );

    let (status, _) = send(&app, "DELETE", &format!("/players/{}", jack), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(&app, "GET", "/items/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["player_id"], mike);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/players")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
