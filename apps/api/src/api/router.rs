use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{guilds, items, players, root};
use super::state::AppState;

/// Builds the application router with tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root::root))
        // Players
        .route(
            "/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/players/:id",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        // Guilds
        .route("/guilds", get(guilds::list_guilds).post(guilds::create_guild))
        .route(
            "/guilds/:id",
            get(guilds::get_guild)
                .put(guilds::update_guild)
                .delete(guilds::delete_guild),
        )
        .route(
            "/guilds/:id/members/:player_id",
            delete(guilds::remove_member),
        )
        // Items
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
