use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::players::find_player;
use super::{MessageResponse, SUCCESS};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::item::{Item, NewItem};

const DEFAULT_ITEM_NAME: &str = "Untitled Item";

/// Request body for creating an item, optionally straight into a player's inventory
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub skill_points: Option<i32>,
    pub player_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub skill_points: Option<i32>,
    pub player_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ItemSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateItemResponse {
    pub success: &'static str,
    pub item: ItemSummary,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub skill_points: i32,
    pub player_id: Option<i32>,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            skill_points: item.skill_points(),
            player_id: item.player_id(),
        }
    }
}

/// Create a new item
///
/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreateItemResponse>), ApiError> {
    if let Some(owner) = req.player_id {
        find_player(&state, owner).await?;
    }

    let draft = NewItem::new(
        req.name.unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
        req.skill_points.unwrap_or(0),
        req.player_id,
    );

    let item = state.items.create(&draft).await?;
    tracing::info!(item_id = item.id(), player_id = ?item.player_id(), "Item created");

    Ok((
        StatusCode::CREATED,
        Json(CreateItemResponse {
            success: SUCCESS,
            item: ItemSummary {
                id: item.id(),
                name: item.name().to_string(),
            },
        }),
    ))
}

/// List every item
///
/// GET /items
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.items.find_all().await?;

    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

/// Get an item by ID
///
/// GET /items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = find_item(&state, id).await?;

    Ok(Json(ItemResponse::from(&item)))
}

/// Partially update an item; `player_id` moves it to another inventory
///
/// PUT /items/:id
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let mut item = find_item(&state, id).await?;

    if let Some(name) = req.name {
        item.rename(name);
    }
    if let Some(skill_points) = req.skill_points {
        item.set_skill_points(skill_points);
    }
    if let Some(owner) = req.player_id {
        find_player(&state, owner).await?;
        item.give_to(owner);
    }

    state.items.update(&item).await?;

    Ok(Json(ItemResponse::from(&item)))
}

/// Delete an item
///
/// DELETE /items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.items.delete(id).await?;
    tracing::info!(item_id = id, "Item deleted");

    Ok(Json(MessageResponse::new(format!(
        "Item {} deleted successfully",
        id
    ))))
}

async fn find_item(state: &AppState, id: i32) -> Result<Item, ApiError> {
    state
        .items
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Item not found"))
}
