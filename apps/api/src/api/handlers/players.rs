use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{MessageResponse, SUCCESS};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::item::Item;
use crate::domain::player::{NewPlayer, Player};

const DEFAULT_NICKNAME: &str = "Untitled Player";

/// Request body for creating a player
///
/// Missing fields fall back to defaults; an empty email fails validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlayerRequest {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub skill_points: Option<i32>,
}

/// Request body for a partial player update; absent and null fields are left alone
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlayerRequest {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub skill_points: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PlayerSummary {
    pub id: i32,
    pub nickname: String,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            nickname: player.nickname().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePlayerResponse {
    pub success: &'static str,
    pub player: PlayerSummary,
}

#[derive(Debug, Serialize)]
pub struct UpdatePlayerResponse {
    pub message: &'static str,
    pub player: PlayerSummary,
}

/// One entry of a player's inventory
#[derive(Debug, Serialize)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub skill_points: i32,
}

impl From<&Item> for InventoryItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            skill_points: item.skill_points(),
        }
    }
}

/// Full player representation
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i32,
    pub nickname: String,
    pub email: String,
    pub skill_points: i32,
    /// Name of the player's guild
    pub guild: Option<String>,
    pub inventory: Vec<InventoryItem>,
}

impl PlayerResponse {
    fn new(player: &Player, guild: Option<String>, inventory: &[Item]) -> Self {
        Self {
            id: player.id(),
            nickname: player.nickname().to_string(),
            email: player.email().to_string(),
            skill_points: player.skill_points(),
            guild,
            inventory: inventory.iter().map(InventoryItem::from).collect(),
        }
    }
}

/// Create a new player
///
/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<CreatePlayerResponse>), ApiError> {
    let draft = NewPlayer::new(
        req.nickname.unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
        req.email.unwrap_or_default(),
        req.skill_points.unwrap_or(0),
    )?;

    let player = state.players.create(&draft).await?;
    tracing::info!(player_id = player.id(), "Player created");

    Ok((
        StatusCode::CREATED,
        Json(CreatePlayerResponse {
            success: SUCCESS,
            player: PlayerSummary::from(&player),
        }),
    ))
}

/// List every player with guild name and inventory
///
/// GET /players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state.players.find_all().await?;

    let guild_names: HashMap<i32, String> = state
        .guilds
        .find_all()
        .await?
        .into_iter()
        .map(|g| (g.id(), g.name().to_string()))
        .collect();

    let mut inventories: HashMap<i32, Vec<Item>> = HashMap::new();
    for item in state.items.find_all().await? {
        if let Some(owner) = item.player_id() {
            inventories.entry(owner).or_default().push(item);
        }
    }

    let responses = players
        .iter()
        .map(|p| {
            let guild = p.guild_id().and_then(|id| guild_names.get(&id).cloned());
            let inventory = inventories.get(&p.id()).map(Vec::as_slice).unwrap_or(&[]);
            PlayerResponse::new(p, guild, inventory)
        })
        .collect();

    Ok(Json(responses))
}

/// Get a player by ID
///
/// GET /players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = find_player(&state, id).await?;

    let guild = match player.guild_id() {
        Some(guild_id) => state
            .guilds
            .find_by_id(guild_id)
            .await?
            .map(|g| g.name().to_string()),
        None => None,
    };
    let inventory = state.items.find_by_player(id).await?;

    Ok(Json(PlayerResponse::new(&player, guild, &inventory)))
}

/// Partially update a player
///
/// PUT /players/:id
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<UpdatePlayerResponse>, ApiError> {
    let mut player = find_player(&state, id).await?;

    if let Some(nickname) = req.nickname {
        player.set_nickname(nickname)?;
    }
    if let Some(email) = req.email {
        player.set_email(email)?;
    }
    if let Some(skill_points) = req.skill_points {
        player.set_skill_points(skill_points);
    }

    state.players.update(&player).await?;

    Ok(Json(UpdatePlayerResponse {
        message: "success",
        player: PlayerSummary::from(&player),
    }))
}

/// Delete a player and its inventory
///
/// DELETE /players/:id
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.players.delete(id).await?;
    tracing::info!(player_id = id, "Player deleted");

    Ok(Json(MessageResponse::new(format!(
        "Player {} deleted successfully",
        id
    ))))
}

pub(crate) async fn find_player(state: &AppState, id: i32) -> Result<Player, ApiError> {
    state
        .players
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Player not found"))
}
