use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::players::find_player;
use super::{MessageResponse, SUCCESS};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::guild::{Guild, NewGuild};

const DEFAULT_GUILD_NAME: &str = "Untitled Guild";

/// Reference to an existing player in a guild creation request
#[derive(Debug, Deserialize)]
pub struct MemberRef {
    pub id: i32,
}

/// Request body for creating a guild
#[derive(Debug, Default, Deserialize)]
pub struct CreateGuildRequest {
    pub name: Option<String>,
    pub country_code: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberRef>,
}

/// Request body for a partial guild update
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGuildRequest {
    pub name: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GuildSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateGuildResponse {
    pub success: &'static str,
    pub guild: GuildSummary,
}

/// Guild fields without the member list
#[derive(Debug, Serialize)]
pub struct GuildDetails {
    pub id: i32,
    pub name: String,
    pub country_code: Option<String>,
}

impl From<&Guild> for GuildDetails {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id(),
            name: guild.name().to_string(),
            country_code: guild.country_code().map(str::to_string),
        }
    }
}

/// Full guild representation
#[derive(Debug, Serialize)]
pub struct GuildResponse {
    pub id: i32,
    pub name: String,
    pub country_code: Option<String>,
    /// Member nicknames, ordered by player id
    pub members: Vec<String>,
}

impl GuildResponse {
    fn new(guild: &Guild, members: Vec<String>) -> Self {
        Self {
            id: guild.id(),
            name: guild.name().to_string(),
            country_code: guild.country_code().map(str::to_string),
            members,
        }
    }
}

/// Create a new guild
///
/// POST /guilds
///
/// Only players that exist and are not in a guild yet are enlisted; other ids
/// are dropped before the member minimum is checked.
pub async fn create_guild(
    State(state): State<AppState>,
    Json(req): Json<CreateGuildRequest>,
) -> Result<(StatusCode, Json<CreateGuildResponse>), ApiError> {
    let requested: Vec<i32> = req.members.iter().map(|m| m.id).collect();
    let candidates = state.players.find_by_ids(&requested).await?;

    let eligible: Vec<_> = candidates.into_iter().filter(|p| p.is_guildless()).collect();
    if eligible.len() < requested.len() {
        tracing::warn!(
            requested = requested.len(),
            eligible = eligible.len(),
            "Dropping unknown or already guilded members"
        );
    }

    let draft = NewGuild::new(
        req.name.unwrap_or_else(|| DEFAULT_GUILD_NAME.to_string()),
        &eligible,
        req.country_code,
    )?;

    let guild = state.guilds.create(&draft).await?;
    tracing::info!(guild_id = guild.id(), members = draft.member_ids().len(), "Guild created");

    Ok((
        StatusCode::CREATED,
        Json(CreateGuildResponse {
            success: SUCCESS,
            guild: GuildSummary {
                id: guild.id(),
                name: guild.name().to_string(),
            },
        }),
    ))
}

/// List every guild with its member nicknames
///
/// GET /guilds
pub async fn list_guilds(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuildResponse>>, ApiError> {
    let guilds = state.guilds.find_all().await?;

    let mut members: HashMap<i32, Vec<String>> = HashMap::new();
    for player in state.players.find_all().await? {
        if let Some(guild_id) = player.guild_id() {
            members
                .entry(guild_id)
                .or_default()
                .push(player.nickname().to_string());
        }
    }

    let responses = guilds
        .iter()
        .map(|g| GuildResponse::new(g, members.remove(&g.id()).unwrap_or_default()))
        .collect();

    Ok(Json(responses))
}

/// Get a guild by ID
///
/// GET /guilds/:id
pub async fn get_guild(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GuildResponse>, ApiError> {
    let guild = find_guild(&state, id).await?;
    let members = state
        .players
        .find_by_guild(id)
        .await?
        .iter()
        .map(|p| p.nickname().to_string())
        .collect();

    Ok(Json(GuildResponse::new(&guild, members)))
}

/// Partially update a guild
///
/// PUT /guilds/:id
pub async fn update_guild(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateGuildRequest>,
) -> Result<Json<GuildDetails>, ApiError> {
    let mut guild = find_guild(&state, id).await?;

    if let Some(name) = req.name {
        guild.rename(name);
    }
    if let Some(country_code) = req.country_code {
        guild.set_country_code(country_code);
    }

    state.guilds.update(&guild).await?;

    Ok(Json(GuildDetails::from(&guild)))
}

/// Delete a guild; its members stay, without a guild
///
/// DELETE /guilds/:id
pub async fn delete_guild(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.guilds.delete(id).await?;
    tracing::info!(guild_id = id, "Guild deleted");

    Ok(Json(MessageResponse::new(format!(
        "Guild {} deleted successfully",
        id
    ))))
}

/// Remove a single member from a guild
///
/// DELETE /guilds/:id/members/:player_id
///
/// The member minimum is not re-checked; a guild may shrink below two.
pub async fn remove_member(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ApiError> {
    find_guild(&state, id).await?;

    let player = find_player(&state, player_id).await?;
    if player.guild_id() != Some(id) {
        return Err(ApiError::not_found("Player is not a member of this guild"));
    }

    state.players.leave_guild(player_id, id).await?;
    tracing::info!(guild_id = id, player_id, "Member removed from guild");

    Ok(Json(MessageResponse::new(format!(
        "Player {} removed from guild {}",
        player_id, id
    ))))
}

async fn find_guild(state: &AppState, id: i32) -> Result<Guild, ApiError> {
    state
        .guilds
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Guild not found"))
}
