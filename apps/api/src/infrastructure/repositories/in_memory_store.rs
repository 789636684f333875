use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::errors::{DomainError, MIN_GUILD_MEMBERS};
use crate::domain::guild::{Guild, NewGuild};
use crate::domain::item::{Item, NewItem};
use crate::domain::player::{NewPlayer, Player};
use crate::domain::repositories::{
    GuildRepository, ItemRepository, PlayerRepository, RepositoryError, RepositoryResult,
};

#[derive(Debug, Default)]
struct Tables {
    players: BTreeMap<i32, Player>,
    guilds: BTreeMap<i32, Guild>,
    items: BTreeMap<i32, Item>,
    last_player_id: i32,
    last_guild_id: i32,
    last_item_id: i32,
}

/// In-process store implementing every repository trait
///
/// Mirrors the PostgreSQL schema: serial ids starting at 1, rows ordered by id,
/// player deletes take the inventory with them and guild deletes release the
/// members. Each operation runs under one lock, so it is atomic like a
/// transaction. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn create(&self, player: &NewPlayer) -> RepositoryResult<Player> {
        let mut tables = self.tables();
        tables.last_player_id += 1;
        let stored = Player::from_new(tables.last_player_id, player.clone());
        tables.players.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Player>> {
        Ok(self.tables().players.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Player>> {
        Ok(self
            .tables()
            .players
            .values()
            .filter(|p| ids.contains(&p.id()))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        Ok(self.tables().players.values().cloned().collect())
    }

    async fn find_by_guild(&self, guild_id: i32) -> RepositoryResult<Vec<Player>> {
        Ok(self
            .tables()
            .players
            .values()
            .filter(|p| p.guild_id() == Some(guild_id))
            .cloned()
            .collect())
    }

    async fn update(&self, player: &Player) -> RepositoryResult<()> {
        let mut tables = self.tables();
        match tables.players.get_mut(&player.id()) {
            Some(stored) => {
                stored.set_nickname(player.nickname())?;
                stored.set_email(player.email())?;
                stored.set_skill_points(player.skill_points());
                Ok(())
            }
            None => Err(RepositoryError::player_not_found(player.id())),
        }
    }

    async fn leave_guild(&self, player_id: i32, guild_id: i32) -> RepositoryResult<()> {
        let mut tables = self.tables();
        match tables.players.get_mut(&player_id) {
            Some(stored) if stored.guild_id() == Some(guild_id) => {
                stored.leave_guild();
                Ok(())
            }
            _ => Err(RepositoryError::player_not_found(player_id)),
        }
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut tables = self.tables();
        if tables.players.remove(&id).is_none() {
            return Err(RepositoryError::player_not_found(id));
        }
        tables.items.retain(|_, item| item.player_id() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl GuildRepository for InMemoryStore {
    async fn create(&self, guild: &NewGuild) -> RepositoryResult<Guild> {
        let mut tables = self.tables();
        let enlisted: Vec<i32> = guild
            .member_ids()
            .iter()
            .copied()
            .filter(|id| tables.players.get(id).is_some_and(Player::is_guildless))
            .collect();
        if enlisted.len() < MIN_GUILD_MEMBERS {
            return Err(DomainError::GuildTooSmall {
                members: enlisted.len(),
            }
            .into());
        }

        tables.last_guild_id += 1;
        let stored = Guild::from_new(tables.last_guild_id, guild);
        for id in &enlisted {
            if let Some(player) = tables.players.get_mut(id) {
                player.join_guild(stored.id());
            }
        }

        tables.guilds.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Guild>> {
        Ok(self.tables().guilds.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Guild>> {
        Ok(self.tables().guilds.values().cloned().collect())
    }

    async fn update(&self, guild: &Guild) -> RepositoryResult<()> {
        let mut tables = self.tables();
        match tables.guilds.get_mut(&guild.id()) {
            Some(stored) => {
                *stored = guild.clone();
                Ok(())
            }
            None => Err(RepositoryError::guild_not_found(guild.id())),
        }
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut tables = self.tables();
        if tables.guilds.remove(&id).is_none() {
            return Err(RepositoryError::guild_not_found(id));
        }
        for player in tables.players.values_mut() {
            if player.guild_id() == Some(id) {
                player.leave_guild();
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn create(&self, item: &NewItem) -> RepositoryResult<Item> {
        let mut tables = self.tables();
        if let Some(owner) = item.player_id() {
            if !tables.players.contains_key(&owner) {
                return Err(RepositoryError::player_not_found(owner));
            }
        }
        tables.last_item_id += 1;
        let stored = Item::from_new(tables.last_item_id, item.clone());
        tables.items.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Item>> {
        Ok(self.tables().items.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Item>> {
        Ok(self.tables().items.values().cloned().collect())
    }

    async fn find_by_player(&self, player_id: i32) -> RepositoryResult<Vec<Item>> {
        Ok(self
            .tables()
            .items
            .values()
            .filter(|i| i.player_id() == Some(player_id))
            .cloned()
            .collect())
    }

    async fn update(&self, item: &Item) -> RepositoryResult<()> {
        let mut tables = self.tables();
        if let Some(owner) = item.player_id() {
            if !tables.players.contains_key(&owner) {
                return Err(RepositoryError::player_not_found(owner));
            }
        }
        match tables.items.get_mut(&item.id()) {
            Some(stored) => {
                *stored = item.clone();
                Ok(())
            }
            None => Err(RepositoryError::item_not_found(item.id())),
        }
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        match self.tables().items.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::item_not_found(id)),
        }
    }
}
