use crate::domain::errors::{DomainError, DomainResult, MIN_GUILD_MEMBERS};
use crate::domain::player::Player;

/// A guild about to be founded, together with its founding members
///
/// # Invariants
/// - At least two founding members
/// - Every founding member is currently guildless
///
/// The member minimum is only checked here. Members leaving later are not
/// re-validated against it.
///
/// # Example
/// ```
/// use gamehive_api::domain::guild::NewGuild;
/// use gamehive_api::domain::player::Player;
///
/// let members = vec![
///     Player::from_persistence(1, "Jack".into(), "jack@example.com".into(), 0, None),
///     Player::from_persistence(2, "Mike".into(), "mike@example.com".into(), 0, None),
/// ];
/// let guild = NewGuild::new("Red", &members, None).expect("valid guild");
/// assert_eq!(guild.member_ids(), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct NewGuild {
    name: String,
    country_code: Option<String>,
    member_ids: Vec<i32>,
}

impl NewGuild {
    /// Creates a guild from its founding members
    ///
    /// # Returns
    /// * `Ok(NewGuild)` - With the member ids in the order given
    /// * `Err(DomainError::GuildTooSmall)` - Fewer than two guildless members
    pub fn new(
        name: impl Into<String>,
        members: &[Player],
        country_code: Option<String>,
    ) -> DomainResult<Self> {
        let mut member_ids: Vec<i32> = Vec::with_capacity(members.len());
        for member in members.iter().filter(|m| m.is_guildless()) {
            if !member_ids.contains(&member.id()) {
                member_ids.push(member.id());
            }
        }

        if member_ids.len() < MIN_GUILD_MEMBERS {
            return Err(DomainError::GuildTooSmall {
                members: member_ids.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            country_code,
            member_ids,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn member_ids(&self) -> &[i32] {
        &self.member_ids
    }
}

/// Guild entity
///
/// Members are not held here; they are the players whose `guild_id`
/// points at this guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    id: i32,
    name: String,
    country_code: Option<String>,
}

impl Guild {
    pub fn from_new(id: i32, guild: &NewGuild) -> Self {
        Self {
            id,
            name: guild.name.clone(),
            country_code: guild.country_code.clone(),
        }
    }

    pub fn from_persistence(id: i32, name: String, country_code: Option<String>) -> Self {
        Self {
            id,
            name,
            country_code,
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_country_code(&mut self, country_code: impl Into<String>) {
        self.country_code = Some(country_code.into());
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}
