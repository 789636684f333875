use super::value_objects::{Email, Nickname};
use crate::domain::errors::DomainResult;

/// A validated player that has not been stored yet
///
/// # Example
/// ```
/// use gamehive_api::domain::player::NewPlayer;
///
/// let player = NewPlayer::new("Jack", "JACK@example.com", 0).expect("valid player");
/// assert_eq!(player.email().as_str(), "jack@example.com");
/// ```
#[derive(Debug, Clone)]
pub struct NewPlayer {
    nickname: Nickname,
    email: Email,
    skill_points: i32,
}

impl NewPlayer {
    /// Validates the nickname and email of a player about to be registered
    ///
    /// # Returns
    /// * `Ok(NewPlayer)` - Ready to hand to a `PlayerRepository`
    /// * `Err(DomainError)` - Invalid email or oversized field
    pub fn new(
        nickname: impl Into<String>,
        email: impl Into<String>,
        skill_points: i32,
    ) -> DomainResult<Self> {
        Ok(Self {
            nickname: Nickname::new(nickname)?,
            email: Email::new(email)?,
            skill_points,
        })
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn skill_points(&self) -> i32 {
        self.skill_points
    }
}

/// Player entity
///
/// # Invariants
/// - Email contains '@' and is lower case
/// - Belongs to at most one guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: i32,
    nickname: Nickname,
    email: Email,
    skill_points: i32,
    guild_id: Option<i32>,
}

impl Player {
    /// Assigns the store-generated id to a freshly inserted player
    pub fn from_new(id: i32, player: NewPlayer) -> Self {
        Self {
            id,
            nickname: player.nickname,
            email: player.email,
            skill_points: player.skill_points,
            guild_id: None,
        }
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Bypasses validation; the row was validated before it was written.
    pub fn from_persistence(
        id: i32,
        nickname: String,
        email: String,
        skill_points: i32,
        guild_id: Option<i32>,
    ) -> Self {
        Self {
            id,
            nickname: Nickname::from_persistence(nickname),
            email: Email::from_persistence(email),
            skill_points,
            guild_id,
        }
    }

    // ===== Mutators =====

    pub fn set_nickname(&mut self, nickname: impl Into<String>) -> DomainResult<()> {
        self.nickname = Nickname::new(nickname)?;
        Ok(())
    }

    /// Replaces the email, applying the same validation as registration
    pub fn set_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        self.email = Email::new(email)?;
        Ok(())
    }

    pub fn set_skill_points(&mut self, skill_points: i32) {
        self.skill_points = skill_points;
    }

    pub fn join_guild(&mut self, guild_id: i32) {
        self.guild_id = Some(guild_id);
    }

    pub fn leave_guild(&mut self) {
        self.guild_id = None;
    }

    // ===== Getters =====

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn skill_points(&self) -> i32 {
        self.skill_points
    }

    pub fn guild_id(&self) -> Option<i32> {
        self.guild_id
    }

    /// True when the player can be recruited into a new guild
    pub fn is_guildless(&self) -> bool {
        self.guild_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn jack() -> Player {
        Player::from_new(1, NewPlayer::new("Jack", "jack@example.com", 0).unwrap())
    }

    #[test]
    fn new_player_normalises_email() {
        let player = NewPlayer::new("Jack", "Jack@Example.COM", 3).unwrap();

        assert_eq!(player.nickname().as_str(), "Jack");
        assert_eq!(player.email().as_str(), "jack@example.com");
        assert_eq!(player.skill_points(), 3);
    }

    #[test]
    fn new_player_rejects_email_without_at() {
        let result = NewPlayer::new("Jack", "jack.example.com", 0);
        assert_eq!(result.unwrap_err(), DomainError::InvalidEmail);
    }

    #[test]
    fn stored_player_starts_without_guild() {
        let player = jack();

        assert_eq!(player.id(), 1);
        assert!(player.is_guildless());
    }

    #[test]
    fn set_email_validates_and_lower_cases() {
        let mut player = jack();

        assert!(player.set_email("nope").is_err());
        assert_eq!(player.email(), "jack@example.com");

        player.set_email("Albs@Example.com").unwrap();
        assert_eq!(player.email(), "albs@example.com");
    }

    #[test]
    fn guild_membership_round_trip() {
        let mut player = jack();

        player.join_guild(7);
        assert_eq!(player.guild_id(), Some(7));
        assert!(!player.is_guildless());

        player.leave_guild();
        assert!(player.is_guildless());
    }
}
