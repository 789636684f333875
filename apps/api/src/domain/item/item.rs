/// An item about to be stored, optionally already owned by a player
#[derive(Debug, Clone)]
pub struct NewItem {
    name: String,
    skill_points: i32,
    player_id: Option<i32>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, skill_points: i32, player_id: Option<i32>) -> Self {
        Self {
            name: name.into(),
            skill_points,
            player_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill_points(&self) -> i32 {
        self.skill_points
    }

    pub fn player_id(&self) -> Option<i32> {
        self.player_id
    }
}

/// Item entity
///
/// An item belongs to at most one player and is deleted together with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: i32,
    name: String,
    skill_points: i32,
    player_id: Option<i32>,
}

impl Item {
    pub fn from_new(id: i32, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            skill_points: item.skill_points,
            player_id: item.player_id,
        }
    }

    pub fn from_persistence(
        id: i32,
        name: String,
        skill_points: i32,
        player_id: Option<i32>,
    ) -> Self {
        Self {
            id,
            name,
            skill_points,
            player_id,
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_skill_points(&mut self, skill_points: i32) {
        self.skill_points = skill_points;
    }

    /// Hands the item to another player
    pub fn give_to(&mut self, player_id: i32) {
        self.player_id = Some(player_id);
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill_points(&self) -> i32 {
        self.skill_points
    }

    pub fn player_id(&self) -> Option<i32> {
        self.player_id
    }
}
