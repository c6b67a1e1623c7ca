use serde::{Deserialize, Serialize};

/// One day's observed state of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub character_name: String,
    pub character_class: String,
    pub world_name: String,
    pub guild_name: Option<String>,
    pub level: u32,
    pub exp_rate: f64,
}

impl Snapshot {
    pub fn new(character_name: impl Into<String>, level: u32, exp_rate: f64) -> Self {
        Self {
            character_name: character_name.into(),
            character_class: String::new(),
            world_name: String::new(),
            guild_name: None,
            level,
            exp_rate,
        }
    }

    pub fn with_class(mut self, character_class: impl Into<String>) -> Self {
        self.character_class = character_class.into();
        self
    }

    pub fn with_world(mut self, world_name: impl Into<String>) -> Self {
        self.world_name = world_name.into();
        self
    }

    pub fn with_guild(mut self, guild_name: Option<String>) -> Self {
        self.guild_name = guild_name;
        self
    }

    pub fn guild_or_default(&self) -> &str {
        match self.guild_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "无公会",
        }
    }
}
