use serde::{Deserialize, Serialize};
use url::Url;

/// The stats and achievements a game defines.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GameSchema {
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(rename = "gameVersion")]
    pub game_version: String,
    /// Steam leaves this out for games without stats or achievements.
    #[serde(rename = "availableGameStats")]
    #[serde(default)]
    pub available_game_stats: AvailableGameStats,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct AvailableGameStats {
    #[serde(default)]
    pub stats: Vec<StatSchema>,
    #[serde(default)]
    pub achievements: Vec<AchievementSchema>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StatSchema {
    pub name: String,
    pub defaultvalue: i64,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AchievementSchema {
    pub name: String,
    pub defaultvalue: i64,
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// `1` if the achievement is hidden until unlocked.
    pub hidden: u8,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The URL to the achievement's icon.
    pub icon: String,
    /// The URL to the achievement's icon while locked.
    pub icongray: String,
}

impl GameSchema {
    pub fn total_stats(&self) -> usize {
        self.available_game_stats.stats.len()
    }

    pub fn total_achievements(&self) -> usize {
        self.available_game_stats.achievements.len()
    }

    pub fn hidden_achievements(&self) -> usize {
        self.available_game_stats.achievements
            .iter()
            .filter(|achievement| achievement.is_hidden())
            .count()
    }
}

impl AchievementSchema {
    pub fn is_hidden(&self) -> bool {
        self.hidden == 1
    }

    pub fn icon_url(&self) -> Option<Url> {
        Url::parse(&self.icon).ok()
    }

    pub fn gray_icon_url(&self) -> Option<Url> {
        Url::parse(&self.icongray).ok()
    }
}
