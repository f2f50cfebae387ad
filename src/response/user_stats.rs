use super::helpers;
use crate::serialize::steamid_string;
use crate::time::ServerTime;
use chrono::serde::ts_seconds_option;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;

/// A player's stats and achievements for a game.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UserStatsForGame {
    #[serde(rename = "steamID")]
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub achievements: Vec<UserAchievement>,
}

/// A single stat value.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Stat {
    pub name: String,
    pub value: i64,
}

/// An achievement the player has unlocked. Only unlocked achievements are sent.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct UserAchievement {
    pub name: String,
    /// `1` if unlocked.
    pub achieved: u8,
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    pub unlocktime: Option<ServerTime>,
}

impl UserStatsForGame {
    pub fn total_stats(&self) -> usize {
        self.stats.len()
    }

    pub fn total_achievements(&self) -> usize {
        self.achievements.len()
    }

    pub fn unlocked_achievements(&self) -> usize {
        self.achievements
            .iter()
            .filter(|achievement| achievement.achieved == 1)
            .count()
    }

    pub fn achievement_completion_percentage(&self) -> f64 {
        helpers::completion_percentage(self.unlocked_achievements(), self.total_achievements())
    }

    /// Stats from highest to lowest value. Equal values keep their original order.
    pub fn stats_sorted_by_value(&self) -> Vec<&Stat> {
        let mut stats = self.stats.iter().collect::<Vec<_>>();

        stats.sort_by(|a, b| b.value.cmp(&a.value));
        stats
    }
}
