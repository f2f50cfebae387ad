use super::helpers;
use crate::serialize::steamid_string;
use crate::time::ServerTime;
use chrono::serde::ts_seconds_option;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;

/// A player's achievements for a game.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PlayerAchievements {
    #[serde(rename = "steamID")]
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl PlayerAchievements {
    pub fn unlocked_achievements(&self) -> usize {
        self.achievements
            .iter()
            .filter(|achievement| achievement.is_unlocked())
            .count()
    }

    /// The percentage of achievements unlocked, `0` if the game has none.
    pub fn completion_percentage(&self) -> f64 {
        helpers::completion_percentage(self.unlocked_achievements(), self.achievements.len())
    }
}

/// An achievement and whether the player has unlocked it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Achievement {
    /// The API name of the achievement.
    pub apiname: String,
    /// `1` if unlocked.
    pub achieved: u8,
    /// When the achievement was unlocked. Steam sends `0` for locked achievements, so this is
    /// `Some` of the unix epoch for them. Use [`Achievement::unlocked_at`] instead.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    pub unlocktime: Option<ServerTime>,
    /// The display name. Only sent when a language is requested.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.achieved == 1
    }

    /// "Unlocked" or "Locked".
    pub fn status(&self) -> &'static str {
        if self.is_unlocked() {
            "Unlocked"
        } else {
            "Locked"
        }
    }

    /// When the achievement was unlocked, if it is.
    pub fn unlocked_at(&self) -> Option<ServerTime> {
        if self.is_unlocked() {
            self.unlocktime
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACHIEVEMENTS: &str = r#"{
        "steamID": "76561198025885249",
        "gameName": "Portal 2",
        "achievements": [
            { "apiname": "ACH.SURVIVE_CONTAINER_RIDE", "achieved": 1, "unlocktime": 1303358294 },
            { "apiname": "ACH.WAKE_UP", "achieved": 1, "unlocktime": 1303359307 },
            { "apiname": "ACH.LASER", "achieved": 0, "unlocktime": 0 },
            { "apiname": "ACH.BRIDGE", "achieved": 0, "unlocktime": 0 }
        ],
        "success": true
    }"#;

    #[test]
    fn calculates_completion() {
        let achievements: PlayerAchievements = serde_json::from_str(ACHIEVEMENTS).unwrap();

        assert_eq!(achievements.game_name, "Portal 2");
        assert_eq!(u64::from(achievements.steamid), 76561198025885249);
        assert_eq!(achievements.unlocked_achievements(), 2);
        assert_eq!(achievements.completion_percentage(), 50.0);
    }

    #[test]
    fn locked_achievements_have_no_unlock_time() {
        let achievements: PlayerAchievements = serde_json::from_str(ACHIEVEMENTS).unwrap();
        let locked = &achievements.achievements[2];
        let unlocked = &achievements.achievements[0];

        assert_eq!(locked.status(), "Locked");
        assert_eq!(locked.unlocked_at(), None);
        assert_eq!(locked.unlocktime.map(|time| time.timestamp()), Some(0));
        assert_eq!(unlocked.status(), "Unlocked");
        assert_eq!(unlocked.unlocked_at().map(|time| time.timestamp()), Some(1303358294));
        assert_eq!(unlocked.name, None);
    }

    #[test]
    fn completion_is_zero_without_achievements() {
        let achievements: PlayerAchievements = serde_json::from_str(r#"{
            "steamID": "76561198025885249",
            "gameName": "Garry's Mod"
        }"#).unwrap();

        assert_eq!(achievements.completion_percentage(), 0.0);
    }
}
