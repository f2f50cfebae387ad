use super::helpers;
use crate::types::{AppId, Minutes};
use serde::{Deserialize, Serialize};
use url::Url;

/// A game played in the last two weeks.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RecentlyPlayedGame {
    pub appid: AppId,
    pub name: String,
    /// Minutes played in the last two weeks.
    pub playtime_2weeks: Minutes,
    /// Total minutes played on record.
    pub playtime_forever: Minutes,
    /// The hash of the game's icon.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_windows_forever: Option<Minutes>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_mac_forever: Option<Minutes>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_linux_forever: Option<Minutes>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_deck_forever: Option<Minutes>,
}

impl RecentlyPlayedGame {
    /// Playtime in the last two weeks, e.g. "2h 5m".
    pub fn recent_playtime(&self) -> String {
        helpers::format_minutes(self.playtime_2weeks)
    }

    pub fn total_playtime_hours(&self) -> f64 {
        f64::from(self.playtime_forever) / 60.0
    }

    pub fn icon_url(&self) -> Option<Url> {
        helpers::app_icon_url(self.appid, self.img_icon_url.as_deref()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_recent_playtime() {
        let game: RecentlyPlayedGame = serde_json::from_str(r#"{
            "appid": 1091500,
            "name": "Cyberpunk 2077",
            "playtime_2weeks": 125,
            "playtime_forever": 3000,
            "img_icon_url": "15ba4f6b3e2c8a75f0bebe2c3ca04084748f7fc5",
            "playtime_windows_forever": 3000
        }"#).unwrap();

        assert_eq!(game.recent_playtime(), "2h 5m");
        assert_eq!(game.total_playtime_hours(), 50.0);
        assert_eq!(game.playtime_linux_forever, None);
        assert!(game.icon_url().is_some());
    }

    #[test]
    fn missing_icon_hash_has_no_icon_url() {
        let game: RecentlyPlayedGame = serde_json::from_str(r#"{
            "appid": 440,
            "name": "Team Fortress 2",
            "playtime_2weeks": 60,
            "playtime_forever": 600
        }"#).unwrap();

        assert_eq!(game.img_icon_url, None);
        assert_eq!(game.icon_url(), None);
        assert!(!serde_json::to_string(&game).unwrap().contains("img_icon_url"));
    }
}
