use super::helpers;
use crate::enums::{ContentDescriptor, Platform};
use crate::time::{self, ServerTime};
use crate::types::{AppId, Minutes};
use chrono::Duration;
use chrono::serde::ts_seconds_option;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use url::Url;

/// A game in a player's library.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OwnedGame {
    /// The app ID of the game.
    pub appid: AppId,
    /// The name of the game.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Total minutes played on record.
    pub playtime_forever: Minutes,
    /// Minutes played in the last two weeks.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_2weeks: Option<Minutes>,
    pub playtime_windows_forever: Minutes,
    pub playtime_mac_forever: Minutes,
    pub playtime_linux_forever: Minutes,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_deck_forever: Option<Minutes>,
    /// Minutes played while offline.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_disconnected: Option<Minutes>,
    /// The hash of the game's icon.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_community_visible_stats: Option<bool>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_leaderboards: Option<bool>,
    /// The last time the game was played.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    pub rtime_last_played: Option<ServerTime>,
    /// The game's mature content descriptors.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_descriptorids: Option<Vec<ContentDescriptor>>,
}

impl OwnedGame {
    /// Minutes played on `platform`.
    pub fn playtime_on(&self, platform: Platform) -> Minutes {
        match platform {
            Platform::Windows => self.playtime_windows_forever,
            Platform::Mac => self.playtime_mac_forever,
            Platform::Linux => self.playtime_linux_forever,
            Platform::SteamDeck => self.playtime_deck_forever.unwrap_or_default(),
        }
    }

    fn playtimes(&self) -> impl Iterator<Item = (Platform, Minutes)> + '_ {
        Platform::iter().map(|platform| (platform, self.playtime_on(platform)))
    }

    /// The platform this game has been played on the most.
    pub fn primary_platform(&self) -> Platform {
        helpers::primary_platform(self.playtimes())
    }

    /// Each platform's share of this game's playtime.
    pub fn playtime_percentages(&self) -> HashMap<Platform, f64> {
        helpers::playtime_percentages(self.playtimes())
    }

    /// Whether the game was played in the last two weeks.
    pub fn is_recently_played(&self) -> bool {
        self.is_recently_played_at(time::get_server_time_now())
    }

    /// [`OwnedGame::is_recently_played`] relative to `now`.
    pub fn is_recently_played_at(&self, now: ServerTime) -> bool {
        match self.rtime_last_played {
            Some(last_played) => now.signed_duration_since(last_played) < Duration::days(14),
            None => false,
        }
    }

    pub fn total_playtime_hours(&self) -> f64 {
        f64::from(self.playtime_forever) / 60.0
    }

    /// How long ago the game was last played, e.g. "2 weeks ago". "Never" if it has no
    /// recorded play time.
    pub fn last_played_ago(&self) -> String {
        self.last_played_ago_at(time::get_server_time_now())
    }

    /// [`OwnedGame::last_played_ago`] relative to `now`.
    pub fn last_played_ago_at(&self, now: ServerTime) -> String {
        match self.rtime_last_played {
            Some(last_played) => time::format_relative(last_played, now),
            None => "Never".into(),
        }
    }

    fn content_descriptors(&self) -> &[ContentDescriptor] {
        self.content_descriptorids.as_deref().unwrap_or_default()
    }

    /// Whether the game is flagged for general mature content or frequent violence.
    pub fn has_mature_content(&self) -> bool {
        self.content_descriptors()
            .iter()
            .any(|descriptor| matches!(
                descriptor,
                ContentDescriptor::GeneralMatureContent |
                ContentDescriptor::FrequentViolenceOrGore
            ))
    }

    pub fn has_sexual_content(&self) -> bool {
        self.content_descriptors()
            .iter()
            .any(ContentDescriptor::is_sexual)
    }

    pub fn icon_url(&self) -> Option<Url> {
        helpers::app_icon_url(self.appid, self.img_icon_url.as_deref()?)
    }

    /// The URL to the game's store page.
    pub fn store_url(&self) -> Option<Url> {
        helpers::store_url(self.appid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::timestamp_to_server_time;

    const FINAL_FANTASY_XIII: &str = r#"{
        "appid": 292120,
        "name": "FINAL FANTASY XIII",
        "playtime_forever": 7412,
        "img_icon_url": "83c929d4965963f6e0bc17969a2599e7829ac23d",
        "has_community_visible_stats": true,
        "playtime_windows_forever": 1737,
        "playtime_mac_forever": 0,
        "playtime_linux_forever": 735,
        "playtime_deck_forever": 735,
        "rtime_last_played": 1719375659,
        "content_descriptorids": [2, 5],
        "playtime_disconnected": 0
    }"#;

    fn game() -> OwnedGame {
        serde_json::from_str(FINAL_FANTASY_XIII).unwrap()
    }

    #[test]
    fn calculates_platform_shares() {
        let game = game();
        let percentages = game.playtime_percentages();

        assert_eq!(game.primary_platform(), Platform::Windows);
        assert!((percentages[&Platform::Windows] - 54.16276894293732).abs() < 1e-9);
        assert!((percentages[&Platform::Linux] - 22.91861552853134).abs() < 1e-9);
        assert!((percentages[&Platform::SteamDeck] - 22.91861552853134).abs() < 1e-9);
        assert_eq!(percentages[&Platform::Mac], 0.0);
        assert!((percentages.values().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn calculates_total_hours() {
        assert!((game().total_playtime_hours() - 123.5333).abs() < 1e-3);
    }

    #[test]
    fn checks_recently_played() {
        let game = game();
        let played = timestamp_to_server_time(1719375659).unwrap();

        assert!(game.is_recently_played_at(played + Duration::days(13)));
        assert!(!game.is_recently_played_at(played + Duration::days(14)));
        assert_eq!(game.last_played_ago_at(played + Duration::days(15)), "2 weeks ago");
    }

    #[test]
    fn checks_content_descriptors() {
        let game = game();

        assert!(game.has_mature_content());
        assert!(!game.has_sexual_content());
    }

    #[test]
    fn builds_urls() {
        let game = game();

        assert_eq!(
            game.icon_url().unwrap().as_str(),
            "https://media.steampowered.com/steamcommunity/public/images/apps/292120/83c929d4965963f6e0bc17969a2599e7829ac23d.jpg",
        );
        assert_eq!(game.store_url().unwrap().as_str(), "https://store.steampowered.com/app/292120");
    }

    #[test]
    fn decodes_minimal_game() {
        let game: OwnedGame = serde_json::from_str(r#"{
            "appid": 10,
            "playtime_forever": 0,
            "playtime_windows_forever": 0,
            "playtime_mac_forever": 0,
            "playtime_linux_forever": 0
        }"#).unwrap();

        assert_eq!(game.name, None);
        assert_eq!(game.playtime_deck_forever, None);
        assert_eq!(game.primary_platform(), Platform::Windows);
        assert!(game.playtime_percentages().is_empty());
        assert!(!game.is_recently_played());
        assert_eq!(game.last_played_ago(), "Never");
        assert_eq!(game.icon_url(), None);
        assert!(!game.has_mature_content());
    }

    #[test]
    fn ties_go_to_the_first_platform() {
        let game: OwnedGame = serde_json::from_str(r#"{
            "appid": 10,
            "playtime_forever": 20,
            "playtime_windows_forever": 0,
            "playtime_mac_forever": 10,
            "playtime_linux_forever": 10
        }"#).unwrap();

        assert_eq!(game.primary_platform(), Platform::Mac);
    }

    #[test]
    fn missing_platform_playtime_fails() {
        let json = FINAL_FANTASY_XIII.replace(r#""playtime_mac_forever": 0,"#, "");

        assert!(serde_json::from_str::<OwnedGame>(&json).is_err());
    }
}
