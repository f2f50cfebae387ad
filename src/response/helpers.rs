use crate::enums::Platform;
use crate::types::{AppId, Minutes};
use std::collections::HashMap;
use steamid_ng::SteamID;
use url::Url;

const APP_ICON_HOSTNAME: &str = "https://media.steampowered.com/steamcommunity/public/images/apps";
const STORE_HOSTNAME: &str = "https://store.steampowered.com";
const COMMUNITY_HOSTNAME: &str = "https://steamcommunity.com";

/// Builds the URL for an app's icon from its icon hash.
pub fn app_icon_url(appid: AppId, icon_hash: &str) -> Option<Url> {
    if icon_hash.is_empty() {
        return None;
    }

    Url::parse(&format!("{APP_ICON_HOSTNAME}/{appid}/{icon_hash}.jpg")).ok()
}

/// The URL to an app's store page.
pub fn store_url(appid: AppId) -> Option<Url> {
    Url::parse(&format!("{STORE_HOSTNAME}/app/{appid}")).ok()
}

/// The URL to a player's community profile.
pub fn profile_url(steamid: SteamID) -> Option<Url> {
    Url::parse(&format!("{COMMUNITY_HOSTNAME}/profiles/{}", u64::from(steamid))).ok()
}

/// `unlocked / total * 100`, or `0` if there is nothing to unlock.
pub fn completion_percentage(unlocked: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    unlocked as f64 / total as f64 * 100.0
}

/// Formats minutes as hours and minutes, e.g. "2h 5m".
pub fn format_minutes(minutes: Minutes) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;

    if hours == 0 {
        format!("{minutes}m")
    } else {
        format!("{hours}h {minutes}m")
    }
}

/// The platform with the most playtime. Ties go to the platform seen first and `Windows` is
/// returned when nothing has been played.
pub fn primary_platform<I>(playtimes: I) -> Platform
where
    I: IntoIterator<Item = (Platform, Minutes)>,
{
    let mut primary = Platform::Windows;
    let mut max = 0;

    for (platform, minutes) in playtimes {
        if minutes > max {
            primary = platform;
            max = minutes;
        }
    }

    primary
}

/// Each platform's share of the combined playtime as a percentage. Empty when the combined
/// playtime is zero.
pub fn playtime_percentages<I>(playtimes: I) -> HashMap<Platform, f64>
where
    I: IntoIterator<Item = (Platform, Minutes)>,
{
    let playtimes = playtimes.into_iter().collect::<Vec<_>>();
    let total = playtimes
        .iter()
        .map(|(_, minutes)| u64::from(*minutes))
        .sum::<u64>();

    if total == 0 {
        return HashMap::new();
    }

    playtimes
        .into_iter()
        .map(|(platform, minutes)| (platform, minutes as f64 / total as f64 * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_percentage_handles_empty() {
        assert_eq!(completion_percentage(0, 0), 0.0);
        assert_eq!(completion_percentage(0, 4), 0.0);
        assert_eq!(completion_percentage(1, 4), 25.0);
        assert_eq!(completion_percentage(4, 4), 100.0);
    }

    #[test]
    fn formats_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(59), "59m");
        assert_eq!(format_minutes(125), "2h 5m");
    }

    #[test]
    fn primary_platform_prefers_first_on_tie() {
        let playtimes = [
            (Platform::Windows, 10),
            (Platform::Mac, 30),
            (Platform::Linux, 30),
            (Platform::SteamDeck, 5),
        ];

        assert_eq!(primary_platform(playtimes), Platform::Mac);
    }

    #[test]
    fn primary_platform_defaults_to_windows() {
        let playtimes = [
            (Platform::Windows, 0),
            (Platform::Mac, 0),
            (Platform::Linux, 0),
            (Platform::SteamDeck, 0),
        ];

        assert_eq!(primary_platform(playtimes), Platform::Windows);
        assert_eq!(primary_platform(Vec::new()), Platform::Windows);
    }

    #[test]
    fn playtime_percentages_sum_to_100() {
        let percentages = playtime_percentages([
            (Platform::Windows, 13),
            (Platform::Mac, 7),
            (Platform::Linux, 1),
            (Platform::SteamDeck, 0),
        ]);
        let sum = percentages.values().sum::<f64>();

        assert_eq!(percentages.len(), 4);
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn playtime_percentages_empty_without_playtime() {
        let percentages = playtime_percentages([
            (Platform::Windows, 0),
            (Platform::Mac, 0),
        ]);

        assert!(percentages.is_empty());
    }

    #[test]
    fn builds_app_icon_url() {
        let url = app_icon_url(292120, "83c929d4965963f6e0bc17969a2599e7829ac23d").unwrap();

        assert_eq!(url.as_str(), "https://media.steampowered.com/steamcommunity/public/images/apps/292120/83c929d4965963f6e0bc17969a2599e7829ac23d.jpg");
        assert!(app_icon_url(292120, "").is_none());
    }
}
