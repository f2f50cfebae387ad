use crate::enums::BanSeverity;
use crate::serialize::steamid_string;
use crate::time::{self, ServerTime};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;

/// The value of `EconomyBan` for players without an economy ban.
pub const NO_ECONOMY_BAN: &str = "none";

/// A player's ban record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerBans {
    #[serde(rename = "SteamId")]
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    pub community_banned: bool,
    #[serde(rename = "VACBanned")]
    pub vac_banned: bool,
    #[serde(rename = "NumberOfVACBans")]
    pub number_of_vac_bans: u32,
    pub days_since_last_ban: u32,
    pub number_of_game_bans: u32,
    /// `"none"`, `"probation"` or `"banned"`.
    pub economy_ban: String,
}

impl PlayerBans {
    pub fn has_economy_ban(&self) -> bool {
        self.economy_ban != NO_ECONOMY_BAN
    }

    fn has_any_ban(&self) -> bool {
        self.community_banned ||
        self.vac_banned ||
        self.number_of_game_bans > 0 ||
        self.has_economy_ban()
    }

    pub fn ban_severity(&self) -> BanSeverity {
        if self.community_banned || self.vac_banned {
            BanSeverity::Severe
        } else if self.number_of_game_bans > 0 || self.has_economy_ban() {
            BanSeverity::Moderate
        } else {
            BanSeverity::None
        }
    }

    /// A one-line description of the player's bans, e.g. "Community Banned, 2 VAC Bans".
    pub fn ban_summary(&self) -> String {
        let mut bans = Vec::new();

        if self.community_banned {
            bans.push("Community Banned".to_string());
        }

        if self.vac_banned {
            bans.push(plural(self.number_of_vac_bans, "VAC Ban"));
        }

        if self.number_of_game_bans > 0 {
            bans.push(plural(self.number_of_game_bans, "Game Ban"));
        }

        if self.has_economy_ban() {
            bans.push(format!("Economy Ban: {}", self.economy_ban));
        }

        if bans.is_empty() {
            return "No bans".into();
        }

        bans.join(", ")
    }

    /// When the player was last banned. `None` if there are no bans on record.
    pub fn last_ban_date(&self) -> Option<ServerTime> {
        self.last_ban_date_at(time::get_server_time_now())
    }

    /// [`PlayerBans::last_ban_date`] relative to `now`.
    pub fn last_ban_date_at(&self, now: ServerTime) -> Option<ServerTime> {
        if !self.has_any_ban() {
            return None;
        }

        now.checked_sub_signed(Duration::days(self.days_since_last_ban.into()))
    }
}

fn plural(amount: u32, unit: &str) -> String {
    if amount == 1 {
        format!("{amount} {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::timestamp_to_server_time;

    fn bans(json: serde_json::Value) -> PlayerBans {
        let mut record = serde_json::json!({
            "SteamId": "76561198025885249",
            "CommunityBanned": false,
            "VACBanned": false,
            "NumberOfVACBans": 0,
            "DaysSinceLastBan": 0,
            "NumberOfGameBans": 0,
            "EconomyBan": "none"
        });

        if let (Some(record), Some(overrides)) = (record.as_object_mut(), json.as_object()) {
            record.extend(overrides.clone());
        }

        serde_json::from_value(record).unwrap()
    }

    #[test]
    fn community_ban_is_severe() {
        let bans = bans(serde_json::json!({ "CommunityBanned": true }));

        assert_eq!(bans.ban_severity(), BanSeverity::Severe);
        assert_eq!(bans.ban_summary(), "Community Banned");
    }

    #[test]
    fn game_ban_is_moderate() {
        let bans = bans(serde_json::json!({ "NumberOfGameBans": 2, "DaysSinceLastBan": 30 }));
        let now = timestamp_to_server_time(1720326072).unwrap();

        assert_eq!(bans.ban_severity(), BanSeverity::Moderate);
        assert_eq!(bans.ban_summary(), "2 Game Bans");
        assert_eq!(bans.last_ban_date_at(now), Some(now - Duration::days(30)));
    }

    #[test]
    fn economy_ban_is_moderate() {
        let bans = bans(serde_json::json!({ "EconomyBan": "probation" }));

        assert_eq!(bans.ban_severity(), BanSeverity::Moderate);
        assert_eq!(bans.ban_summary(), "Economy Ban: probation");
    }

    #[test]
    fn clean_record() {
        let bans = bans(serde_json::json!({}));

        assert_eq!(bans.ban_severity(), BanSeverity::None);
        assert_eq!(bans.ban_summary(), "No bans");
        assert_eq!(bans.last_ban_date(), None);
    }

    #[test]
    fn summarizes_every_ban() {
        let bans = bans(serde_json::json!({
            "VACBanned": true,
            "NumberOfVACBans": 1,
            "NumberOfGameBans": 1
        }));

        assert_eq!(bans.ban_severity(), BanSeverity::Severe);
        assert_eq!(bans.ban_summary(), "1 VAC Ban, 1 Game Ban");
    }

    #[test]
    fn out_of_range_ban_age_has_no_date() {
        let bans = bans(serde_json::json!({ "CommunityBanned": true, "DaysSinceLastBan": 4294967295u32 }));
        let now = timestamp_to_server_time(1720326072).unwrap();

        assert_eq!(bans.ban_severity(), BanSeverity::Severe);
        assert_eq!(bans.last_ban_date_at(now), None);
    }
}
