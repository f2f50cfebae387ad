use crate::enums::{ClientType, CommunityVisibilityState, PersonaState, PersonaStateFlags};
use crate::serialize::steamid_string;
use crate::time::{self, ServerTime};
use chrono::serde::ts_seconds_option;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;

/// A summary of a player's public profile.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PlayerSummary {
    /// The player's [`SteamID`].
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    /// Who can see the player's community profile.
    pub communityvisibilitystate: CommunityVisibilityState,
    /// `1` if the player has set up their community profile.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profilestate: Option<u8>,
    /// The player's display name.
    pub personaname: String,
    /// The URL to the player's community profile.
    pub profileurl: String,
    /// The URL to the player's 32x32 avatar.
    pub avatar: String,
    /// The URL to the player's 64x64 avatar.
    pub avatarmedium: String,
    /// The URL to the player's 184x184 avatar.
    pub avatarfull: String,
    /// The hash of the player's avatar.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatarhash: Option<String>,
    /// The last time the player was online.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    pub lastlogoff: Option<ServerTime>,
    /// The player's online state.
    pub personastate: PersonaState,
    /// The player's real name, if they have set one and their profile is visible.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    /// The ID of the player's primary group.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primaryclanid: Option<String>,
    /// When the account was created.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    pub timecreated: Option<ServerTime>,
    /// Flags describing the player's persona. `None` when Steam leaves the field out, which
    /// is not the same as an explicit `0`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personastateflags: Option<PersonaStateFlags>,
    /// The ID of the game the player is currently in.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gameid: Option<String>,
    /// The name of the game the player is currently in.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gameextrainfo: Option<String>,
    /// The player's ISO 3166 country code.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loccountrycode: Option<String>,
    /// The player's state code.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locstatecode: Option<String>,
}

impl PlayerSummary {
    /// The player's real name followed by their persona name in parentheses, or just the
    /// persona name if no real name is visible.
    pub fn display_name(&self) -> String {
        match &self.realname {
            Some(realname) => format!("{realname} ({})", self.personaname),
            None => self.personaname.clone(),
        }
    }

    /// How old the account is, e.g. "14 years and 1 month". "Unknown" if the creation time is
    /// not visible.
    pub fn account_age(&self) -> String {
        self.account_age_at(time::get_server_time_now())
    }

    /// [`PlayerSummary::account_age`] relative to `now`.
    pub fn account_age_at(&self, now: ServerTime) -> String {
        match self.timecreated {
            Some(timecreated) => time::format_elapsed(timecreated, now),
            None => "Unknown".into(),
        }
    }

    /// The player's online status, e.g. "Looking to Play".
    pub fn online_status(&self) -> String {
        self.personastate.to_string()
    }

    /// How long ago the player was last online, e.g. "3 hours ago".
    pub fn time_since_last_logoff(&self) -> String {
        self.time_since_last_logoff_at(time::get_server_time_now())
    }

    /// [`PlayerSummary::time_since_last_logoff`] relative to `now`.
    pub fn time_since_last_logoff_at(&self, now: ServerTime) -> String {
        match self.lastlogoff {
            Some(lastlogoff) => time::format_relative(lastlogoff, now),
            None => "Unknown".into(),
        }
    }

    pub fn is_profile_public(&self) -> bool {
        self.communityvisibilitystate == CommunityVisibilityState::Public
    }

    pub fn is_using_vr(&self) -> bool {
        self.personastateflags
            .unwrap_or_default()
            .contains(PersonaStateFlags::CLIENT_TYPE_VR)
    }

    pub fn is_in_game(&self) -> bool {
        self.gameid.is_some()
    }

    /// The client the player is currently using. When several client flags are set the first
    /// of web, mobile, big picture then VR wins.
    pub fn current_client_type(&self) -> ClientType {
        let flags = self.personastateflags.unwrap_or_default();

        if flags.contains(PersonaStateFlags::CLIENT_TYPE_WEB) {
            ClientType::Web
        } else if flags.contains(PersonaStateFlags::CLIENT_TYPE_MOBILE) {
            ClientType::Mobile
        } else if flags.contains(PersonaStateFlags::CLIENT_TYPE_TENFOOT) {
            ClientType::BigPicture
        } else if flags.contains(PersonaStateFlags::CLIENT_TYPE_VR) {
            ClientType::VR
        } else {
            ClientType::Desktop
        }
    }
}
