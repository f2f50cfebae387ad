use super::helpers;
use crate::serialize::steamid_string;
use crate::time::{self, ServerTime};
use chrono::serde::ts_seconds;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;
use url::Url;

/// An entry in a player's friend list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Friend {
    /// The friend's [`SteamID`].
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    /// The relationship, e.g. "friend".
    pub relationship: String,
    /// When the friendship started.
    #[serde(with = "ts_seconds")]
    pub friend_since: ServerTime,
}

impl Friend {
    /// How long the two have been friends, e.g. "3 years and 2 months".
    pub fn friendship_duration(&self) -> String {
        self.friendship_duration_at(time::get_server_time_now())
    }

    /// [`Friend::friendship_duration`] relative to `now`.
    pub fn friendship_duration_at(&self, now: ServerTime) -> String {
        time::format_elapsed(self.friend_since, now)
    }

    /// The URL to the friend's community profile.
    pub fn profile_url(&self) -> Option<Url> {
        helpers::profile_url(self.steamid)
    }
}
