//! Response envelopes. These are unwrapped before anything is returned to the caller.

use crate::response::{
    Friend,
    GameSchema,
    GlobalAchievementPercentage,
    NewsItem,
    OwnedGame,
    PlayerAchievements,
    PlayerBans,
    PlayerSummary,
    RecentlyPlayedGame,
    UserStatsForGame,
};
use std::collections::HashMap;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct GetPlayerSummariesResponse {
    pub response: GetPlayerSummariesResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerSummariesResponseBody {
    pub players: Vec<PlayerSummary>,
}

#[derive(Deserialize, Debug)]
pub struct GetFriendListResponse {
    pub friendslist: GetFriendListResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct GetFriendListResponseBody {
    pub friends: Vec<Friend>,
}

#[derive(Deserialize, Debug)]
pub struct GetOwnedGamesResponse {
    pub response: GetOwnedGamesResponseBody,
}

/// `games` is left out when the player's library is private.
#[derive(Deserialize, Debug)]
pub struct GetOwnedGamesResponseBody {
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerAchievementsResponse {
    pub playerstats: PlayerAchievements,
}

#[derive(Deserialize, Debug)]
pub struct GetNewsForAppResponse {
    pub appnews: GetNewsForAppResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct GetNewsForAppResponseBody {
    pub newsitems: Vec<NewsItem>,
}

#[derive(Deserialize, Debug)]
pub struct GetGlobalAchievementPercentagesResponse {
    pub achievementpercentages: GetGlobalAchievementPercentagesResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct GetGlobalAchievementPercentagesResponseBody {
    pub achievements: Vec<GlobalAchievementPercentage>,
}

#[derive(Deserialize, Debug)]
pub struct GetRecentlyPlayedGamesResponse {
    pub response: GetRecentlyPlayedGamesResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct GetRecentlyPlayedGamesResponseBody {
    #[serde(default)]
    pub games: Vec<RecentlyPlayedGame>,
}

#[derive(Deserialize, Debug)]
pub struct GetUserStatsForGameResponse {
    pub playerstats: UserStatsForGame,
}

#[derive(Deserialize, Debug)]
pub struct GetSchemaForGameResponse {
    pub game: GameSchema,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerBansResponse {
    pub players: Vec<PlayerBans>,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub error: String,
}

/// A body reporting an error, either at the top level or inside the endpoint's envelope, e.g.
/// `{"playerstats":{"error":"Requested app has no stats","success":false}}`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ApiErrorResponse {
    Body(ApiErrorBody),
    Enveloped(HashMap<String, ApiErrorBody>),
}

impl ApiErrorResponse {
    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Body(body) => Some(body.error),
            Self::Enveloped(envelope) => envelope
                .into_values()
                .next()
                .map(|body| body.error),
        }
    }
}
