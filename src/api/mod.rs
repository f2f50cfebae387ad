//! The client for the Steam Web API.

mod builder;
mod helpers;
mod response;

pub use builder::SteamWebAPIBuilder;
pub use helpers::MAX_STEAMIDS;

use helpers::{join_steamids, parses_response};
use response::{
    GetFriendListResponse,
    GetGlobalAchievementPercentagesResponse,
    GetNewsForAppResponse,
    GetOwnedGamesResponse,
    GetPlayerAchievementsResponse,
    GetPlayerBansResponse,
    GetPlayerSummariesResponse,
    GetRecentlyPlayedGamesResponse,
    GetSchemaForGameResponse,
    GetUserStatsForGameResponse,
};
use crate::error::{Error, ParameterError};
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
use crate::transport::Transport;
use crate::types::{AppId, Query};
use std::sync::Arc;
use std::time::Duration;
use serde::de::DeserializeOwned;
use steamid_ng::SteamID;

const API_HOSTNAME: &str = "https://api.steampowered.com";
const USER_AGENT_STRING: &str = concat!("steamkit/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed access to the Steam Web API. Cloning is cheap and clones share the same transport.
#[derive(Debug, Clone)]
pub struct SteamWebAPI {
    api_key: Option<String>,
    hostname: String,
    transport: Arc<dyn Transport>,
}

impl SteamWebAPI {
    /// Builder for constructing a [`SteamWebAPI`].
    pub fn builder() -> SteamWebAPIBuilder {
        SteamWebAPIBuilder::new()
    }
    
    /// Creates a client with `api_key` and the default settings.
    pub fn new<T>(api_key: T) -> Result<Self, Error>
    where
        T: Into<String>,
    {
        Self::builder()
            .api_key(api_key)
            .build()
    }
    
    fn get_api_url(
        &self,
        pathname: &str,
    ) -> String {
        format!("{}{}", self.hostname, pathname)
    }
    
    fn api_key(&self) -> Result<String, ParameterError> {
        self.api_key
            .clone()
            .ok_or(ParameterError::MissingApiKey)
    }
    
    async fn get<D>(
        &self,
        pathname: &'static str,
        query: Query,
    ) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        let url = self.get_api_url(pathname);
        
        log::debug!("GET {url}");
        
        let body = self.transport.get(&url, &query).await?;
        
        parses_response(&body)
    }
    
    /// Gets profile summaries for up to 100 players.
    pub async fn get_player_summaries(
        &self,
        steamids: &[SteamID],
    ) -> Result<Vec<PlayerSummary>, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamids", join_steamids(steamids)?),
        ]);
        let body: GetPlayerSummariesResponse = self.get("/ISteamUser/GetPlayerSummaries/v0002/", query).await?;
        
        Ok(body.response.players)
    }
    
    /// Gets a player's friend list. Fails with a 401 if the friend list is private.
    pub async fn get_friend_list(
        &self,
        steamid: SteamID,
    ) -> Result<Vec<Friend>, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamid", u64::from(steamid).to_string()),
            ("relationship", "friend".into()),
        ]);
        let body: GetFriendListResponse = self.get("/ISteamUser/GetFriendList/v0001/", query).await?;
        
        Ok(body.friendslist.friends)
    }
    
    /// Gets the games in a player's library, including free games. Empty if the library is
    /// private.
    pub async fn get_owned_games(
        &self,
        steamid: SteamID,
    ) -> Result<Vec<OwnedGame>, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamid", u64::from(steamid).to_string()),
            ("include_appinfo", "1".into()),
            ("include_played_free_games", "1".into()),
        ]);
        let body: GetOwnedGamesResponse = self.get("/IPlayerService/GetOwnedGames/v0001/", query).await?;
        
        Ok(body.response.games)
    }
    
    /// Gets a player's achievements for a game.
    pub async fn get_player_achievements(
        &self,
        steamid: SteamID,
        appid: AppId,
    ) -> Result<PlayerAchievements, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamid", u64::from(steamid).to_string()),
            ("appid", appid.to_string()),
        ]);
        let body: GetPlayerAchievementsResponse = self.get("/ISteamUserStats/GetPlayerAchievements/v0001/", query).await?;
        
        Ok(body.playerstats)
    }
    
    /// Gets the latest news for an app.
    pub async fn get_news_for_app(
        &self,
        steamid: SteamID,
        appid: AppId,
    ) -> Result<Vec<NewsItem>, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamid", u64::from(steamid).to_string()),
            ("appid", appid.to_string()),
        ]);
        let body: GetNewsForAppResponse = self.get("/ISteamNews/GetNewsForApp/v0002/", query).await?;
        
        Ok(body.appnews.newsitems)
    }
    
    /// Gets the percentage of players who have unlocked each of a game's achievements. Does not
    /// require an API key.
    pub async fn get_global_achievement_percentages(
        &self,
        appid: AppId,
    ) -> Result<Vec<GlobalAchievementPercentage>, Error> {
        let query = Query::from([
            ("gameid", appid.to_string()),
        ]);
        let body: GetGlobalAchievementPercentagesResponse = self.get("/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v0002/", query).await?;
        
        Ok(body.achievementpercentages.achievements)
    }
    
    /// Gets the games a player has played in the last two weeks, limited to `count` games if
    /// given.
    pub async fn get_recently_played_games(
        &self,
        steamid: SteamID,
        count: Option<u32>,
    ) -> Result<Vec<RecentlyPlayedGame>, Error> {
        let mut query = Query::from([
            ("key", self.api_key()?),
            ("steamid", u64::from(steamid).to_string()),
        ]);
        
        if let Some(count) = count {
            query.insert("count", count.to_string());
        }
        
        let body: GetRecentlyPlayedGamesResponse = self.get("/IPlayerService/GetRecentlyPlayedGames/v0001/", query).await?;
        
        Ok(body.response.games)
    }
    
    /// Gets a player's stats and unlocked achievements for a game.
    pub async fn get_user_stats_for_game(
        &self,
        steamid: SteamID,
        appid: AppId,
    ) -> Result<UserStatsForGame, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamid", u64::from(steamid).to_string()),
            ("appid", appid.to_string()),
        ]);
        let body: GetUserStatsForGameResponse = self.get("/ISteamUserStats/GetUserStatsForGame/v0002/", query).await?;
        
        Ok(body.playerstats)
    }
    
    /// Gets the stats and achievements a game defines.
    pub async fn get_schema_for_game(
        &self,
        appid: AppId,
    ) -> Result<GameSchema, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("appid", appid.to_string()),
        ]);
        let body: GetSchemaForGameResponse = self.get("/ISteamUserStats/GetSchemaForGame/v2/", query).await?;
        
        Ok(body.game)
    }
    
    /// Gets ban records for up to 100 players.
    pub async fn get_player_bans(
        &self,
        steamids: &[SteamID],
    ) -> Result<Vec<PlayerBans>, Error> {
        let query = Query::from([
            ("key", self.api_key()?),
            ("steamids", join_steamids(steamids)?),
        ]);
        let body: GetPlayerBansResponse = self.get("/ISteamUser/GetPlayerBans/v1/", query).await?;
        
        Ok(body.players)
    }
}
