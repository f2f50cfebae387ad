//! Entities decoded from Web API responses.

mod achievement;
mod friend;
mod game_schema;
mod global_achievement_percentage;
mod news_item;
mod owned_game;
mod player_bans;
mod player_summary;
mod recently_played_game;
mod user_stats;
pub mod helpers;

pub use achievement::{Achievement, PlayerAchievements};
pub use friend::Friend;
pub use game_schema::{AchievementSchema, AvailableGameStats, GameSchema, StatSchema};
pub use global_achievement_percentage::GlobalAchievementPercentage;
pub use news_item::NewsItem;
pub use owned_game::OwnedGame;
pub use player_bans::{PlayerBans, NO_ECONOMY_BAN};
pub use player_summary::PlayerSummary;
pub use recently_played_game::RecentlyPlayedGame;
pub use user_stats::{Stat, UserAchievement, UserStatsForGame};
