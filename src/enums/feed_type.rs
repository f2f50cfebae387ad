use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Deserialize;
use serde_repr::Serialize_repr;
use strum_macros::Display;

/// The type of feed a news item was published to.
#[derive(Debug, Serialize_repr, Deserialize, Display, FromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy)]
#[serde(from = "i32")]
#[repr(i32)]
pub enum FeedType {
    /// Also used for any value this crate does not know about.
    #[num_enum(default)]
    Unknown = 0,
    #[strum(serialize = "Steam News")]
    SteamNews = 1,
    #[strum(serialize = "Steam Forum Topic")]
    SteamForumTopic = 2,
}
