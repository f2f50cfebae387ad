use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Deserialize;
use serde_repr::Serialize_repr;
use strum_macros::Display;

/// The visibility of a player's community profile.
#[derive(Debug, Serialize_repr, Deserialize, Display, FromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy)]
#[serde(from = "i32")]
#[repr(i32)]
pub enum CommunityVisibilityState {
    /// Visible to the player only.
    Private = 1,
    /// Visible to friends of the player.
    #[strum(serialize = "Friends Only")]
    FriendsOnly = 2,
    /// Visible to everyone.
    Public = 3,
    /// A value this crate does not know about.
    #[num_enum(default)]
    Unknown = 0,
}
