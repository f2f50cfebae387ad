use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Deserialize;
use serde_repr::Serialize_repr;
use strum_macros::Display;

/// The online state of a player.
#[derive(Debug, Serialize_repr, Deserialize, Display, FromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy)]
#[serde(from = "i32")]
#[repr(i32)]
pub enum PersonaState {
    Offline = 0,
    Online = 1,
    Busy = 2,
    Away = 3,
    Snooze = 4,
    #[strum(serialize = "Looking to Trade")]
    LookingToTrade = 5,
    #[strum(serialize = "Looking to Play")]
    LookingToPlay = 6,
    /// A value this crate does not know about.
    #[num_enum(default)]
    Unknown = -1,
}
