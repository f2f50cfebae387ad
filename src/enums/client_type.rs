use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The kind of Steam client a player is using, derived from their persona state flags.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, Clone, Copy)]
pub enum ClientType {
    Web,
    Mobile,
    #[strum(serialize = "Big Picture")]
    BigPicture,
    #[strum(serialize = "VR")]
    VR,
    Desktop,
}
