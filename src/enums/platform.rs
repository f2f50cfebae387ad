use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A platform that Steam tracks playtime for. Variants are declared in the order used to
/// break ties.
#[derive(Debug, Serialize, Deserialize, Display, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    #[strum(serialize = "Steam Deck")]
    SteamDeck,
}
