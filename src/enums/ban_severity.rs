use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The overall severity of a player's bans.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum BanSeverity {
    /// No bans of any kind.
    None,
    /// Game bans or an economy ban.
    Moderate,
    /// A community or VAC ban.
    Severe,
}
