use crate::enums::Rarity;
use crate::serialize::number_or_string;
use serde::{Deserialize, Serialize};

/// The percentage of all players who have unlocked an achievement.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GlobalAchievementPercentage {
    /// The API name of the achievement.
    pub name: String,
    /// From `0` to `100`.
    #[serde(deserialize_with = "number_or_string")]
    pub percent: f64,
}

impl GlobalAchievementPercentage {
    /// The percentage to two decimal places, e.g. "12.34%".
    pub fn formatted_percentage(&self) -> String {
        format!("{:.2}%", self.percent)
    }

    pub fn rarity(&self) -> Rarity {
        Rarity::from_percent(self.percent)
    }
}
