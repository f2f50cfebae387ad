use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// How rare an achievement is, based on the percentage of players who have unlocked it.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Rarity {
    /// Below 5%.
    #[strum(serialize = "Ultra Rare")]
    UltraRare,
    /// 5% up to 10%.
    #[strum(serialize = "Very Rare")]
    VeryRare,
    /// 10% up to 20%.
    Rare,
    /// 20% up to 50%.
    Uncommon,
    /// 50% and above.
    Common,
}

impl Rarity {
    /// Classifies an unlock percentage between 0 and 100.
    pub fn from_percent(percent: f64) -> Self {
        if percent < 5.0 {
            Self::UltraRare
        } else if percent < 10.0 {
            Self::VeryRare
        } else if percent < 20.0 {
            Self::Rare
        } else if percent < 50.0 {
            Self::Uncommon
        } else {
            Self::Common
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_band_boundaries() {
        assert_eq!(Rarity::from_percent(0.0), Rarity::UltraRare);
        assert_eq!(Rarity::from_percent(4.99), Rarity::UltraRare);
        assert_eq!(Rarity::from_percent(5.0), Rarity::VeryRare);
        assert_eq!(Rarity::from_percent(9.99), Rarity::VeryRare);
        assert_eq!(Rarity::from_percent(10.0), Rarity::Rare);
        assert_eq!(Rarity::from_percent(19.99), Rarity::Rare);
        assert_eq!(Rarity::from_percent(20.0), Rarity::Uncommon);
        assert_eq!(Rarity::from_percent(49.99), Rarity::Uncommon);
        assert_eq!(Rarity::from_percent(50.0), Rarity::Common);
        assert_eq!(Rarity::from_percent(100.0), Rarity::Common);
    }

    #[test]
    fn displays_rarity() {
        assert_eq!(Rarity::UltraRare.to_string(), "Ultra Rare");
        assert_eq!(Rarity::Common.to_string(), "Common");
    }
}
