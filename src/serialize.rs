//! Contains custom serialization and deserialization functions.

use std::fmt;
use serde::de::{self, Deserializer, Unexpected, Visitor};

/// (De)serializes a [`SteamID`](steamid_ng::SteamID) as a 64-bit decimal string, which is how
/// the Web API sends them.
pub mod steamid_string {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use steamid_ng::SteamID;

    pub fn serialize<S>(steamid: &SteamID, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&u64::from(*steamid).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SteamID, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        s.parse::<u64>()
            .map(SteamID::from)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&s), &"a 64-bit steamid"))
    }
}

/// Deserializes a float that may be sent as either a number or a numeric string. Steam has
/// changed the type of achievement percentages between the two.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct FloatVisitor;

    impl<'de> Visitor<'de> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim()
                .parse::<f64>()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(FloatVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use steamid_ng::SteamID;

    #[derive(Deserialize, Serialize, Debug)]
    struct Player {
        #[serde(with = "steamid_string")]
        steamid: SteamID,
    }

    #[derive(Deserialize, Debug)]
    struct Percent {
        #[serde(deserialize_with = "number_or_string")]
        percent: f64,
    }

    #[test]
    fn parses_steamid_string() {
        let player: Player = serde_json::from_str(r#"{"steamid":"76561198025885249"}"#).unwrap();

        assert_eq!(u64::from(player.steamid), 76561198025885249);
        assert_eq!(serde_json::to_string(&player).unwrap(), r#"{"steamid":"76561198025885249"}"#);
    }

    #[test]
    fn rejects_non_numeric_steamid() {
        assert!(serde_json::from_str::<Player>(r#"{"steamid":"gaben"}"#).is_err());
        assert!(serde_json::from_str::<Player>(r#"{"steamid":76561198025885249}"#).is_err());
    }

    #[test]
    fn parses_percent_as_number_or_string() {
        let number: Percent = serde_json::from_str(r#"{"percent":12.5}"#).unwrap();
        let string: Percent = serde_json::from_str(r#"{"percent":"12.5"}"#).unwrap();
        let integer: Percent = serde_json::from_str(r#"{"percent":100}"#).unwrap();

        assert_eq!(number.percent, 12.5);
        assert_eq!(string.percent, 12.5);
        assert_eq!(integer.percent, 100.0);
        assert!(serde_json::from_str::<Percent>(r#"{"percent":"rare"}"#).is_err());
    }
}
