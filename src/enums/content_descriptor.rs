use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Deserialize;
use serde_repr::Serialize_repr;
use strum_macros::Display;

/// A content descriptor attached to a game on the store.
///
/// Descriptors added by Steam after this crate was written deserialize as
/// [`ContentDescriptor::GeneralMatureContent`].
#[derive(Debug, Serialize_repr, Deserialize, Display, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(from = "i32")]
#[repr(i32)]
pub enum ContentDescriptor {
    #[strum(serialize = "Some Nudity or Sexual Content")]
    SomeNudityOrSexualContent = 1,
    #[strum(serialize = "Frequent Violence or Gore")]
    FrequentViolenceOrGore = 2,
    #[strum(serialize = "Adult Only Sexual Content")]
    AdultOnlySexualContent = 3,
    #[strum(serialize = "Frequent Nudity or Sexual Content")]
    FrequentNudityOrSexualContent = 4,
    #[num_enum(default)]
    #[strum(serialize = "General Mature Content")]
    GeneralMatureContent = 5,
}

impl ContentDescriptor {
    /// Whether this descriptor is for sexual content.
    pub fn is_sexual(&self) -> bool {
        matches!(
            self,
            Self::SomeNudityOrSexualContent |
            Self::AdultOnlySexualContent |
            Self::FrequentNudityOrSexualContent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Game {
        content_descriptorids: Vec<ContentDescriptor>,
    }

    #[test]
    fn deserializes_content_descriptors() {
        let game: Game = serde_json::from_str(r#"{"content_descriptorids":[2,5]}"#).unwrap();

        assert_eq!(game.content_descriptorids, vec![
            ContentDescriptor::FrequentViolenceOrGore,
            ContentDescriptor::GeneralMatureContent,
        ]);
    }

    #[test]
    fn unknown_descriptor_falls_back_to_general_mature_content() {
        let game: Game = serde_json::from_str(r#"{"content_descriptorids":[1,99]}"#).unwrap();

        assert_eq!(game.content_descriptorids, vec![
            ContentDescriptor::SomeNudityOrSexualContent,
            ContentDescriptor::GeneralMatureContent,
        ]);
    }
}
