use std::fmt;
use std::ops::BitOr;
use serde::{Deserialize, Serialize};

/// A set of flags describing a player's persona, decoded from the `personastateflags` bitmask.
///
/// The bit values are the ones Steam sends. The client type flags start at `256`, so bits
/// `16` through `128` are not client types.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(transparent)]
pub struct PersonaStateFlags(u32);

impl PersonaStateFlags {
    pub const HAS_RICH_PRESENCE: Self = Self(1);
    pub const IN_JOINABLE_GAME: Self = Self(1 << 1);
    pub const GOLDEN: Self = Self(1 << 2);
    pub const REMOTE_PLAY_TOGETHER: Self = Self(1 << 3);
    pub const CLIENT_TYPE_WEB: Self = Self(1 << 8);
    pub const CLIENT_TYPE_MOBILE: Self = Self(1 << 9);
    pub const CLIENT_TYPE_TENFOOT: Self = Self(1 << 10);
    pub const CLIENT_TYPE_VR: Self = Self(1 << 11);
    pub const LAUNCH_TYPE_GAMEPAD: Self = Self(1 << 12);
    pub const LAUNCH_TYPE_COMPAT_TOOL: Self = Self(1 << 13);

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set from raw bits. Bits without a name are kept.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Whether all flags in `other` are set.
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The names of the known flags that are set, lowest bit first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        NAMED_FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

static NAMED_FLAGS: [(PersonaStateFlags, &str); 10] = [
    (PersonaStateFlags::HAS_RICH_PRESENCE, "HasRichPresence"),
    (PersonaStateFlags::IN_JOINABLE_GAME, "InJoinableGame"),
    (PersonaStateFlags::GOLDEN, "Golden"),
    (PersonaStateFlags::REMOTE_PLAY_TOGETHER, "RemotePlayTogether"),
    (PersonaStateFlags::CLIENT_TYPE_WEB, "ClientTypeWeb"),
    (PersonaStateFlags::CLIENT_TYPE_MOBILE, "ClientTypeMobile"),
    (PersonaStateFlags::CLIENT_TYPE_TENFOOT, "ClientTypeTenfoot"),
    (PersonaStateFlags::CLIENT_TYPE_VR, "ClientTypeVR"),
    (PersonaStateFlags::LAUNCH_TYPE_GAMEPAD, "LaunchTypeGamepad"),
    (PersonaStateFlags::LAUNCH_TYPE_COMPAT_TOOL, "LaunchTypeCompatTool"),
];

impl From<u32> for PersonaStateFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl BitOr for PersonaStateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for PersonaStateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }

        let names = self.names().collect::<Vec<_>>();

        if names.is_empty() {
            write!(f, "{:#x}", self.0)
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Player {
        personastateflags: PersonaStateFlags,
    }

    #[test]
    fn deserializes_empty_flags() {
        let player: Player = serde_json::from_str(r#"{"personastateflags":0}"#).unwrap();

        assert!(player.personastateflags.is_empty());
        assert_eq!(player.personastateflags, PersonaStateFlags::empty());
    }

    #[test]
    fn tests_individual_flags() {
        let player: Player = serde_json::from_str(r#"{"personastateflags":2050}"#).unwrap();
        let flags = player.personastateflags;

        assert!(flags.contains(PersonaStateFlags::CLIENT_TYPE_VR));
        assert!(flags.contains(PersonaStateFlags::IN_JOINABLE_GAME));
        assert!(!flags.contains(PersonaStateFlags::GOLDEN));
        assert!(flags.contains(PersonaStateFlags::CLIENT_TYPE_VR | PersonaStateFlags::IN_JOINABLE_GAME));
        assert_eq!(flags.to_string(), "InJoinableGame | ClientTypeVR");
    }

    #[test]
    fn keeps_unnamed_bits() {
        let flags = PersonaStateFlags::from_bits(1 << 20);

        assert_eq!(flags.bits(), 1 << 20);
        assert_eq!(flags.names().count(), 0);
        assert_eq!(flags.to_string(), "0x100000");
    }
}
