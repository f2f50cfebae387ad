//! Enumerated types.

mod ban_severity;
mod client_type;
mod community_visibility_state;
mod content_descriptor;
mod feed_type;
mod persona_state;
mod persona_state_flags;
mod platform;
mod rarity;

pub use ban_severity::BanSeverity;
pub use client_type::ClientType;
pub use community_visibility_state::CommunityVisibilityState;
pub use content_descriptor::ContentDescriptor;
pub use feed_type::FeedType;
pub use persona_state::PersonaState;
pub use persona_state_flags::PersonaStateFlags;
pub use platform::Platform;
pub use rarity::Rarity;
