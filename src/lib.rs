//! A typed client for the Steam Web API covering player profiles, game libraries,
//! achievements, news and bans.
//! 
//! ```no_run
//! use steam_webapi::{SteamWebAPI, SteamID};
//! 
//! # async fn run() -> Result<(), steam_webapi::error::Error> {
//! let api = SteamWebAPI::new("API_KEY")?;
//! let steamid = SteamID::from(76561198025885249);
//! let players = api.get_player_summaries(&[steamid]).await?;
//! 
//! for player in players {
//!     println!("{} is {}", player.display_name(), player.online_status());
//! }
//! # Ok(())
//! # }
//! ```

mod api;
pub mod enums;
pub mod error;
pub mod response;
pub mod serialize;
pub mod time;
pub mod transport;
pub mod types;

pub use api::{SteamWebAPI, SteamWebAPIBuilder, MAX_STEAMIDS};
pub use error::Error;
pub use transport::{ReqwestTransport, Transport};
pub use steamid_ng::SteamID;

/// A result with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
