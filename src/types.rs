//! Types for common values in Steam responses.

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// A duration of play in minutes, as reported by Steam.
pub type Minutes = u32;

pub use crate::time::ServerTime;

// Types internally used by the crate.
use std::collections::BTreeMap;
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
/// Query parameters for a request.
pub type Query = BTreeMap<&'static str, String>;
