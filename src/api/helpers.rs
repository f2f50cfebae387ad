use super::response::ApiErrorResponse;
use crate::error::{Error, ParameterError};
use steamid_ng::SteamID;
use serde::de::DeserializeOwned;

/// The most Steam IDs accepted in a single request.
pub const MAX_STEAMIDS: usize = 100;

/// Joins Steam IDs with commas for endpoints that accept a list.
pub fn join_steamids(steamids: &[SteamID]) -> Result<String, ParameterError> {
    if steamids.is_empty() {
        return Err(ParameterError::EmptySteamIds);
    }

    if steamids.len() > MAX_STEAMIDS {
        return Err(ParameterError::TooManySteamIds {
            count: steamids.len(),
            max: MAX_STEAMIDS,
        });
    }

    let joined = steamids
        .iter()
        .map(|steamid| u64::from(*steamid).to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(joined)
}

/// Decodes a response body. A body that does not match `D` but does carry an `"error"`
/// message is reported as [`Error::Api`].
pub fn parses_response<D>(body: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            if let Some(message) = serde_json::from_slice::<ApiErrorResponse>(body)
                .ok()
                .and_then(ApiErrorResponse::into_message)
            {
                log::warn!("Steam API error: {message}");
                return Err(Error::Api(message));
            }

            log::debug!("Error parsing response: {parse_error}");
            Err(Error::Parse(parse_error))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::response::GetPlayerAchievementsResponse;

    fn steamids(count: u64) -> Vec<SteamID> {
        (0..count)
            .map(|i| SteamID::from(76561197960265728 + i))
            .collect()
    }

    #[test]
    fn joins_steamids_with_commas() {
        let joined = join_steamids(&steamids(3)).unwrap();

        assert_eq!(joined, "76561197960265728,76561197960265729,76561197960265730");
    }

    #[test]
    fn rejects_empty_steamids() {
        assert_eq!(join_steamids(&[]), Err(ParameterError::EmptySteamIds));
    }

    #[test]
    fn rejects_too_many_steamids() {
        assert!(join_steamids(&steamids(100)).is_ok());
        assert_eq!(
            join_steamids(&steamids(101)),
            Err(ParameterError::TooManySteamIds { count: 101, max: 100 }),
        );
    }

    #[test]
    fn detects_api_error() {
        let body = include_bytes!("fixtures/get_player_achievements_error.json");
        let error = parses_response::<GetPlayerAchievementsResponse>(body).unwrap_err();

        assert!(matches!(error, Error::Api(message) if message == "Requested app has no stats"));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let error = parses_response::<GetPlayerAchievementsResponse>(b"<html></html>").unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let body = br#"{"playerstats":{"gameName":"Portal 2","achievements":[]}}"#;
        let error = parses_response::<GetPlayerAchievementsResponse>(body).unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }
}
