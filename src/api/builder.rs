use super::{SteamWebAPI, API_HOSTNAME, DEFAULT_TIMEOUT, USER_AGENT_STRING};
use crate::error::Error;
use crate::transport::{get_default_middleware, ReqwestTransport, Transport};
use std::sync::Arc;
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`SteamWebAPI`].
/// 
/// An API key from <https://steamcommunity.com/dev/apikey> is required for every endpoint
/// except global achievement percentages.
#[derive(Debug, Clone)]
pub struct SteamWebAPIBuilder {
    /// Your account's API key.
    pub(crate) api_key: Option<String>,
    /// The base URL requests are sent to.
    pub(crate) hostname: String,
    /// The timeout for requests made with the default client.
    pub(crate) timeout: Option<Duration>,
    /// User agent for requests made with the default client.
    pub(crate) user_agent: &'static str,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// Transport to use for requests. Takes precedence over `client`.
    pub(crate) transport: Option<Arc<dyn Transport>>,
}

impl Default for SteamWebAPIBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            hostname: API_HOSTNAME.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: USER_AGENT_STRING,
            client: None,
            transport: None,
        }
    }
}

impl SteamWebAPIBuilder {
    /// Creates a new [`SteamWebAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// The API key.
    pub fn api_key<T>(mut self, api_key: T) -> Self
    where
        T: Into<String>,
    {
        self.api_key = Some(api_key.into());
        self
    }
    
    /// The base URL requests are sent to. Defaults to `https://api.steampowered.com`.
    pub fn hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.hostname = hostname.into().trim_end_matches('/').to_string();
        self
    }
    
    /// The timeout for requests. Defaults to 30 seconds. Only applies to the default client.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
    
    /// The user agent for requests. Only applies to the default client.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }
    
    /// Client to use for requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }
    
    /// Transport to use for requests.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }
    
    /// Builds the [`SteamWebAPI`]. Fails if the default client cannot be created.
    pub fn build(self) -> Result<SteamWebAPI, Error> {
        let transport: Arc<dyn Transport> = match (self.transport, self.client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => {
                let client = get_default_middleware(self.user_agent, self.timeout)?;
                
                Arc::new(ReqwestTransport::new(client))
            },
        };
        
        Ok(SteamWebAPI {
            api_key: self.api_key,
            hostname: self.hostname,
            transport,
        })
    }
}
