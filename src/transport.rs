//! The HTTP layer the client sends its requests through.

use crate::error::TransportError;
use crate::types::{HttpClient, Query};
use std::time::Duration;
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use reqwest::header;
use reqwest_middleware::ClientBuilder;

/// Performs GET requests. Implement this to send requests through something other than
/// [`reqwest`], or to stub out the network in tests.
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends a GET request to `url` with `query` and returns the response body. Responses with
    /// a status outside of 200-299 must fail with [`TransportError::Http`].
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a Query,
    ) -> BoxFuture<'a, Result<Bytes, TransportError>>;
}

/// A [`Transport`] backed by a [`reqwest_middleware::ClientWithMiddleware`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: HttpClient,
}

impl ReqwestTransport {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
        }
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a Query,
    ) -> BoxFuture<'a, Result<Bytes, TransportError>> {
        async move {
            let response = self.client.get(url)
                .query(query)
                .send()
                .await?;

            check_response(response).await
        }.boxed()
    }
}

/// Builds the default client.
pub fn get_default_middleware(
    user_agent_string: &'static str,
    timeout: Option<Duration>,
) -> Result<HttpClient, TransportError> {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let mut builder = reqwest::ClientBuilder::new()
        .default_headers(headers);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    let client = builder
        .build()
        .map_err(TransportError::Reqwest)?;

    Ok(ClientBuilder::new(client).build())
}

async fn check_response(response: reqwest::Response) -> Result<Bytes, TransportError> {
    let status = response.status();

    if !status.is_success() {
        return Err(TransportError::Http(status));
    }

    Ok(response.bytes().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_client() {
        let client = get_default_middleware("steamkit", Some(Duration::from_secs(5)));

        assert!(client.is_ok());
    }
}
