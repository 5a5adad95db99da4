//! IP-geolocation over HTTPS.
//!
//! One GET per lookup, no retries. Transport errors, non-2xx statuses and
//! undecodable bodies each map to a [`LookupError`] variant; the detector
//! layer turns all of them into the "Unknown" sentinel.

use async_trait::async_trait;
use contextwise_core::error::LookupError;
use contextwise_core::probe::{GeoFix, GeoLookup};
use reqwest::header::ACCEPT;
use tracing::trace;

/// Geolocation via an ipinfo-style JSON endpoint.
pub struct IpInfoLookup {
    endpoint: String,
    client: reqwest::Client,
}

impl IpInfoLookup {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("contextwise/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl GeoLookup for IpInfoLookup {
    fn name(&self) -> &str {
        "ipinfo"
    }

    async fn lookup(&self) -> Result<GeoFix, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status_code: status.as_u16(),
            });
        }

        let fix: GeoFix = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        trace!(city = ?fix.city, country = ?fix.country, "Geolocation lookup succeeded");
        Ok(fix)
    }
}

/// Stand-in used when geolocation is switched off in config.
pub struct DisabledGeoLookup;

#[async_trait]
impl GeoLookup for DisabledGeoLookup {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn lookup(&self) -> Result<GeoFix, LookupError> {
        Err(LookupError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decodes_city_and_country() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ip":"203.0.113.7","city":"Chennai","region":"Tamil Nadu","country":"IN"}"#)
            .create_async()
            .await;

        let lookup = IpInfoLookup::new(format!("{}/json", server.url())).unwrap();
        let fix = lookup.lookup().await.unwrap();

        assert_eq!(fix.city.as_deref(), Some("Chennai"));
        assert_eq!(fix.country.as_deref(), Some("IN"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_fields_decode_as_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/json")
            .with_status(200)
            .with_body(r#"{"ip":"203.0.113.7","country":"DE"}"#)
            .create_async()
            .await;

        let lookup = IpInfoLookup::new(format!("{}/json", server.url())).unwrap();
        let fix = lookup.lookup().await.unwrap();

        assert_eq!(fix.city, None);
        assert_eq!(fix.country.as_deref(), Some("DE"));
    }

    #[tokio::test]
    async fn server_error_is_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/json")
            .with_status(500)
            .create_async()
            .await;

        let lookup = IpInfoLookup::new(format!("{}/json", server.url())).unwrap();
        let err = lookup.lookup().await.unwrap_err();
        assert_eq!(err, LookupError::Status { status_code: 500 });
    }

    #[tokio::test]
    async fn garbage_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/json")
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let lookup = IpInfoLookup::new(format!("{}/json", server.url())).unwrap();
        let err = lookup.lookup().await.unwrap_err();
        assert!(matches!(err, LookupError::Malformed(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_transport() {
        let lookup = IpInfoLookup::new("http://127.0.0.1:1/json").unwrap();
        let err = lookup.lookup().await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }

    #[tokio::test]
    async fn disabled_lookup_always_fails() {
        assert_eq!(DisabledGeoLookup.lookup().await, Err(LookupError::Disabled));
    }
}
