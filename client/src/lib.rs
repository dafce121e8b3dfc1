//! Data sources for portfolio content.
//!
//! # Architecture
//!
//! - [`PortfolioClient`] - REST client for the portfolio API (`/api/...`)
//! - [`BundledData`] - the same content compiled into the binary, used when no
//!   API base URL is configured
//! - [`DataSource`] - dispatch over the two, so callers never care which one
//!   answered
//!
//! # Error Handling
//!
//! Every failure is a [`FetchError`]. A 404 from a single-record endpoint
//! (profile, blog post) is not an error: it decodes to the "not found"
//! [`Payload`] variant.

mod bundled;
mod error;
mod http;
pub mod retry;

pub use bundled::BundledData;
pub use error::FetchError;
pub use http::PortfolioClient;
pub use retry::RetryConfig;

use folio_types::{ContactMessage, Endpoint, Payload};

/// Where portfolio content comes from.
#[derive(Debug)]
pub enum DataSource {
    Http(PortfolioClient),
    Bundled(BundledData),
}

impl DataSource {
    /// HTTP when a base URL is given, bundled data otherwise.
    pub fn from_base_url(base_url: Option<&str>) -> Result<Self, FetchError> {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Ok(DataSource::Http(PortfolioClient::new(url)?)),
            None => Ok(DataSource::Bundled(BundledData::load()?)),
        }
    }

    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Payload, FetchError> {
        match self {
            DataSource::Http(client) => client.fetch(endpoint).await,
            DataSource::Bundled(data) => Ok(data.fetch(endpoint)),
        }
    }

    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), FetchError> {
        match self {
            DataSource::Http(client) => client.submit_contact(message).await,
            DataSource::Bundled(_) => Err(FetchError::Offline),
        }
    }

    /// Short description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            DataSource::Http(client) => format!("api {}", client.base_url()),
            DataSource::Bundled(_) => "bundled data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_base_url_uses_bundled_data() {
        let source = DataSource::from_base_url(Some("  ")).expect("source");
        assert!(matches!(source, DataSource::Bundled(_)));
        let payload = source.fetch(&Endpoint::Profile).await.expect("fetch");
        assert!(matches!(payload, Payload::Profile(Some(_))));
    }

    #[tokio::test]
    async fn bundled_source_cannot_send_contact() {
        let source = DataSource::from_base_url(None).expect("source");
        let result = source.submit_contact(&ContactMessage::default()).await;
        assert!(matches!(result, Err(FetchError::Offline)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = DataSource::from_base_url(Some("not a url"));
        assert!(matches!(result, Err(FetchError::Url(_))));
    }
}
