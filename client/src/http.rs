use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use folio_types::{ContactMessage, Endpoint, Payload};

use crate::FetchError;
use crate::retry::{RetryConfig, RetryOutcome, send_with_retry};

const CONNECT_TIMEOUT_SECS: u64 = 5;
const REQUEST_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Client for the portfolio REST API.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: reqwest::Client,
    base: Url,
    retry: RetryConfig,
}

impl PortfolioClient {
    /// `base_url` may carry a path prefix; endpoint paths are appended to it.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base_url.trim())?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http,
            base,
            retry: RetryConfig::default(),
        })
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    /// GET `endpoint` and decode its body.
    ///
    /// 404 on a single-record endpoint yields the "not found" payload.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Payload, FetchError> {
        let url = self.url_for(&endpoint.path())?;
        let outcome = send_with_retry(|| self.http.get(url.clone()), &self.retry).await;

        let response = match outcome {
            RetryOutcome::Success(response) => response,
            RetryOutcome::HttpError(response) => {
                let status = response.status();
                if status == StatusCode::NOT_FOUND
                    && let Some(payload) = Payload::not_found(endpoint)
                {
                    tracing::debug!(%url, "Record not found");
                    return Ok(payload);
                }
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                });
            }
            RetryOutcome::ConnectionError { attempts, source } => {
                tracing::warn!(%url, attempts, "Giving up on request: {source}");
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        };

        let body = response.bytes().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        Payload::decode(endpoint, &body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// POST the contact form. One attempt only.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), FetchError> {
        let url = self.url_for("/api/contact")?;
        let outcome = send_with_retry(
            || self.http.post(url.clone()).json(message),
            &RetryConfig::single_attempt(),
        )
        .await;

        match outcome {
            RetryOutcome::Success(_) => Ok(()),
            RetryOutcome::HttpError(response) => Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            }),
            RetryOutcome::ConnectionError { source, .. } => Err(FetchError::Transport {
                url: url.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PortfolioClient {
        PortfolioClient::new(&server.uri())
            .expect("client")
            .with_retry(RetryConfig {
                max_retries: 1,
                initial_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(2),
                jitter_factor: 0.0,
            })
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = PortfolioClient::new("http://localhost:5000/portfolio").expect("client");
        let url = client.url_for("/api/blog").expect("url");
        assert_eq!(url.as_str(), "http://localhost:5000/portfolio/api/blog");
    }

    #[tokio::test]
    async fn fetch_decodes_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/experiences"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "company": "Acme",
                    "role": "Engineer",
                    "duration": "2020 - Present",
                    "description": "Built things",
                    "order": 0
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let payload = client_for(&server)
            .fetch(&Endpoint::Experiences)
            .await
            .expect("fetch");
        match payload {
            Payload::Experiences(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].company, "Acme");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_profile_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Profile not found"})),
            )
            .mount(&server)
            .await;

        let payload = client_for(&server)
            .fetch(&Endpoint::Profile)
            .await
            .expect("fetch");
        assert_eq!(payload, Payload::Profile(None));
    }

    #[tokio::test]
    async fn missing_blog_post_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/blog/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let payload = client_for(&server)
            .fetch(&Endpoint::BlogPost("nope".to_string()))
            .await
            .expect("fetch");
        assert!(payload.is_not_found());
    }

    #[tokio::test]
    async fn list_404_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(&Endpoint::Music)
            .await
            .expect_err("should fail");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/skills"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(&Endpoint::Skills)
            .await
            .expect_err("should fail");
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn contact_posts_json_body_once() {
        let server = MockServer::start().await;
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice portfolio".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .and(body_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Nice portfolio"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .submit_contact(&message)
            .await
            .expect("contact");
    }

    #[tokio::test]
    async fn contact_failure_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit_contact(&ContactMessage::default())
            .await
            .expect_err("should fail");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
