use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ApiConfig;
use crate::{Error, Result};
use reqwest::header::{CONTENT_RANGE, RANGE};
use std::time::Duration;

const USER_AGENT: &str = concat!("pubassist/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.base_url.join(&request.path).map_err(|e| {
            Error::InvalidInput(format!("bad endpoint path '{}': {}", request.path, e))
        })?;

        tracing::debug!(
            method = ?request.method,
            url = %url,
            range = ?request.range,
            "dispatching API request"
        );

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(range) = request.range {
            builder = builder.header(RANGE, range.to_string());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        tracing::debug!(status, content_range = ?content_range, "API response");

        Ok(ApiResponse {
            status,
            content_range,
            body,
        })
    }
}
