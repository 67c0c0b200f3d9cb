use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client, ClientBuilder, Url};
use serde_json::Value;

use crate::configuration::BookingApiSettings;
use crate::domain::BookingRequest;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum BookingError {
    #[error("The booking api declined the request with status {status}.")]
    Rejected { status: u16, detail: Option<String> },
    #[error("Failed to reach the booking api.")]
    Transport(#[source] reqwest::Error),
    #[error("The booking api answered with a body that is not JSON.")]
    Undecodable(#[source] reqwest::Error),
}

impl std::fmt::Debug for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl BookingError {
    /// True when no usable answer came back from the server.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Anything that can deliver a booking request to the backend.
pub trait BookingApi {
    fn book(&self, request: &BookingRequest) -> impl Future<Output = Result<(), BookingError>>;
}

pub struct BookingClient {
    http_client: Client,
    url: Url,
}

impl BookingClient {
    pub fn new(config: BookingApiSettings) -> anyhow::Result<Self> {
        let url = config.base_url.booking_endpoint();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            "application/json"
                .parse()
                .map_err(|e| anyhow::anyhow!("Failed to parse accept header: {e}"))?,
        );

        let http_client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_millis))
            .build()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        Ok(Self { http_client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Any 2xx answer is a success. The body must be JSON whatever the status; on a
    /// non-2xx answer its `detail` string, if any, is carried in the error.
    #[tracing::instrument(
        name = "Sending a booking request",
        skip(self, request),
        fields(booking_email = %request.email, selected_options = request.selected_options.len())
    )]
    pub async fn book(&self, request: &BookingRequest) -> Result<(), BookingError> {
        let response = self
            .http_client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(BookingError::Transport)?;

        let status = response.status();
        let body: Value = response.json().await.map_err(BookingError::Undecodable)?;

        if status.is_success() {
            return Ok(());
        }
        let detail = body
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Err(BookingError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

impl BookingApi for BookingClient {
    async fn book(&self, request: &BookingRequest) -> Result<(), BookingError> {
        BookingClient::book(self, request).await
    }
}
