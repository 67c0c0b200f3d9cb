use reqwest::Url;
use serde::Deserialize;

/// Path of the booking endpoint, relative to the backend root.
pub const BOOKING_PATH: &str = "/api/book";

/// Root URL of an http(s) booking backend. Must not carry a path, query or fragment.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct ApiBaseUrl(Url);

impl AsRef<Url> for ApiBaseUrl {
    fn as_ref(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<String> for ApiBaseUrl {
    type Error = String;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::parse(&url)
    }
}

impl ApiBaseUrl {
    pub fn parse(url: &str) -> Result<Self, String> {
        let url = Url::parse(url).map_err(|e| format!("{url} is not a url: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("{url} is not an http(s) url."));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(format!("{url} carries more than a scheme, host and port."));
        }
        Ok(Self(url))
    }

    /// Where booking requests are posted.
    pub fn booking_endpoint(&self) -> Url {
        let mut endpoint = self.0.clone();
        endpoint.set_path(BOOKING_PATH);
        endpoint
    }
}
