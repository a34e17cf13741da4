use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::AnnotatorError;

pub trait PharmGkbClient {
    /// GETs `url` and returns the raw response body.
    fn download(&self, url: &str) -> Result<Vec<u8>, AnnotatorError>;
}

impl<T: PharmGkbClient + ?Sized> PharmGkbClient for &T {
    fn download(&self, url: &str) -> Result<Vec<u8>, AnnotatorError> {
        (**self).download(url)
    }
}

#[derive(Clone)]
pub struct PharmGkbHttpClient {
    client: Client,
}

impl PharmGkbHttpClient {
    pub fn new() -> Result<Self, AnnotatorError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("pgx-annotate/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| AnnotatorError::Http(err.to_string()))?,
        );
        // Archives run to tens of megabytes; only the connect phase is bounded.
        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(30))
            .timeout(None)
            .build()
            .map_err(|err| AnnotatorError::Http(err.to_string()))?;
        Ok(Self { client })
    }
}

impl PharmGkbClient for PharmGkbHttpClient {
    fn download(&self, url: &str) -> Result<Vec<u8>, AnnotatorError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| AnnotatorError::Http(err.to_string()))?;
        if !response.status().is_success() {
            return Err(AnnotatorError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = response
            .bytes()
            .map_err(|err| AnnotatorError::Http(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}
