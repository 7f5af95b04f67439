use core::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use http::{header::AUTHORIZATION, request, response, HeaderValue};
use url::Url;

use crate::{error::Error, NOTION_VERSION};

const NOTION_BASE_URL: &str = "https://api.notion.com/";

#[async_trait]
pub trait Client: Send + Sync {
    fn url(&self, endpoint: &str) -> Result<Url, Error>;

    async fn exec(
        &self,
        request: request::Builder,
        body: Vec<u8>,
    ) -> Result<response::Response<Bytes>, Error>;
}

pub struct RestClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl RestClient {
    pub fn new(token: &str) -> anyhow::Result<Self, Error> {
        return Self::with_base_url(token, NOTION_BASE_URL);
    }

    /// Same as [`RestClient::new`] but targets `base_url` instead of the public
    /// Notion API.
    pub fn with_base_url(token: &str, base_url: &str) -> anyhow::Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        return Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.to_owned(),
        });
    }

    async fn auth_req(
        &self,
        request: request::Builder,
        body: Vec<u8>,
    ) -> anyhow::Result<response::Response<Bytes>, Error> {
        let mut http_request = request.body(body)?;
        let headers = http_request.headers_mut();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(format!("Bearer {}", self.token).as_str())?,
        );
        headers.insert("notion-version", HeaderValue::from_static(NOTION_VERSION));
        let request: reqwest::Request = http_request.try_into()?;
        let resp = self.client.execute(request).await?;
        let mut http_resp = http::response::Response::builder()
            .status(resp.status())
            .version(resp.version());

        if let Some(http_headers) = http_resp.headers_mut() {
            for (key, value) in resp.headers() {
                http_headers.insert(key, value.to_owned());
            }
        }
        return Ok(http_resp.body(resp.bytes().await?)?);
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("RestClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish();
    }
}

#[async_trait]
impl Client for RestClient {
    fn url(&self, endpoint: &str) -> anyhow::Result<Url, Error> {
        let url = self.base_url.join(endpoint)?;

        return Ok(url);
    }

    async fn exec(
        &self,
        request: request::Builder,
        body: Vec<u8>,
    ) -> anyhow::Result<response::Response<Bytes>, Error> {
        return self.auth_req(request, body).await;
    }
}
