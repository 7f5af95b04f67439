use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use http::{header::CONTENT_TYPE, response, Request};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::Error;

use super::{client::Client, endpoint::Endpoint};

#[async_trait]
pub trait Query<T, C>
where
    C: Client + ?Sized,
{
    async fn query(&self, client: &C) -> Result<T, Error>;
}

#[async_trait]
impl<E, T, C> Query<T, C> for E
where
    E: Endpoint + Sync,
    T: DeserializeOwned + Send + 'static,
    C: Client + ?Sized,
{
    async fn query(&self, client: &C) -> Result<T, Error> {
        let url = client.url(&self.endpoint())?;
        let body = self.body()?;
        let request = Request::builder()
            .method(self.method())
            .uri(url.as_str())
            .header(CONTENT_TYPE, "application/json");
        let response = client.exec(request, body).await?;

        if !response.status().is_success() {
            return Err(api_error(response));
        }
        let res: T = serde_json::from_slice(response.body())
            .context(format!("Parsing response of {}", url.path()))?;
        return Ok(res);
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

fn api_error(response: response::Response<Bytes>) -> Error {
    let status = response.status();
    let (code, message) = match serde_json::from_slice::<ErrorBody>(response.body()) {
        Ok(body) => (body.code, body.message),
        Err(_) => (
            "unknown".to_owned(),
            String::from_utf8_lossy(response.body()).into_owned(),
        ),
    };

    return Error::Api {
        status,
        code,
        message,
    };
}
