use gloo_net::http::Request;
use anyhow::bail;
use anyhow::Result;
use common::models::ErrorQuery;
use std::fmt;

/// A response that came back with a non-2xx status.

#[derive(Debug)]
pub struct StatusError {
    pub status: u16,
    pub status_text: String,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "request failed with {} ({})", self.status, self.status_text)
    }
}

impl std::error::Error for StatusError {}

/// Requests `uri` and decodes the json body.

pub async fn get<T>(uri: &str) -> Result<T>
    where T: serde::de::DeserializeOwned
{
    let resp = Request::get(uri)
        .header("Accept", "application/json")
        .send().await?;

    if !resp.ok() {
        bail!(StatusError {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    };

    Ok(resp.json::<T>().await?)
}

/// Builds the error page query for a failed request: the http status if
/// there was one, otherwise a 500.

pub fn error_query(err: &anyhow::Error) -> ErrorQuery {
    let code = match err.downcast_ref::<StatusError>() {
        Some(status) => status.status,
        None => 500,
    };
    ErrorQuery::new(code, err.to_string())
}
