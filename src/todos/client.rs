//! HTTP client for todo API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the `todos` resource, handling URL construction, status checks and
//! response parsing.

use super::error::ApiError;
use super::resource::TaskId;
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};

const ENDPOINT: &str = "todos";

/// Makes requests to the todo API and tries to conform response data to the
/// requested type.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Return deserialized response data for a GET on the collection.
    ///
    pub async fn get_all<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let response = self.call(Method::GET, None, None::<&()>).await?;
        Self::parse(response).await
    }

    /// Send a request with a JSON body and return the deserialized response.
    ///
    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        id: Option<TaskId>,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.call(method, id, Some(body)).await?;
        Self::parse(response).await
    }

    /// Delete the entity and discard whatever body the server returns.
    ///
    pub async fn delete(&self, id: TaskId) -> Result<(), ApiError> {
        self.call(Method::DELETE, Some(id), None::<&()>).await?;
        Ok(())
    }

    /// Return the request URL for the collection or a single entity. The API
    /// expects a trailing slash on both.
    ///
    pub(crate) fn url(&self, id: Option<TaskId>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}/", self.base_url, ENDPOINT, id),
            None => format!("{}/{}/", self.base_url, ENDPOINT),
        }
    }

    /// Make request and return the response, or an error for any
    /// non-success status.
    ///
    async fn call<B: Serialize>(
        &self,
        method: Method,
        id: Option<TaskId>,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.url(id);
        log::debug!("{} {}", method, url);

        let mut request = self.http_client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("API request failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Deserialize the response body, logging the raw body if it does not
    /// match the expected shape.
    ///
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize API response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&bytes)
            );
            ApiError::Deserialization(e)
        })
    }
}
