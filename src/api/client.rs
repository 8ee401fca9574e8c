use std::time::Duration;

use reqwest::{Client as HttpClient, Response, StatusCode, Url};

use crate::{
    api::ApiError,
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// HTTP client for the transactions REST API.
///
/// Every method maps the five CRUD intents onto `{base_url}/transactions`.
/// Failures are returned, never swallowed: deciding whether to fall back to
/// the mock store is the caller's job.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: Url,
}

impl ApiClient {
    /// Where the transactions API listens by default, e.g. the `stub_api` binary.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";

    /// How long to wait for a response before giving up.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a client for the API at `base_url`, e.g. "http://localhost:8080/api".
    ///
    /// # Errors
    /// Returns [ApiError::InvalidBaseUrl] if `base_url` is not an absolute
    /// URL that can have path segments appended.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;

        if parsed_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: parsed_url,
        })
    }

    /// GET /transactions
    pub async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.transactions_url(None)?;
        tracing::debug!("GET {url}");

        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(response.json().await?)
    }

    /// GET /transactions/{id}
    ///
    /// Returns `Ok(None)` if the API responds with 404.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Transaction>, ApiError> {
        let url = self.transactions_url(Some(id))?;
        tracing::debug!("GET {url}");

        let response = self.http_client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(Some(response.json().await?))
    }

    /// POST /transactions
    ///
    /// Returns the stored transaction, including the ID the API assigned.
    pub async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        let url = self.transactions_url(None)?;
        tracing::debug!("POST {url}");

        let response = self
            .http_client
            .post(url)
            .json(new_transaction)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(response.json().await?)
    }

    /// PUT /transactions/{id}
    ///
    /// Returns `Ok(None)` if the API responds with 404.
    pub async fn update(
        &self,
        id: &str,
        patch: &TransactionPatch,
    ) -> Result<Option<Transaction>, ApiError> {
        let url = self.transactions_url(Some(id))?;
        tracing::debug!("PUT {url}");

        let response = self.http_client.put(url).json(patch).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(Some(response.json().await?))
    }

    /// DELETE /transactions/{id}
    ///
    /// Returns `Ok(false)` if the API responds with 404.
    pub async fn delete(&self, id: &str) -> Result<bool, ApiError> {
        let url = self.transactions_url(Some(id))?;
        tracing::debug!("DELETE {url}");

        let response = self.http_client.delete(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(true)
    }

    /// Build `{base_url}/transactions` or `{base_url}/transactions/{id}`.
    ///
    /// The ID is percent-encoded as a single path segment.
    fn transactions_url(&self, id: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("transactions");

            if let Some(id) = id {
                segments.push(id);
            }
        }

        Ok(url)
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_server_error() {
        tracing::warn!("Server error {status}: {body}");
    }

    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}
