//! `reqwest` implementation of [`DataStore`] for the hosted REST endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::{DataStore, Query, SupabaseError, Table};
use crate::config::SupabaseConfig;

/// Characters of a failed response body kept in the error message.
const ERROR_BODY_CHARS: usize = 200;
/// Characters of a failed response body written to the log.
const LOG_BODY_CHARS: usize = 500;

/// Client for `<project>/rest/v1/<table>`.
///
/// Cheap to clone; every clone shares one connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Arc<SupabaseClientInner>,
}

struct SupabaseClientInner {
    client: reqwest::Client,
    rest_url: Url,
    anon_key: SecretString,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("rest_url", &self.inner.rest_url.as_str())
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseClient {
    /// Create a client for the configured project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project URL cannot address the REST API or
    /// the HTTP client cannot be built.
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(SupabaseClientInner {
                client,
                rest_url: rest_url(&config.url)?,
                anon_key: config.anon_key.clone(),
            }),
        })
    }

    /// Full URL for a read, including the PostgREST parameters.
    fn select_url(&self, query: &Query) -> Result<Url, SupabaseError> {
        let mut url = self.inner.rest_url.join(query.table().as_str())?;
        url.query_pairs_mut().extend_pairs(query.to_params());
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let key = self.inner.anon_key.expose_secret();
        self.inner
            .client
            .request(method, url)
            .header("apikey", key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {key}"))
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

/// `<project>/rest/v1/`, tolerating a project URL with or without a trailing slash.
fn rest_url(project_url: &Url) -> Result<Url, SupabaseError> {
    let mut base = project_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("rest/v1/")?)
}

/// Turn a non-success response into [`SupabaseError::Api`], logging the body.
async fn check_status(
    table: Table,
    response: reqwest::Response,
) -> Result<reqwest::Response, SupabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!(
        table = %table,
        status = %status,
        body = %body.chars().take(LOG_BODY_CHARS).collect::<String>(),
        "Hosted store returned non-success status"
    );

    let message = if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.chars().take(ERROR_BODY_CHARS).collect()
    };

    Err(SupabaseError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl DataStore for SupabaseClient {
    #[instrument(skip(self), fields(table = %query.table()))]
    async fn select(&self, query: &Query) -> Result<Vec<Value>, SupabaseError> {
        let url = self.select_url(query)?;
        let response = self.request(reqwest::Method::GET, url).send().await?;
        let response = check_status(query.table(), response).await?;

        let text = response.text().await?;
        let rows: Vec<Value> = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %text.chars().take(LOG_BODY_CHARS).collect::<String>(),
                "Failed to parse hosted store response"
            );
            e
        })?;

        debug!(rows = rows.len(), "Select completed");
        Ok(rows)
    }

    #[instrument(skip(self, record), fields(table = %table))]
    async fn insert(&self, table: Table, record: Value) -> Result<(), SupabaseError> {
        let url = self.inner.rest_url.join(table.as_str())?;
        let response = self
            .request(reqwest::Method::POST, url)
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await?;
        let response = check_status(table, response).await?;

        debug!(status = %response.status(), "Insert completed");
        Ok(())
    }
}
