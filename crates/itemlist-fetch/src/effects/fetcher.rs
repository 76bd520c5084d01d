use crate::core::{decode_records, is_success, validate_url};
use crate::data::{FetchOptions, Record};
use crate::effects::cancel::CancellationToken;
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};

/// Retrieves and decodes a remote item list with a single GET.
///
/// Every failure (bad URL, transport error, non-2xx status, malformed body)
/// is returned as an [`Error`] and logged here; nothing is retried.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher with the provided HTTP client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch and decode the item list at `url`.
    ///
    /// An empty JSON array is a successful, empty result.
    pub async fn fetch(&self, url: &str) -> Result<Vec<Record>> {
        self.fetch_once(url).await.inspect_err(|e| {
            tracing::warn!(url, error = %e, "item list fetch failed");
        })
    }

    /// Like [`fetch`](Self::fetch), but gives up as soon as `token` is
    /// cancelled, dropping any in-flight request.
    pub async fn fetch_cancellable(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Record>> {
        if token.is_cancelled() {
            tracing::debug!(url, "fetch cancelled before request");
            return Err(Error::Cancelled);
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(url, "fetch cancelled while in flight");
                Err(Error::Cancelled)
            }
            outcome = self.fetch(url) => outcome,
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<Record>> {
        let parsed = validate_url(url)?;

        tracing::debug!(url = %parsed, "requesting item list");
        let response = self
            .client
            .get(parsed.as_str(), &self.options)
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !is_success(response.status) {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        let records = decode_records(&response.body)?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            count = records.len(),
            "decoded item list"
        );
        Ok(records)
    }
}
