use std::sync::Arc;
use std::time::Duration;

/// Location of the item list the tool was written against.
pub const DEFAULT_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Request configuration for a single fetch.
///
/// The defaults leave everything to the transport: no extra headers and no
/// timeout override. There is deliberately no retry setting; a fetch is
/// always exactly one request.
///
/// # Examples
///
/// ```
/// use itemlist_fetch::FetchOptions;
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .timeout(Some(Duration::from_secs(10)))
///     .header("User-Agent", "itemlist/0.1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom HTTP headers sent with the request.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,

    /// Whole-request timeout. `None` keeps the transport default.
    ///
    /// Default: None
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    /// Add a single custom HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Set multiple custom HTTP headers at once, replacing existing ones.
    #[must_use]
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Arc::from(headers);
        self
    }

    /// Override the transport's request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
