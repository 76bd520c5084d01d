//! I/O operations for item list retrieval.
//!
//! The HTTP seam, the fetcher built on it, and the cancellable background
//! pipeline that couples fetching with ordering.

mod cancel;
mod fetcher;
mod http;
mod pipeline;

pub use cancel::CancellationToken;
pub use fetcher::Fetcher;
pub use http::{HttpClient, HttpResponse};
pub use pipeline::{Pipeline, PipelineHandle, collapse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
