//! Single-shot retrieval, filtering and ordering of a remote item list.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable records and request options
//! - [`core`] - Pure transformations (decoding, validation, ordering)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Pipeline
//!
//! A [`Fetcher`] issues one GET and decodes the body into [`Record`]s. The
//! outcome is handed to [`order`], which drops records without a name and
//! sorts the rest by `(list_id, numeric name suffix)`, or passes a failure
//! through untouched. [`Pipeline::spawn`] runs both on a background task
//! behind a cancellable [`PipelineHandle`].
//!
//! ```no_run
//! use itemlist_fetch::{DEFAULT_URL, Fetcher, OrderingPolicy, Pipeline, ReqwestClient};
//!
//! # async fn demo() -> itemlist_fetch::Result<()> {
//! let fetcher = Fetcher::new(ReqwestClient::new()?);
//! let pipeline = Pipeline::new(fetcher, OrderingPolicy::FilterAndSort);
//! let records = pipeline.spawn(DEFAULT_URL).join().await?;
//! for record in &records {
//!     println!("{} {:?} {}", record.list_id, record.name, record.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{OrderingPolicy, group_by_list_id, name_sort_key, order};
pub use data::{DEFAULT_URL, FetchOptions, Record};
pub use effects::{
    CancellationToken, Fetcher, HttpClient, HttpResponse, Pipeline, PipelineHandle, collapse,
};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{Error, Result};
