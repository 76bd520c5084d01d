use tokio::task::JoinHandle;

use crate::core::{OrderingPolicy, order};
use crate::data::Record;
use crate::effects::cancel::CancellationToken;
use crate::effects::fetcher::Fetcher;
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};

/// Fetch followed by ordering, run once per display session.
pub struct Pipeline<C: HttpClient> {
    fetcher: Fetcher<C>,
    policy: OrderingPolicy,
}

impl<C: HttpClient> Pipeline<C> {
    pub fn new(fetcher: Fetcher<C>, policy: OrderingPolicy) -> Self { Self { fetcher, policy } }

    /// Run the pipeline on the current task.
    pub async fn run(&self, url: &str) -> Result<Vec<Record>> {
        order(self.fetcher.fetch(url).await, self.policy)
    }

    /// Run the pipeline, stopping early once `token` is cancelled.
    pub async fn run_cancellable(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Record>> {
        order(self.fetcher.fetch_cancellable(url, token).await, self.policy)
    }

    /// Run the pipeline and reduce the outcome to the single-signal form.
    pub async fn run_collapsed(&self, url: &str) -> Option<Vec<Record>> {
        collapse(self.run(url).await)
    }
}

impl<C: HttpClient + 'static> Pipeline<C> {
    /// Start the pipeline on a background tokio task.
    ///
    /// Must be called from within a tokio runtime. The returned handle owns
    /// the task: dropping it without joining cancels the run.
    pub fn spawn(self, url: impl Into<String>) -> PipelineHandle {
        let url = url.into();
        let token = CancellationToken::new();
        let task_token = token.clone();

        tracing::debug!(%url, policy = %self.policy, "spawning item list pipeline");
        let task = tokio::spawn(async move { self.run_cancellable(&url, &task_token).await });

        PipelineHandle {
            token,
            task: Some(task),
        }
    }
}

/// Owner of a spawned pipeline run.
#[derive(Debug)]
pub struct PipelineHandle {
    token: CancellationToken,
    task: Option<JoinHandle<Result<Vec<Record>>>>,
}

impl PipelineHandle {
    /// Ask the run to stop. An in-flight request is dropped.
    pub fn cancel(&self) { self.token.cancel(); }

    /// A clone of the run's cancellation token, e.g. for a signal handler.
    pub fn token(&self) -> CancellationToken { self.token.clone() }

    pub fn is_finished(&self) -> bool { self.task.as_ref().is_none_or(JoinHandle::is_finished) }

    /// Wait for the run's outcome.
    ///
    /// Dropping the returned future before it completes cancels the run.
    pub async fn join(mut self) -> Result<Vec<Record>> {
        let joined = match self.task.as_mut() {
            Some(task) => task.await,
            None => return Err(Error::Task("pipeline already joined".to_string())),
        };
        self.task = None;

        match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(Error::Cancelled),
            Err(e) => Err(Error::Task(e.to_string())),
        }
    }
}

impl Drop for PipelineHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.token.cancel();
        }
    }
}

/// Collapse an outcome to `Some(records)` or `None` for any failure.
///
/// An empty list is still `Some`; only failures map to `None`.
pub fn collapse(outcome: Result<Vec<Record>>) -> Option<Vec<Record>> { outcome.ok() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_keeps_empty_success() {
        assert_eq!(collapse(Ok(Vec::new())), Some(Vec::<Record>::new()));
    }

    #[test]
    fn collapse_maps_any_failure_to_none() {
        assert_eq!(collapse(Err(Error::Cancelled)), None);
        assert_eq!(collapse(Err(Error::Network("reset".into()))), None);
        assert_eq!(
            collapse(Err(Error::HttpStatus {
                url: "https://example.com".into(),
                status: 503
            })),
            None
        );
    }
}
