//! Remote asset fetching contracts used to load SVG icon files.

use std::{cell::RefCell, collections::HashMap, fmt, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AssetFetcher`].
pub type AssetFetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure reported by an [`AssetFetcher`].
pub enum AssetFetchError {
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The request could not be completed or its body could not be read.
    Transport(String),
}

impl fmt::Display for AssetFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "unexpected HTTP status {status}"),
            Self::Transport(reason) => f.write_str(reason),
        }
    }
}

impl std::error::Error for AssetFetchError {}

/// Host service that fetches text assets by URL.
pub trait AssetFetcher {
    /// Fetches the body of `url` as text.
    ///
    /// Non-success responses resolve to [`AssetFetchError::Status`].
    fn fetch_text<'a>(&'a self, url: &'a str)
        -> AssetFetchFuture<'a, Result<String, AssetFetchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Asset fetcher for targets without network access. Every request fails.
pub struct NoopAssetFetcher;

impl AssetFetcher for NoopAssetFetcher {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> AssetFetchFuture<'a, Result<String, AssetFetchError>> {
        Box::pin(async move {
            Err(AssetFetchError::Transport(format!(
                "asset fetching is unavailable on this target: {url}"
            )))
        })
    }
}

#[derive(Debug, Default)]
struct MemoryFetcherInner {
    responses: HashMap<String, Result<String, AssetFetchError>>,
    requests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory asset fetcher serving canned responses keyed by URL.
pub struct MemoryAssetFetcher {
    inner: Rc<RefCell<MemoryFetcherInner>>,
}

impl MemoryAssetFetcher {
    /// Serves `body` with a success status for `url`.
    pub fn insert_text(&self, url: impl Into<String>, body: impl Into<String>) {
        self.inner
            .borrow_mut()
            .responses
            .insert(url.into(), Ok(body.into()));
    }

    /// Answers `url` with a non-success HTTP `status`.
    pub fn insert_status(&self, url: impl Into<String>, status: u16) {
        self.inner
            .borrow_mut()
            .responses
            .insert(url.into(), Err(AssetFetchError::Status(status)));
    }

    /// Returns every requested URL in request order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }
}

impl AssetFetcher for MemoryAssetFetcher {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> AssetFetchFuture<'a, Result<String, AssetFetchError>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(url.to_string());
            inner.responses.get(url).cloned().unwrap_or_else(|| {
                Err(AssetFetchError::Transport(format!(
                    "no response registered for {url}"
                )))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_fetcher_serves_canned_responses_and_records_requests() {
        let fetcher = MemoryAssetFetcher::default();
        fetcher.insert_text("/icons/star.svg", "<svg/>");
        fetcher.insert_status("/icons/gone.svg", 404);

        assert_eq!(
            block_on(fetcher.fetch_text("/icons/star.svg")),
            Ok("<svg/>".to_string())
        );
        assert_eq!(
            block_on(fetcher.fetch_text("/icons/gone.svg")),
            Err(AssetFetchError::Status(404))
        );
        assert!(matches!(
            block_on(fetcher.fetch_text("/icons/unknown.svg")),
            Err(AssetFetchError::Transport(_))
        ));
        assert_eq!(
            fetcher.requests(),
            vec![
                "/icons/star.svg".to_string(),
                "/icons/gone.svg".to_string(),
                "/icons/unknown.svg".to_string(),
            ]
        );
    }

    #[test]
    fn noop_fetcher_always_fails() {
        let err = block_on(NoopAssetFetcher.fetch_text("/a.svg")).expect_err("noop fails");
        assert!(err.to_string().contains("/a.svg"));
    }

    #[test]
    fn status_error_display_names_the_status() {
        assert_eq!(
            AssetFetchError::Status(500).to_string(),
            "unexpected HTTP status 500"
        );
    }
}
