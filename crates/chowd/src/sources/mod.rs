//! Source providers: everything that yields restaurant listings.
//!
//! Each provider runs to completion on its own; a failure becomes a `Failed`
//! batch in the merge report and the remaining providers still run. Nothing
//! is retried.

pub mod blog;
pub mod seed;
pub mod store;

use async_trait::async_trait;
use chow_common::{Restaurant, SourceBatch};
use std::time::Duration;
use tracing::{info, warn};

pub use blog::BlogSource;
pub use seed::SeedSource;
pub use store::StorePageSource;

/// User agent sent to scrape targets
pub const USER_AGENT: &str = concat!("chowd/", env!("CARGO_PKG_VERSION"));

/// Source errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No page could be fetched ({0} attempted)")]
    AllPagesFailed(usize),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Network(e.to_string())
    }
}

/// Anything that produces normalized restaurants
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// Stable name used in logs and the merge report
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError>;

    /// Fetch and label the result for the merge report (`Err` → `Failed`)
    async fn batch(&self) -> SourceBatch {
        match self.fetch().await {
            Ok(records) => {
                info!("Source {} returned {} restaurants", self.name(), records.len());
                SourceBatch::loaded(self.name(), records)
            }
            Err(e) => {
                warn!("Source {} failed: {}", self.name(), e);
                SourceBatch::failed(self.name(), e.to_string())
            }
        }
    }
}

/// Run providers in order and turn each result into a batch
pub async fn collect(providers: &[Box<dyn SourceProvider>]) -> Vec<SourceBatch> {
    let mut batches = Vec::with_capacity(providers.len());
    for provider in providers {
        batches.push(provider.batch().await);
    }
    batches
}

/// HTTP client shared by the scrapers
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(SourceError::from)
}

/// GET a page and return its body, treating non-2xx as an error
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, SourceError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chow_common::{normalize, RawRestaurant, SourceOutcome};

    struct Fixed(&'static str, usize);
    struct Broken;

    #[async_trait]
    impl SourceProvider for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
            Ok((0..self.1)
                .map(|i| normalize(RawRestaurant::new(format!("{} {}", self.0, i))).unwrap())
                .collect())
        }
    }

    #[async_trait]
    impl SourceProvider for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
            Err(SourceError::Network("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_collect_keeps_order_and_failures() {
        let providers: Vec<Box<dyn SourceProvider>> = vec![
            Box::new(Fixed("seed", 2)),
            Box::new(Broken),
            Box::new(Fixed("empty", 0)),
        ];
        let batches = collect(&providers).await;

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].source, "seed");
        assert!(matches!(&batches[0].outcome, SourceOutcome::Loaded(r) if r.len() == 2));
        assert!(matches!(&batches[1].outcome, SourceOutcome::Failed(reason) if reason.contains("refused")));
        assert_eq!(batches[2].outcome, SourceOutcome::Empty);
    }
}
