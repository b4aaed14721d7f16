//! Bundled curated lists as a source.

use super::{SourceError, SourceProvider};
use async_trait::async_trait;
use chow_common::seed::{lagos_restaurants, seed_restaurants};
use chow_common::{normalize, RawRestaurant, Restaurant};
use tracing::debug;

pub struct SeedSource {
    name: &'static str,
    entries: fn() -> Vec<RawRestaurant>,
    exclude_state: Option<&'static str>,
}

impl SeedSource {
    /// The in-depth Lagos list
    pub fn lagos() -> Self {
        Self {
            name: "lagos",
            entries: lagos_restaurants,
            exclude_state: None,
        }
    }

    /// The multi-state list minus Lagos, which `lagos()` already covers
    pub fn regional() -> Self {
        Self {
            name: "seed",
            entries: seed_restaurants,
            exclude_state: Some("Lagos"),
        }
    }
}

#[async_trait]
impl SourceProvider for SeedSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
        let records = (self.entries)()
            .into_iter()
            .filter_map(|raw| match normalize(raw) {
                Ok(r) => Some(r),
                Err(e) => {
                    debug!("Skipping seed entry: {}", e);
                    None
                }
            })
            .filter(|r| {
                self.exclude_state
                    .map_or(true, |excluded| r.state.as_deref() != Some(excluded))
            })
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_regional_skips_lagos() {
        let records = SeedSource::regional().fetch().await.unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.state.as_deref() == Some("FCT")));
    }

    #[tokio::test]
    async fn test_lagos_list() {
        let records = SeedSource::lagos().fetch().await.unwrap();
        assert!(records.iter().all(|r| r.state.as_deref() == Some("Lagos")));
    }
}
