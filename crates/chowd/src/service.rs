//! Restaurant service: providers plus the catalog cache.

use crate::config::Config;
use crate::sources::{self, BlogSource, SeedSource, SourceError, SourceProvider, StorePageSource};
use async_trait::async_trait;
use chow_common::{merge, Catalog, CatalogCache, MergeReport, Restaurant, SourceBatch};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct RestaurantService {
    providers: Vec<Box<dyn SourceProvider>>,
    cache: CatalogCache,
}

impl RestaurantService {
    pub fn new(providers: Vec<Box<dyn SourceProvider>>, ttl: Duration) -> Self {
        Self {
            providers,
            cache: CatalogCache::new(ttl),
        }
    }

    /// Curated lists first, then the configured scraper
    pub fn from_config(config: &Config) -> Self {
        let blog = BlogSource::new(config.blog_urls(), config.scrape_timeout());
        let scraper: Box<dyn SourceProvider> = if config.use_dynamic_scraper {
            info!("Using store-page scraper");
            Box::new(WithFallback {
                primary: StorePageSource::new(config.scrape_timeout()),
                fallback: blog,
            })
        } else {
            Box::new(blog)
        };

        let providers: Vec<Box<dyn SourceProvider>> = vec![
            Box::new(SeedSource::lagos()),
            Box::new(SeedSource::regional()),
            scraper,
        ];
        Self::new(providers, config.cache_ttl())
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    async fn compute(&self) -> Catalog {
        merge(sources::collect(&self.providers).await)
    }

    /// The catalog for the current cache epoch
    pub async fn all_restaurants(&self) -> Arc<Catalog> {
        self.cache.get_or_refresh(|| self.compute()).await
    }

    pub async fn restaurant_by_id(&self, id: &str) -> Option<Restaurant> {
        self.all_restaurants().await.get(id).cloned()
    }

    /// Drop the cached catalog and recompute it now
    pub async fn refresh(&self) -> Arc<Catalog> {
        info!("Refreshing restaurant catalog");
        self.cache.clear();
        self.all_restaurants().await
    }

    /// Restaurants in `state`, optionally narrowed to one LGA
    pub async fn restaurants_for_location(&self, state: &str, lga: Option<&str>) -> Vec<Restaurant> {
        self.all_restaurants()
            .await
            .filter_location(state, lga)
            .cloned()
            .collect()
    }

    pub async fn last_report(&self) -> MergeReport {
        self.all_restaurants().await.report().clone()
    }
}

/// Runs `fallback` when `primary` fails or finds nothing.
///
/// A batch produced by the fallback is named `primary->fallback`, so the
/// merge report shows that the primary did not deliver.
struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

#[async_trait]
impl<P: SourceProvider, F: SourceProvider> SourceProvider for WithFallback<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
        match self.primary.fetch().await {
            Ok(records) if !records.is_empty() => Ok(records),
            Ok(_) => {
                warn!("{} found nothing, falling back to {}", self.primary.name(), self.fallback.name());
                self.fallback.fetch().await
            }
            Err(e) => {
                warn!("{} failed ({}), falling back to {}", self.primary.name(), e, self.fallback.name());
                self.fallback.fetch().await
            }
        }
    }

    async fn batch(&self) -> SourceBatch {
        let reason = match self.primary.fetch().await {
            Ok(records) if !records.is_empty() => {
                info!("Source {} returned {} restaurants", self.primary.name(), records.len());
                return SourceBatch::loaded(self.primary.name(), records);
            }
            Ok(_) => "no records".to_string(),
            Err(e) => e.to_string(),
        };
        warn!("{} failed ({}), falling back to {}", self.primary.name(), reason, self.fallback.name());

        let source = format!("{}->{}", self.primary.name(), self.fallback.name());
        match self.fallback.fetch().await {
            Ok(records) => SourceBatch::loaded(source, records),
            Err(e) => SourceBatch::failed(
                source,
                format!("{}: {}; {}: {}", self.primary.name(), reason, self.fallback.name(), e),
            ),
        }
    }
}
