//! Multi-source merge.
//!
//! Batches are merged in the order given and within a batch in record order.
//! The first record accepted for an id wins; later records with the same id
//! are dropped even when they carry more data. Failed sources contribute
//! nothing and never stop the merge, but they show up in the [`MergeReport`].

use crate::restaurant::Restaurant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// What one source produced for this epoch
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    Loaded(Vec<Restaurant>),
    Empty,
    Failed(String),
}

impl SourceOutcome {
    /// `Loaded` with no records collapses to `Empty`
    pub fn from_records(records: Vec<Restaurant>) -> Self {
        if records.is_empty() {
            SourceOutcome::Empty
        } else {
            SourceOutcome::Loaded(records)
        }
    }
}

/// A named source's contribution
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch {
    pub source: String,
    pub outcome: SourceOutcome,
}

impl SourceBatch {
    pub fn loaded(source: impl Into<String>, records: Vec<Restaurant>) -> Self {
        Self {
            source: source.into(),
            outcome: SourceOutcome::from_records(records),
        }
    }

    pub fn failed(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            outcome: SourceOutcome::Failed(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Loaded,
    Empty,
    Failed,
}

/// Per-source line of the merge report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    pub status: SourceStatus,
    /// Records the source handed over
    pub offered: usize,
    /// Records that made it into the catalog
    pub accepted: usize,
    /// Records dropped because their id was already taken
    pub duplicates: usize,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    pub sources: Vec<SourceReport>,
    pub total: usize,
}

impl MergeReport {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources
            .iter()
            .filter(|s| s.status == SourceStatus::Failed)
    }
}

/// The merged, deduplicated collection for one cache epoch
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    index: HashMap<String, usize>,
    report: MergeReport,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.index.get(id).map(|&i| &self.restaurants[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    pub fn as_slice(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn report(&self) -> &MergeReport {
        &self.report
    }

    /// Records whose city equals `city`, ignoring case
    pub fn filter_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a Restaurant> + 'a {
        self.restaurants.iter().filter(move |r| {
            r.city
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(city))
        })
    }

    /// Records in `state`, optionally narrowed to one LGA
    pub fn filter_location<'a>(
        &'a self,
        state: &'a str,
        lga: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Restaurant> + 'a {
        self.restaurants.iter().filter(move |r| {
            r.state.as_deref() == Some(state)
                && lga.map_or(true, |l| r.lga.as_deref() == Some(l))
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Merge batches first-writer-wins by id
pub fn merge(batches: Vec<SourceBatch>) -> Catalog {
    let mut catalog = Catalog::default();

    for batch in batches {
        let report = match batch.outcome {
            SourceOutcome::Loaded(records) => {
                let offered = records.len();
                let mut accepted = 0;
                for record in records {
                    if catalog.index.contains_key(&record.id) {
                        debug!("Dropping duplicate {} from {}", record.id, batch.source);
                        continue;
                    }
                    catalog
                        .index
                        .insert(record.id.clone(), catalog.restaurants.len());
                    catalog.restaurants.push(record);
                    accepted += 1;
                }
                SourceReport {
                    source: batch.source,
                    status: SourceStatus::Loaded,
                    offered,
                    accepted,
                    duplicates: offered - accepted,
                    reason: None,
                }
            }
            SourceOutcome::Empty => SourceReport {
                source: batch.source,
                status: SourceStatus::Empty,
                offered: 0,
                accepted: 0,
                duplicates: 0,
                reason: None,
            },
            SourceOutcome::Failed(reason) => {
                warn!("Source {} contributed nothing: {}", batch.source, reason);
                SourceReport {
                    source: batch.source,
                    status: SourceStatus::Failed,
                    offered: 0,
                    accepted: 0,
                    duplicates: 0,
                    reason: Some(reason),
                }
            }
        };
        catalog.report.sources.push(report);
    }

    catalog.report.total = catalog.restaurants.len();
    info!(
        "Merged {} restaurants from {} sources",
        catalog.report.total,
        catalog.report.sources.len()
    );
    catalog
}
