//! Store-page scraper - the heavier source selected by `USE_DYNAMIC_SCRAPER`.
//!
//! Walks the per-area store listing pages instead of the blog. Card markup
//! is not stable, so a list of candidate selectors is tried in order and the
//! first one matching more than [`MIN_CARDS`] elements is used. Each card is
//! tied to the area it was found under, which supplies state, city and LGA.

use super::{fetch_html, http_client, SourceError, SourceProvider};
use async_trait::async_trait;
use chow_common::locations::store_url_for_area;
use chow_common::{normalize, RawRestaurant, Restaurant};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fewer matches than this means the selector hit page chrome, not cards
pub const MIN_CARDS: usize = 3;

const CARD_SELECTORS: &[&str] = &[
    "div[class*='vendor']",
    "div[class*='restaurant']",
    "div[class*='store']",
    "a[href*='/restaurants/']",
    "div[class*='card']",
    "[class*='item']",
];

/// Card titles that are navigation, not restaurants
const GENERIC_NAMES: &[&str] = &["restaurants", "stores", "vendors", "categories", "filter"];

static CARD_RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*(?:★|stars?|rating)").unwrap());

/// A store page and where it sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreArea {
    pub name: &'static str,
    pub lga: &'static str,
    pub state: &'static str,
}

const fn area(name: &'static str, lga: &'static str, state: &'static str) -> StoreArea {
    StoreArea { name, lga, state }
}

pub static STORE_AREAS: &[StoreArea] = &[
    area("Ikeja", "Ikeja", "Lagos"),
    area("Allen Avenue", "Ikeja", "Lagos"),
    area("Ogba", "Ikeja", "Lagos"),
    area("Alausa", "Ikeja", "Lagos"),
    area("Lekki", "Eti-Osa", "Lagos"),
    area("Victoria Island", "Eti-Osa", "Lagos"),
    area("Ikoyi", "Eti-Osa", "Lagos"),
    area("Ajah", "Eti-Osa", "Lagos"),
    area("Lekki Phase 1", "Eti-Osa", "Lagos"),
    area("Yaba", "Lagos Mainland", "Lagos"),
    area("Ebute Metta", "Lagos Mainland", "Lagos"),
    area("Surulere", "Surulere", "Lagos"),
    area("Gbagada", "Kosofe", "Lagos"),
    area("Ogudu", "Kosofe", "Lagos"),
    area("Maryland", "Kosofe", "Lagos"),
    area("Ketu", "Kosofe", "Lagos"),
    area("Oshodi", "Oshodi-Isolo", "Lagos"),
    area("Isolo", "Oshodi-Isolo", "Lagos"),
    area("Festac", "Amuwo-Odofin", "Lagos"),
    area("Egbeda", "Alimosho", "Lagos"),
    area("Ikotun", "Alimosho", "Lagos"),
    area("Wuse", "Abuja Municipal", "FCT"),
    area("Garki", "Abuja Municipal", "FCT"),
    area("Gwarinpa", "Abuja Municipal", "FCT"),
    area("Maitama", "Abuja Municipal", "FCT"),
    area("Jabi", "Abuja Municipal", "FCT"),
    area("Utako", "Abuja Municipal", "FCT"),
    area("Ibadan", "Ibadan North", "Oyo"),
    area("Port Harcourt", "Port Harcourt", "Rivers"),
    area("Benin City", "Oredo", "Edo"),
];

pub struct StorePageSource {
    areas: Vec<StoreArea>,
    timeout: Duration,
}

impl StorePageSource {
    pub fn new(timeout: Duration) -> Self {
        Self::with_areas(STORE_AREAS.to_vec(), timeout)
    }

    pub fn with_areas(areas: Vec<StoreArea>, timeout: Duration) -> Self {
        Self { areas, timeout }
    }
}

#[async_trait]
impl SourceProvider for StorePageSource {
    fn name(&self) -> &str {
        "store"
    }

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
        let client = http_client(self.timeout)?;
        let mut records = Vec::new();
        let mut failures = 0;

        for (idx, area) in self.areas.iter().enumerate() {
            let url = store_url_for_area(area.name);
            debug!("[{}/{}] Scraping {}, {}", idx + 1, self.areas.len(), area.name, area.state);

            let html = match fetch_html(&client, &url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Skipping store page {}: {}", url, e);
                    failures += 1;
                    continue;
                }
            };

            let cards = parse_store_page(&html, area)?;
            info!("Found {} restaurants in {}", cards.len(), area.name);
            records.extend(cards.into_iter().filter_map(|raw| normalize(raw).ok()));
        }

        if !self.areas.is_empty() && failures == self.areas.len() {
            return Err(SourceError::AllPagesFailed(failures));
        }
        Ok(records)
    }
}

/// First selector that matches enough elements to be a card list
fn find_cards<'a>(document: &'a Html) -> Result<Vec<ElementRef<'a>>, SourceError> {
    for css in CARD_SELECTORS {
        let sel = Selector::parse(css).map_err(|e| SourceError::Parse(e.to_string()))?;
        let elements: Vec<ElementRef> = document.select(&sel).collect();
        if elements.len() > MIN_CARDS {
            debug!("Using selector {} ({} elements)", css, elements.len());
            return Ok(elements);
        }
    }
    Ok(Vec::new())
}

/// Parse all restaurant cards on one area's store page
pub fn parse_store_page(html: &str, area: &StoreArea) -> Result<Vec<RawRestaurant>, SourceError> {
    let document = Html::parse_document(html);
    let title_sels = ["h1", "h2", "h3", "h4", "h5"]
        .iter()
        .map(|t| Selector::parse(t).map_err(|e| SourceError::Parse(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    let link_sel = Selector::parse("a").map_err(|e| SourceError::Parse(e.to_string()))?;

    let cards = find_cards(&document)?
        .into_iter()
        .filter_map(|card| parse_card(&card, area, &title_sels, &link_sel))
        .collect();
    Ok(cards)
}

fn title_case(area: &str) -> String {
    area.split(|c: char| c == ' ' || c == '-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn parse_card(
    card: &ElementRef,
    area: &StoreArea,
    title_sels: &[Selector],
    link_sel: &Selector,
) -> Option<RawRestaurant> {
    let text: String = card.text().collect();

    let heading = title_sels.iter().find_map(|sel| {
        card.select(sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|name| name.chars().count() > 2)
    });
    let name = heading.or_else(|| {
        text.lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
    })?;

    if name.chars().count() < 2 || GENERIC_NAMES.contains(&name.to_lowercase().as_str()) {
        return None;
    }

    let city = title_case(area.name);
    let mut raw = RawRestaurant::new(name).with_place(&city, area.state, area.lga);
    raw.location = Some(format!("{}, {}", city, area.state));
    raw.delivery_areas = vec![city];

    // The card may itself be the link
    raw.url = card
        .value()
        .attr("href")
        .or_else(|| card.select(link_sel).next().and_then(|a| a.value().attr("href")))
        .map(str::to_string);

    if let Some(caps) = CARD_RATING_RE.captures(&text) {
        raw.rating = caps[1].parse().ok();
    }

    Some(raw)
}
