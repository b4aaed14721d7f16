//! Blog scraper - the lightweight static-fetch source.
//!
//! The "get it here" blog posts list one restaurant per `<h2><a>` heading,
//! followed by paragraphs such as `Where: ...`, `Delivering to: ...`,
//! `Opening Hours: ...` and `4.5 out of 5`. Everything up to the next `<h2>`
//! or `<hr>` belongs to the heading above it.

use super::{fetch_html, http_client, SourceError, SourceProvider};
use async_trait::async_trait;
use chow_common::{normalize, RawRestaurant, Restaurant, DEFAULT_CUISINE};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+)\s*out of\s*5").unwrap());
static DELIVERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Delivering [Tt]o:\s*").unwrap());
static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Opening Hours:\s*|Hours:\s*").unwrap());
static POST_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"get-it-here-([a-z0-9-]+?)-on-chowdeck").unwrap());

/// Headings that are site chrome, not restaurants
const IGNORED_HEADINGS: &[&str] = &["chowdeck", "get it here"];

/// A listing that could not be used
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("heading has no restaurant name")]
    MissingName,
    #[error("'{0}' has no location")]
    MissingLocation(String),
}

/// One blog post and the dish it is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub url: String,
    pub specialty: Option<String>,
}

impl BlogPost {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let specialty = specialty_from_url(&url);
        Self { url, specialty }
    }
}

/// "get-it-here-jollof-rice-on-chowdeck" → "Jollof Rice"
pub fn specialty_from_url(url: &str) -> Option<String> {
    let caps = POST_SLUG_RE.captures(url)?;
    let words: Vec<String> = caps[1]
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    Some(words.join(" "))
}

pub struct BlogSource {
    posts: Vec<BlogPost>,
    timeout: Duration,
}

impl BlogSource {
    pub fn new(urls: Vec<String>, timeout: Duration) -> Self {
        Self {
            posts: urls.into_iter().map(BlogPost::new).collect(),
            timeout,
        }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
}

#[async_trait]
impl SourceProvider for BlogSource {
    fn name(&self) -> &str {
        "blog"
    }

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
        let client = http_client(self.timeout)?;
        let mut records = Vec::new();
        let mut failures = 0;

        for post in &self.posts {
            let html = match fetch_html(&client, &post.url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Skipping blog post {}: {}", post.url, e);
                    failures += 1;
                    continue;
                }
            };

            let listings = parse_blog_html(&html, post.specialty.as_deref())?;
            info!("Parsed {} listings from {}", listings.len(), post.url);
            records.extend(listings.into_iter().filter_map(|raw| normalize(raw).ok()));
        }

        if !self.posts.is_empty() && failures == self.posts.len() {
            return Err(SourceError::AllPagesFailed(failures));
        }
        Ok(records)
    }
}

/// Text of an element with each fragment trimmed and joined by one space
fn element_text(el: &ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Parse(e.to_string()))
}

/// Parse every listing in a blog post. Listings without a name or location
/// are skipped; their siblings are still parsed.
pub fn parse_blog_html(
    html: &str,
    specialty: Option<&str>,
) -> Result<Vec<RawRestaurant>, SourceError> {
    let document = Html::parse_document(html);
    let heading_sel = selector("h2")?;
    let link_sel = selector("a")?;

    let mut listings = Vec::new();
    for heading in document.select(&heading_sel) {
        let Some(link) = heading.select(&link_sel).next() else {
            continue;
        };

        match parse_listing(&heading, &link, specialty) {
            Ok(raw) => listings.push(raw),
            Err(e) => debug!("Skipping listing: {}", e),
        }
    }

    Ok(listings)
}

fn parse_listing(
    heading: &ElementRef,
    link: &ElementRef,
    specialty: Option<&str>,
) -> Result<RawRestaurant, ListingError> {
    let name = element_text(link);
    if name.is_empty() || IGNORED_HEADINGS.contains(&name.to_lowercase().as_str()) {
        return Err(ListingError::MissingName);
    }

    let mut raw = RawRestaurant::new(name);
    raw.url = link.value().attr("href").map(str::to_string);
    raw.cuisine = Some(DEFAULT_CUISINE.to_string());
    raw.specialties = specialty.map(|s| vec![s.to_string()]).unwrap_or_default();

    for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
        match sibling.value().name() {
            "h2" | "hr" => break,
            "p" => apply_paragraph(&mut raw, &element_text(&sibling)),
            _ => {}
        }
    }

    if raw.location.is_none() {
        return Err(ListingError::MissingLocation(raw.name));
    }
    Ok(raw)
}

/// Fold one detail paragraph into the listing
fn apply_paragraph(raw: &mut RawRestaurant, text: &str) {
    if let Some(caps) = RATING_RE.captures(text) {
        raw.rating = caps[1].parse().ok();
    }

    if text.contains("Where:") || text.starts_with("Where") {
        let location = text.replace("Where:", "").trim().to_string();
        if !location.is_empty() {
            raw.location = Some(location);
        }
    }

    if text.contains("Delivering To:") || text.contains("Delivering to:") {
        let areas = DELIVERY_RE.replace_all(text, "");
        raw.delivery_areas = areas
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();
    }

    if text.contains("Opening Hours:") || text.contains("Hours:") {
        let hours = HOURS_RE.replace_all(text, "").trim().to_string();
        if !hours.is_empty() {
            raw.opening_hours = Some(hours);
        }
    }
}
