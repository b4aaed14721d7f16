//! Restaurant records: the raw shape sources produce and the normalized
//! shape the catalog serves.

use crate::ident::restaurant_id;
use crate::resolver;
use serde::{Deserialize, Serialize};

/// Cuisine used when a source does not know better
pub const DEFAULT_CUISINE: &str = "Nigerian";

/// Highest rating the platform hands out
pub const MAX_RATING: f64 = 5.0;

/// A normalized restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub lga: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub cuisine: String,
    pub specialties: Vec<String>,
    pub delivery_areas: Vec<String>,
    pub opening_hours: Option<String>,
    pub url: String,
}

/// A listing as handed over by a source, before normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRestaurant {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub lga: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub delivery_areas: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("listing has no name")]
    MissingName,
}

impl RawRestaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_place(mut self, city: &str, state: &str, lga: &str) -> Self {
        self.city = Some(city.to_string());
        self.state = Some(state.to_string());
        self.lga = Some(lga.to_string());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_cuisine(mut self, cuisine: &str, specialties: &[&str]) -> Self {
        self.cuisine = Some(cuisine.to_string());
        self.specialties = specialties.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Trimmed, non-empty copy of an optional field
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Search link used when a source carries no url of its own
pub fn store_search_url(name: &str) -> String {
    format!(
        "https://chowdeck.com/store?q={}",
        name.to_lowercase().replace(' ', "+")
    )
}

/// Produce the canonical record for a raw listing.
///
/// State, city and LGA supplied by the source are kept; missing ones are
/// filled from the free-text location. The id is derived last so it sees the
/// resolved city.
pub fn normalize(raw: RawRestaurant) -> Result<Restaurant, NormalizeError> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(NormalizeError::MissingName);
    }

    let location = clean(raw.location);
    let mut city = clean(raw.city);
    let mut state = clean(raw.state);
    let mut lga = clean(raw.lga);

    if let Some(resolved) = location.as_deref().and_then(resolver::resolve) {
        if state.is_none() || state.as_deref() == Some(resolved.state.as_str()) {
            state = state.or(Some(resolved.state));
            city = city.or(Some(resolved.city));
            lga = lga.or(Some(resolved.lga));
        }
    }

    let rating = raw
        .rating
        .filter(|r| r.is_finite() && (0.0..=MAX_RATING).contains(r));

    let mut delivery_areas = clean_list(raw.delivery_areas);
    if delivery_areas.is_empty() {
        if let Some(city) = &city {
            delivery_areas.push(city.clone());
        }
    }

    let url = clean(raw.url).unwrap_or_else(|| store_search_url(&name));
    let id = restaurant_id(&name, city.as_deref().unwrap_or(""));

    Ok(Restaurant {
        id,
        name,
        city,
        state,
        lga,
        location,
        rating,
        cuisine: clean(raw.cuisine).unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
        specialties: clean_list(raw.specialties),
        delivery_areas,
        opening_hours: clean(raw.opening_hours),
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_location() {
        let r = normalize(RawRestaurant::new("Foodies").with_location("Lekki Phase I")).unwrap();
        assert_eq!(r.state.as_deref(), Some("Lagos"));
        assert_eq!(r.city.as_deref(), Some("Lagos"));
        assert_eq!(r.lga.as_deref(), Some("Eti-Osa"));
        assert_eq!(r.delivery_areas, vec!["Lagos".to_string()]);
        assert_eq!(r.id, restaurant_id("Foodies", "Lagos"));
    }

    #[test]
    fn test_normalize_keeps_source_place() {
        let raw = RawRestaurant::new("Yakoyo")
            .with_place("Lekki", "Lagos", "Eti-Osa")
            .with_location("Lekki Phase I");
        let r = normalize(raw).unwrap();
        assert_eq!(r.city.as_deref(), Some("Lekki"));
        assert_eq!(r.id, restaurant_id("Yakoyo", "Lekki"));
    }

    #[test]
    fn test_normalize_other_state_not_overridden() {
        // The source says FCT; an Ikeja mention in the text must not move it
        let raw = RawRestaurant::new("Mixed")
            .with_place("Abuja", "FCT", "Abuja Municipal")
            .with_location("Ikeja road, Abuja");
        let r = normalize(raw).unwrap();
        assert_eq!(r.state.as_deref(), Some("FCT"));
        assert_eq!(r.lga.as_deref(), Some("Abuja Municipal"));
    }

    #[test]
    fn test_normalize_unmatched_location() {
        let r = normalize(RawRestaurant::new("Mystery").with_location("Unknown street")).unwrap();
        assert!(r.state.is_none());
        assert!(r.city.is_none());
        assert!(r.lga.is_none());
        assert!(r.delivery_areas.is_empty());
    }

    #[test]
    fn test_normalize_defaults() {
        let r = normalize(RawRestaurant::new("  Mama Put  ")).unwrap();
        assert_eq!(r.name, "Mama Put");
        assert_eq!(r.cuisine, DEFAULT_CUISINE);
        assert_eq!(r.url, "https://chowdeck.com/store?q=mama+put");
        assert!(r.rating.is_none());
    }

    #[test]
    fn test_normalize_rejects_empty_name() {
        assert_eq!(
            normalize(RawRestaurant::new("   ")),
            Err(NormalizeError::MissingName)
        );
    }

    #[test]
    fn test_normalize_drops_out_of_range_rating() {
        let r = normalize(RawRestaurant::new("A").with_rating(7.5)).unwrap();
        assert!(r.rating.is_none());
        let r = normalize(RawRestaurant::new("B").with_rating(f64::NAN)).unwrap();
        assert!(r.rating.is_none());
        let r = normalize(RawRestaurant::new("C").with_rating(4.47)).unwrap();
        assert_eq!(r.rating, Some(4.47));
    }

    #[test]
    fn test_serializes_nulls() {
        let r = normalize(RawRestaurant::new("Plain")).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["city"].is_null());
        assert!(json["opening_hours"].is_null());
        assert_eq!(json["specialties"], serde_json::json!([]));
    }
}
