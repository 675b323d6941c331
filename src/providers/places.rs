use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::prompt;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TOP_RESULTS: usize = 5;

/// Client for the points-of-interest text search provider
#[derive(Clone, Debug)]
pub struct PlacesClient {
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: Option<String>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    #[serde(default)]
    user_ratings_total: u64,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<Location>,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Look up hotels, restaurants, and attractions near the destination.
    ///
    /// Same degrade-to-text policy as the search phase: any failure becomes a
    /// short descriptive string, never a pipeline error.
    pub async fn poi_summary(&self, destination: &str) -> String {
        match self.fetch(destination).await {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!("Places provider error: {}", err);
                format!("Maps search error: {}", err)
            }
        }
    }

    async fn fetch(&self, destination: &str) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client
            .get(format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                TEXT_SEARCH_PATH
            ))
            .query(&[
                ("query", prompt::places_query(destination).as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Places(format!(
                "provider returned status {}",
                status
            )));
        }

        let body: PlacesResponse = response.json().await?;

        // The provider reports its own status inside the payload; anything
        // but OK means there is no place data to format.
        if body.status != "OK" {
            return Ok(format!("Maps API status: {}", body.status));
        }

        Ok(format_places(&body.results))
    }
}

fn format_places(places: &[Place]) -> String {
    let mut formatted = "Google Maps Results:\n\n".to_string();

    for (i, place) in places.iter().take(TOP_RESULTS).enumerate() {
        formatted.push_str(&format!(
            "{}. {}\n",
            i + 1,
            place.name.as_deref().unwrap_or("N/A")
        ));
        formatted.push_str(&format!(
            "   Address: {}\n",
            place.formatted_address.as_deref().unwrap_or("N/A")
        ));
        formatted.push_str(&format!(
            "   Rating: {} ({} reviews)\n",
            place
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            place.user_ratings_total
        ));
        let location = place
            .geometry
            .as_ref()
            .and_then(|g| g.location.as_ref())
            .map(|l| format!("{}, {}", l.lat, l.lng))
            .unwrap_or_else(|| "N/A".to_string());
        formatted.push_str(&format!("   Location: {}\n\n", location));
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_places_entries() {
        let places = vec![
            Place {
                name: Some("Taj Mahal Palace".to_string()),
                formatted_address: Some("Apollo Bandar, Colaba, Mumbai".to_string()),
                rating: Some(4.6),
                user_ratings_total: 32_000,
                geometry: Some(Geometry {
                    location: Some(Location {
                        lat: 18.9217,
                        lng: 72.8332,
                    }),
                }),
            },
            Place {
                name: None,
                formatted_address: None,
                rating: None,
                user_ratings_total: 0,
                geometry: None,
            },
        ];

        let formatted = format_places(&places);
        assert!(formatted.starts_with("Google Maps Results:"));
        assert!(formatted.contains("1. Taj Mahal Palace"));
        assert!(formatted.contains("Rating: 4.6 (32000 reviews)"));
        assert!(formatted.contains("Location: 18.9217, 72.8332"));
        assert!(formatted.contains("2. N/A"));
        assert!(formatted.contains("Rating: N/A (0 reviews)"));
    }

    #[test]
    fn test_format_places_caps_at_five() {
        let places: Vec<Place> = (1..=7)
            .map(|i| Place {
                name: Some(format!("Place {}", i)),
                formatted_address: None,
                rating: None,
                user_ratings_total: 0,
                geometry: None,
            })
            .collect();

        let formatted = format_places(&places);
        assert!(formatted.contains("5. Place 5"));
        assert!(!formatted.contains("6. Place 6"));
    }
}
