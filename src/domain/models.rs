//! HBNB domain entities
//!
//! Typed models mirroring the external HBNB object layer. Every entity carries
//! a UUIDv4 `id` and creation/update timestamps, and serializes with serde
//! (the flat-mapping representation used by the JSON endpoints).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A city belonging to a state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub state_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn new(state_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            state_id: state_id.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A state owning a collection of cities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
    pub cities: Vec<City>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            cities: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_cities(mut self, names: &[&str]) -> Self {
        let state_id = self.id.clone();
        self.cities
            .extend(names.iter().map(|n| City::new(state_id.clone(), *n)));
        self
    }
}

/// An amenity a place can offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A rentable place, holding references to its amenities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub city_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub number_rooms: i32,
    pub number_bathrooms: i32,
    pub max_guest: i32,
    pub price_by_night: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Vec<Amenity>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Place {
    pub fn new(
        city_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            city_id: city_id.into(),
            user_id: user_id.into(),
            name: name.into(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            amenities: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this place offers the given amenity.
    pub fn has_amenity(&self, amenity_id: &str) -> bool {
        self.amenities.iter().any(|a| a.id == amenity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_with_cities_links_state_id() {
        let state = State::new("California").with_cities(&["Fremont", "Napa"]);
        assert_eq!(state.cities.len(), 2);
        assert!(state.cities.iter().all(|c| c.state_id == state.id));
    }

    #[test]
    fn has_amenity_matches_by_id() {
        let wifi = Amenity::new("Wifi");
        let mut place = Place::new("c1", "u1", "Loft");
        place.amenities.push(wifi.clone());

        assert!(place.has_amenity(&wifi.id));
        assert!(!place.has_amenity("missing-id"));
    }
}
