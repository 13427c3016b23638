//! HBNB page handler
//!
//! Renders the listing page: states with their cities, amenities, and
//! places, each collection sorted by name, plus a per-request cache-busting
//! token for the static asset URLs.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::router::AppState;
use crate::domain::{Amenity, City, Place};
use crate::storage::Storage;

/// A state paired with its name-sorted cities.
pub struct StateWithCities {
    pub state: crate::domain::State,
    pub cities: Vec<City>,
}

/// View model handed to `templates/hbnb.html`.
#[derive(Template, WebTemplate)]
#[template(path = "hbnb.html")]
pub struct HbnbPage {
    pub states: Vec<StateWithCities>,
    pub amenities: Vec<Amenity>,
    pub places: Vec<Place>,
    pub cache_id: String,
}

/// `GET /100-hbnb/` (and `/3-hbnb/`): the listing page.
pub async fn hbnb(State(app): State<AppState>) -> Result<HbnbPage, ApiError> {
    build_page(app.storage.as_ref()).await
}

/// Builds the per-request view model from three full-collection reads.
///
/// All sorts are stable, so rows with equal names keep the facade's
/// retrieval order.
pub(crate) async fn build_page(storage: &dyn Storage) -> Result<HbnbPage, ApiError> {
    let mut states = storage.list_states().await?;
    states.sort_by(|a, b| a.name.cmp(&b.name));
    let states = states
        .into_iter()
        .map(|mut state| {
            let mut cities = std::mem::take(&mut state.cities);
            cities.sort_by(|a, b| a.name.cmp(&b.name));
            StateWithCities { state, cities }
        })
        .collect();

    let mut amenities = storage.list_amenities().await?;
    amenities.sort_by(|a, b| a.name.cmp(&b.name));

    let mut places = storage.list_places().await?;
    places.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(HbnbPage {
        states,
        amenities,
        places,
        cache_id: Uuid::new_v4().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amenity, Place, State};
    use crate::storage::InMemoryStorage;

    fn unsorted_storage() -> InMemoryStorage {
        let storage = InMemoryStorage::new();
        storage.add_state(State::new("Nevada").with_cities(&["Reno", "Henderson", "Elko"]));
        storage.add_state(State::new("Alabama").with_cities(&["Mobile", "Birmingham"]));
        storage.add_amenity(Amenity::new("Wifi"));
        storage.add_amenity(Amenity::new("Gym"));
        storage.add_place(Place::new("c1", "u1", "Zen retreat"));
        storage.add_place(Place::new("c1", "u1", "Attic room"));
        storage
    }

    #[tokio::test]
    async fn states_and_cities_sorted_by_name() {
        let storage = unsorted_storage();
        let page = build_page(&storage).await.unwrap();

        let state_names: Vec<&str> = page.states.iter().map(|s| s.state.name.as_str()).collect();
        assert_eq!(state_names, ["Alabama", "Nevada"]);

        let nevada_cities: Vec<&str> = page.states[1]
            .cities
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(nevada_cities, ["Elko", "Henderson", "Reno"]);
    }

    #[tokio::test]
    async fn amenities_and_places_sorted_by_name() {
        let storage = unsorted_storage();
        let page = build_page(&storage).await.unwrap();

        let amenity_names: Vec<&str> = page.amenities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(amenity_names, ["Gym", "Wifi"]);

        let place_names: Vec<&str> = page.places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(place_names, ["Attic room", "Zen retreat"]);
    }

    #[tokio::test]
    async fn cache_id_differs_between_requests() {
        let storage = unsorted_storage();
        let first = build_page(&storage).await.unwrap();
        let second = build_page(&storage).await.unwrap();
        assert_ne!(first.cache_id, second.cache_id);
    }
}
