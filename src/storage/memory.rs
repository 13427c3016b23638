//! In-memory storage implementation

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::Storage;
use crate::domain::{Amenity, DomainResult, Place, State};

struct Stored<T> {
    seq: u64,
    value: T,
}

/// In-memory storage for development and testing
///
/// Keys every entity by id and remembers insertion order so `list_*` is
/// deterministic. `close()` only counts sessions; there is no connection
/// to release.
pub struct InMemoryStorage {
    states: DashMap<String, Stored<State>>,
    amenities: DashMap<String, Stored<Amenity>>,
    places: DashMap<String, Stored<Place>>,
    seq: AtomicU64,
    closed_sessions: AtomicU64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            states: DashMap::new(),
            amenities: DashMap::new(),
            places: DashMap::new(),
            seq: AtomicU64::new(0),
            closed_sessions: AtomicU64::new(0),
        }
    }

    /// Storage pre-populated with a small demo dataset for the standalone
    /// server binary.
    pub fn with_sample_data() -> Self {
        let storage = Self::new();

        let california = State::new("California").with_cities(&["Fremont", "Napa", "San Jose"]);
        let arizona = State::new("Arizona").with_cities(&["Phoenix", "Tucson"]);
        let alabama = State::new("Alabama").with_cities(&["Birmingham"]);

        let wifi = Amenity::new("Wifi");
        let pool = Amenity::new("Pool");
        let gym = Amenity::new("Gym");
        let parking = Amenity::new("Free parking");

        let city_id = california.cities[0].id.clone();
        let owner = "demo-owner";

        let mut loft = Place::new(city_id.clone(), owner, "Downtown loft");
        loft.description = "Bright loft close to everything.".to_string();
        loft.number_rooms = 2;
        loft.number_bathrooms = 1;
        loft.max_guest = 4;
        loft.price_by_night = 120;
        loft.amenities = vec![wifi.clone(), pool.clone()];

        let mut cabin = Place::new(city_id.clone(), owner, "Quiet cabin");
        cabin.description = "A cabin in the woods, no neighbors.".to_string();
        cabin.number_rooms = 3;
        cabin.number_bathrooms = 2;
        cabin.max_guest = 6;
        cabin.price_by_night = 95;
        cabin.amenities = vec![wifi.clone(), parking.clone()];

        let mut studio = Place::new(city_id, owner, "Artist studio");
        studio.description = "Studio with skylight and fast internet.".to_string();
        studio.number_rooms = 1;
        studio.number_bathrooms = 1;
        studio.max_guest = 2;
        studio.price_by_night = 75;
        studio.amenities = vec![wifi.clone()];

        for state in [california, arizona, alabama] {
            storage.add_state(state);
        }
        for amenity in [wifi, pool, gym, parking] {
            storage.add_amenity(amenity);
        }
        for place in [loft, cabin, studio] {
            storage.add_place(place);
        }

        storage
    }

    pub fn add_state(&self, state: State) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.states.insert(state.id.clone(), Stored { seq, value: state });
    }

    pub fn add_amenity(&self, amenity: Amenity) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.amenities
            .insert(amenity.id.clone(), Stored { seq, value: amenity });
    }

    pub fn add_place(&self, place: Place) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.places.insert(place.id.clone(), Stored { seq, value: place });
    }

    /// Number of sessions closed so far.
    pub fn closed_sessions(&self) -> u64 {
        self.closed_sessions.load(Ordering::SeqCst)
    }

    fn collect_ordered<T: Clone>(map: &DashMap<String, Stored<T>>) -> Vec<T> {
        let mut entries: Vec<(u64, T)> = map
            .iter()
            .map(|e| (e.value().seq, e.value().value.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_states(&self) -> DomainResult<Vec<State>> {
        Ok(Self::collect_ordered(&self.states))
    }

    async fn list_amenities(&self) -> DomainResult<Vec<Amenity>> {
        Ok(Self::collect_ordered(&self.amenities))
    }

    async fn list_places(&self) -> DomainResult<Vec<Place>> {
        Ok(Self::collect_ordered(&self.places))
    }

    async fn close(&self) {
        let closed = self.closed_sessions.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("storage session closed (total: {})", closed);
    }
}
