// ============================================================================
// CITY STORE - Estado autoritativo de ciudades visitadas
// ============================================================================
// Reducer puro: cada operación de red termina en exactamente un commit
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::City;

/// Client-side aggregate: the city collection plus request status.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CityStore {
    /// Insertion order = load/creation order; ids are unique.
    pub cities: Vec<City>,
    /// True exactly while a request is in flight.
    pub is_loading: bool,
    /// The city selected for detail display, if any.
    pub current_city: Option<City>,
    /// Last error message, empty when none.
    pub error: String,
}

/// State transitions. The set is closed: every commit an operation can make
/// is a variant here, and the reducer match is exhaustive.
#[derive(Clone, Debug, PartialEq)]
pub enum CityAction {
    Loading,
    CitiesLoaded(Vec<City>),
    CityLoaded(City),
    CityCreated(City),
    CityDeleted(String),
    Rejected(String),
}

impl Reducible for CityStore {
    type Action = CityAction;

    fn reduce(self: Rc<Self>, action: CityAction) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            CityAction::Loading => {
                next.is_loading = true;
            }
            CityAction::CitiesLoaded(cities) => {
                next.is_loading = false;
                next.cities = cities;
            }
            CityAction::CityLoaded(city) => {
                next.is_loading = false;
                next.current_city = Some(city);
            }
            CityAction::CityCreated(city) => {
                next.is_loading = false;
                next.cities.push(city.clone());
                next.current_city = Some(city);
            }
            CityAction::CityDeleted(id) => {
                next.is_loading = false;
                next.cities.retain(|city| city.id != id);
                // Only invalidate the selection when it points at the
                // deleted city; unrelated deletions leave it alone.
                if next.current_city.as_ref().is_some_and(|c| c.id == id) {
                    next.current_city = None;
                }
            }
            CityAction::Rejected(message) => {
                next.is_loading = false;
                next.error = message;
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn city(id: &str, name: &str) -> City {
        City {
            id: id.to_string(),
            city_name: name.to_string(),
            country: "Nigeria".to_string(),
            emoji: "🇳🇬".to_string(),
            date: "2024-01-01".to_string(),
            notes: String::new(),
            position: Position { lat: 6.5, lng: 3.35 },
        }
    }

    fn apply(store: CityStore, action: CityAction) -> CityStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn loading_sets_flag() {
        let store = apply(CityStore::default(), CityAction::Loading);
        assert!(store.is_loading);
    }

    #[test]
    fn cities_loaded_replaces_collection() {
        let store = apply(CityStore::default(), CityAction::Loading);
        let store = apply(
            store,
            CityAction::CitiesLoaded(vec![city("1", "Lagos"), city("2", "Abuja")]),
        );
        assert!(!store.is_loading);
        assert_eq!(store.cities.len(), 2);
    }

    #[test]
    fn city_loaded_sets_current() {
        let store = apply(CityStore::default(), CityAction::CityLoaded(city("7", "Kano")));
        assert!(!store.is_loading);
        assert_eq!(store.current_city.as_ref().unwrap().id, "7");
    }

    #[test]
    fn creates_append_in_call_order() {
        let mut store = CityStore::default();
        for (id, name) in [("1", "Lagos"), ("2", "Abuja"), ("3", "Kano")] {
            store = apply(store, CityAction::Loading);
            store = apply(store, CityAction::CityCreated(city(id, name)));
        }
        let ids: Vec<&str> = store.cities.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.current_city.as_ref().unwrap().id, "3");
    }

    #[test]
    fn created_city_becomes_current() {
        let echoed = city("99", "Lagos");
        let store = apply(CityStore::default(), CityAction::CityCreated(echoed));
        assert_eq!(store.cities.len(), 1);
        assert_eq!(store.current_city.as_ref().unwrap().id, "99");
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let store = apply(
            CityStore::default(),
            CityAction::CitiesLoaded(vec![city("1", "a"), city("2", "b"), city("3", "c")]),
        );
        let store = apply(store, CityAction::CityDeleted("2".into()));
        let ids: Vec<&str> = store.cities.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn delete_clears_current_only_when_it_matches() {
        let base = apply(
            CityStore::default(),
            CityAction::CitiesLoaded(vec![city("1", "a"), city("2", "b")]),
        );

        let store = apply(base.clone(), CityAction::CityLoaded(city("1", "a")));
        let store = apply(store, CityAction::CityDeleted("2".into()));
        assert_eq!(store.current_city.as_ref().unwrap().id, "1");

        let store = apply(base, CityAction::CityLoaded(city("2", "b")));
        let store = apply(store, CityAction::CityDeleted("2".into()));
        assert!(store.current_city.is_none());
    }

    #[test]
    fn rejected_records_error_and_stops_loading() {
        let store = apply(CityStore::default(), CityAction::Loading);
        let store = apply(
            store,
            CityAction::Rejected("There was an error loading data".into()),
        );
        assert!(!store.is_loading);
        assert_eq!(store.error, "There was an error loading data");
    }

    #[test]
    fn every_terminal_action_clears_loading() {
        let terminals = vec![
            CityAction::CitiesLoaded(vec![]),
            CityAction::CityLoaded(city("1", "a")),
            CityAction::CityCreated(city("2", "b")),
            CityAction::CityDeleted("1".into()),
            CityAction::Rejected("boom".into()),
        ];
        for action in terminals {
            let store = apply(CityStore::default(), CityAction::Loading);
            let store = apply(store, action);
            assert!(!store.is_loading);
        }
    }
}
