use serde::{Deserialize, Serialize};

use crate::models::City;

/// Read-only projection of the city list, one entry per country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub country: String,
    pub emoji: String,
}

/// Deduplicate the city list by country, keeping store order.
///
/// The first city seen for a country decides the emoji; later duplicates
/// are dropped.
pub fn countries_from_cities(cities: &[City]) -> Vec<Country> {
    let mut countries: Vec<Country> = Vec::new();

    for city in cities {
        if !countries.iter().any(|c| c.country == city.country) {
            countries.push(Country {
                country: city.country.clone(),
                emoji: city.emoji.clone(),
            });
        }
    }

    countries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn city(country: &str, emoji: &str) -> City {
        City {
            id: country.to_string(),
            city_name: String::new(),
            country: country.to_string(),
            emoji: emoji.to_string(),
            date: String::new(),
            notes: String::new(),
            position: Position { lat: 0.0, lng: 0.0 },
        }
    }

    #[test]
    fn first_occurrence_wins_duplicates_dropped() {
        let cities = vec![
            city("France", "🇫🇷"),
            city("France", "🇫🇷"),
            city("Italy", "🇮🇹"),
        ];

        let countries = countries_from_cities(&cities);
        assert_eq!(
            countries,
            vec![
                Country { country: "France".into(), emoji: "🇫🇷".into() },
                Country { country: "Italy".into(), emoji: "🇮🇹".into() },
            ]
        );
    }

    #[test]
    fn empty_city_list_yields_no_countries() {
        assert!(countries_from_cities(&[]).is_empty());
    }

    #[test]
    fn keeps_store_order() {
        let cities = vec![city("Italy", "🇮🇹"), city("France", "🇫🇷"), city("Italy", "🇮🇹")];
        let countries = countries_from_cities(&cities);
        assert_eq!(countries[0].country, "Italy");
        assert_eq!(countries[1].country, "France");
        assert_eq!(countries.len(), 2);
    }
}
