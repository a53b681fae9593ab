use serde::{Deserialize, Deserializer, Serialize};

/// Geographic coordinates of a visited city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// One visited city, as served by the backend.
///
/// The backend assigns ids and is free to hand them back as JSON strings or
/// numbers; they are normalized to `String` on the way in and treated as
/// opaque afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

/// POST payload for a new city: a `City` minus the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDraft {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: String,
    pub notes: String,
    pub position: Position,
}

fn id_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Str(String),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_string_id() {
        let city: City = serde_json::from_str(
            r#"{"id":"99","cityName":"Lagos","country":"Nigeria","emoji":"🇳🇬",
                "date":"2024-01-01","notes":"","position":{"lat":6.5,"lng":3.35}}"#,
        )
        .unwrap();
        assert_eq!(city.id, "99");
        assert_eq!(city.city_name, "Lagos");
    }

    #[test]
    fn deserializes_numeric_id() {
        let city: City = serde_json::from_str(
            r#"{"id":73930385,"cityName":"Lisbon","country":"Portugal","emoji":"🇵🇹",
                "date":"2027-10-31T15:24:00.000Z","notes":"","position":{"lat":38.72,"lng":-9.14}}"#,
        )
        .unwrap();
        assert_eq!(city.id, "73930385");
    }

    #[test]
    fn missing_notes_defaults_to_empty() {
        let city: City = serde_json::from_str(
            r#"{"id":"1","cityName":"Berlin","country":"Germany","emoji":"🇩🇪",
                "date":"2023-05-01","position":{"lat":52.52,"lng":13.4}}"#,
        )
        .unwrap();
        assert!(city.notes.is_empty());
    }

    #[test]
    fn draft_serializes_camel_case_without_id() {
        let draft = CityDraft {
            city_name: "Lagos".into(),
            country: "Nigeria".into(),
            emoji: "🇳🇬".into(),
            date: "2024-01-01".into(),
            notes: String::new(),
            position: Position { lat: 6.5, lng: 3.35 },
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("cityName").is_some());
        assert!(json.get("id").is_none());
    }
}
