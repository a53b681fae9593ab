use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Parse `?lat=<f64>&lng=<f64>` out of a query string. Both parameters must
/// be present and numeric.
pub fn parse_lat_lng(search: &str) -> Option<(f64, f64)> {
    let query = search.strip_prefix('?').unwrap_or(search);

    let mut lat = None;
    let mut lng = None;
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            match key {
                "lat" => lat = value.parse().ok(),
                "lng" => lng = value.parse().ok(),
                _ => {}
            }
        }
    }

    match (lat, lng) {
        (Some(lat), Some(lng)) => Some((lat, lng)),
        _ => None,
    }
}

/// Posición (lat, lng) tomada de la query string actual, si existe
#[hook]
pub fn use_url_position() -> Option<(f64, f64)> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    parse_lat_lng(&search)
}

/// Push `?lat=..&lng=..` onto the history so the URL stays the source of
/// truth for the map position.
pub fn push_position_query(lat: f64, lng: f64) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let query = format!("?lat={}&lng={}", lat, lng);
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&query));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_coordinates() {
        assert_eq!(parse_lat_lng("?lat=6.5&lng=3.35"), Some((6.5, 3.35)));
        assert_eq!(parse_lat_lng("lat=-38.72&lng=176.1"), Some((-38.72, 176.1)));
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(parse_lat_lng("?lng=3.35&lat=6.5"), Some((6.5, 3.35)));
    }

    #[test]
    fn rejects_missing_or_malformed_parameters() {
        assert_eq!(parse_lat_lng(""), None);
        assert_eq!(parse_lat_lng("?lat=6.5"), None);
        assert_eq!(parse_lat_lng("?lat=abc&lng=3.35"), None);
        assert_eq!(parse_lat_lng("?foo=1&bar=2"), None);
    }

    #[test]
    fn ignores_unrelated_parameters() {
        assert_eq!(parse_lat_lng("?zoom=13&lat=1.0&lng=2.0"), Some((1.0, 2.0)));
    }
}
