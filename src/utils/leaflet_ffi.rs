// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(container_id: &str, lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = updateCityMarkers)]
    pub fn update_city_markers(cities_json: &str);
}

/// Helper: centrar el mapa (no-op si la función JS aún no existe)
pub fn center_map(lat: f64, lng: f64) {
    if let Some(window) = web_sys::window() {
        let function = js_sys::Function::new_no_args(&format!(
            "if (window.centerLeafletMap) window.centerLeafletMap({}, {});",
            lat, lng
        ));
        let _ = function.call0(&window.into());
    }
}
