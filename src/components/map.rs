use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_city_context, use_geolocation, use_url_position};
use crate::utils::{center_map, init_leaflet_map, update_city_markers};

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    /// Emitted with the clicked (lat, lng); consumed by the creation flow.
    pub on_map_click: Callback<(f64, f64)>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let cities_ctx = use_city_context();
    let geolocation = use_geolocation();
    let url_position = use_url_position();
    let map_initialized = use_state(|| false);

    // Initialize map on mount, after a short delay so the container exists
    {
        let map_initialized = map_initialized.clone();
        use_effect_with((), move |_| {
            Timeout::new(100, move || {
                let map = &CONFIG.map_config;
                log::info!("🗺️ Inicializando Leaflet desde Rust/WASM");
                init_leaflet_map(
                    "map",
                    map.default_center_lat,
                    map.default_center_lng,
                    map.default_zoom,
                );
                map_initialized.set(true);
            })
            .forget();
            || ()
        });
    }

    // Markers follow the city collection
    {
        let cities = cities_ctx.store.cities.clone();
        let initialized = *map_initialized;
        use_effect_with((cities, initialized), move |(cities, initialized)| {
            // Espejo de las ciudades en window para el glue JS del mapa
            if let Some(window) = web_sys::window() {
                let js_cities = serde_wasm_bindgen::to_value(cities).unwrap_or(JsValue::NULL);
                let _ = js_sys::Reflect::set(
                    &window,
                    &JsValue::from_str("currentCities"),
                    &js_cities,
                );
            }

            if *initialized {
                let cities_json = serde_json::to_string(cities).unwrap_or_default();
                update_city_markers(&cities_json);
            }
            || ()
        });
    }

    // Center: the URL position wins, otherwise the last geolocation fix
    {
        let target = url_position.or(geolocation
            .position
            .as_ref()
            .map(|p| (p.lat, p.lng)));
        let initialized = *map_initialized;
        use_effect_with((target, initialized), move |(target, initialized)| {
            if *initialized {
                if let Some((lat, lng)) = target {
                    center_map(*lat, *lng);
                }
            }
            || ()
        });
    }

    // Map clicks arrive from the JS glue as a "mapClicked" CustomEvent
    {
        let on_map_click = props.on_map_click.clone();
        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |event: JsValue| {
                if let Ok(detail) = js_sys::Reflect::get(&event, &JsValue::from_str("detail")) {
                    let lat = js_sys::Reflect::get(&detail, &JsValue::from_str("lat"))
                        .ok()
                        .and_then(|v| v.as_f64());
                    let lng = js_sys::Reflect::get(&detail, &JsValue::from_str("lng"))
                        .ok()
                        .and_then(|v| v.as_f64());

                    if let (Some(lat), Some(lng)) = (lat, lng) {
                        log::info!("🗺️ Click en mapa: ({}, {})", lat, lng);
                        on_map_click.emit((lat, lng));
                    }
                }
            }) as Box<dyn FnMut(JsValue)>);

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "mapClicked",
                    callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                callback.forget();
            }
        });
    }

    let on_get_position = {
        let get_position = geolocation.get_position.clone();
        Callback::from(move |_: MouseEvent| get_position.emit(()))
    };

    html! {
        <div class="map-container">
            if geolocation.position.is_none() {
                <button class="btn btn--position" onclick={on_get_position}>
                    { if geolocation.is_loading { "Loading position..." } else { "Get your location" } }
                </button>
            }
            <div id="map" class="map"></div>
        </div>
    }
}
