// ============================================================================
// USE GEOLOCATION HOOK - Posición del navegador bajo demanda
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::Position;

#[derive(Clone, PartialEq)]
pub struct UseGeolocationHandle {
    pub is_loading: bool,
    pub position: Option<Position>,
    pub get_position: Callback<()>,
}

#[hook]
pub fn use_geolocation() -> UseGeolocationHandle {
    let is_loading = use_state(|| false);
    let position = use_state(|| None::<Position>);

    let get_position = {
        let is_loading = is_loading.clone();
        let position = position.clone();

        Callback::from(move |_| {
            let Some(geolocation) = web_sys::window()
                .and_then(|w| w.navigator().geolocation().ok())
            else {
                log::error!("❌ Geolocation API no disponible");
                return;
            };

            is_loading.set(true);

            let on_success = {
                let is_loading = is_loading.clone();
                let position = position.clone();
                Closure::wrap(Box::new(move |pos: web_sys::Position| {
                    let coords = pos.coords();
                    log::info!("📍 Ubicación: ({}, {})", coords.latitude(), coords.longitude());
                    position.set(Some(Position {
                        lat: coords.latitude(),
                        lng: coords.longitude(),
                    }));
                    is_loading.set(false);
                }) as Box<dyn FnMut(web_sys::Position)>)
            };

            let on_error = {
                let is_loading = is_loading.clone();
                Closure::wrap(Box::new(move |err: web_sys::PositionError| {
                    log::error!("❌ Error obteniendo ubicación: {}", err.message());
                    is_loading.set(false);
                }) as Box<dyn FnMut(web_sys::PositionError)>)
            };

            if let Err(e) = geolocation.get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            ) {
                log::error!("❌ Error solicitando ubicación: {:?}", e);
                is_loading.set(false);
            }

            // El navegador responde una sola vez; los closures quedan vivos
            on_success.forget();
            on_error.forget();
        })
    };

    UseGeolocationHandle {
        is_loading: *is_loading,
        position: (*position).clone(),
        get_position,
    }
}
