// ============================================================================
// USE CITIES HOOK - Orquestación del CityStore
// ============================================================================
// Hook nativo de Yew: reducer + callbacks de operaciones.
// Cada operación: dispatch Loading → un request → un commit terminal.
// ============================================================================

use yew::prelude::*;

use crate::models::CityDraft;
use crate::services::ApiClient;
use crate::stores::{CityAction, CityStore};

/// Handle compartido via context con el estado y las operaciones del store.
#[derive(Clone, PartialEq)]
pub struct UseCitiesHandle {
    pub store: UseReducerHandle<CityStore>,
    pub load_city: Callback<String>,
    pub create_city: Callback<CityDraft>,
    pub delete_city: Callback<String>,
}

#[hook]
pub fn use_cities() -> UseCitiesHandle {
    let store = use_reducer(CityStore::default);

    // Carga inicial: GET /cities una sola vez al montar el provider
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                store.dispatch(CityAction::Loading);
                match ApiClient::new().get_cities().await {
                    Ok(cities) => {
                        log::info!("🏙️ Ciudades cargadas: {}", cities.len());
                        store.dispatch(CityAction::CitiesLoaded(cities));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando ciudades: {}", e);
                        reject(&store, "There was an error loading data");
                    }
                }
            });
            || ()
        });
    }

    // Cargar una ciudad para la vista de detalle
    let load_city = {
        let store = store.clone();
        Callback::from(move |id: String| {
            // Re-seleccionar la ciudad actual no dispara red ni commits
            if store.current_city.as_ref().is_some_and(|c| c.id == id) {
                return;
            }

            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.dispatch(CityAction::Loading);
                match ApiClient::new().get_city(&id).await {
                    Ok(city) => store.dispatch(CityAction::CityLoaded(city)),
                    Err(e) => {
                        log::error!("❌ Error cargando ciudad {}: {}", id, e);
                        reject(&store, "There was an error loading data");
                    }
                }
            });
        })
    };

    // Crear ciudad: el commit lleva la representación del servidor
    let create_city = {
        let store = store.clone();
        Callback::from(move |draft: CityDraft| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.dispatch(CityAction::Loading);
                match ApiClient::new().create_city(&draft).await {
                    Ok(created) => store.dispatch(CityAction::CityCreated(created)),
                    Err(e) => {
                        log::error!("❌ Error creando ciudad: {}", e);
                        reject(&store, "There was an error creating city");
                    }
                }
            });
        })
    };

    // Eliminar ciudad
    let delete_city = {
        let store = store.clone();
        Callback::from(move |id: String| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.dispatch(CityAction::Loading);
                match ApiClient::new().delete_city(&id).await {
                    Ok(()) => store.dispatch(CityAction::CityDeleted(id)),
                    Err(e) => {
                        log::error!("❌ Error eliminando ciudad {}: {}", id, e);
                        reject(&store, "There was an error deleting city");
                    }
                }
            });
        })
    };

    UseCitiesHandle {
        store,
        load_city,
        create_city,
        delete_city,
    }
}

/// Commit de rechazo + alert bloqueante (los errores nunca salen del store)
fn reject(store: &UseReducerHandle<CityStore>, message: &str) {
    store.dispatch(CityAction::Rejected(message.to_string()));
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
