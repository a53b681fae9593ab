// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::models::{City, CityDraft};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar todas las ciudades visitadas
    pub async fn get_cities(&self) -> Result<Vec<City>, String> {
        let url = format!("{}/cities", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<City>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener una ciudad por id
    pub async fn get_city(&self, id: &str) -> Result<City, String> {
        let url = format!("{}/cities/{}", self.base_url, id);

        log::info!("🏙️ Obteniendo ciudad: {}", id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<City>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Crear ciudad - el backend asigna el id y devuelve la representación
    /// autoritativa
    pub async fn create_city(&self, draft: &CityDraft) -> Result<City, String> {
        let url = format!("{}/cities/", self.base_url);

        log::info!("🏙️ Creando ciudad: {}", draft.city_name);

        let response = Request::post(&url)
            .json(draft)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let created = response
            .json::<City>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Ciudad creada: {} (id {})", created.city_name, created.id);
        Ok(created)
    }

    /// Eliminar ciudad por id
    pub async fn delete_city(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/cities/{}", self.base_url, id);

        log::info!("🗑️ Eliminando ciudad: {}", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        Ok(())
    }
}
