// ============================================================================
// CITY CONTEXT - Compartir el CityStore entre componentes
// ============================================================================
// Usa Context API de Yew para exponer UseCitiesHandle globalmente
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_cities::{use_cities, UseCitiesHandle};

/// Provider que envuelve la app y construye el store una sola vez
#[function_component(CityProvider)]
pub fn city_provider(props: &CityProviderProps) -> Html {
    let cities_handle = use_cities();

    html! {
        <ContextProvider<UseCitiesHandle> context={cities_handle}>
            {props.children.clone()}
        </ContextProvider<UseCitiesHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct CityProviderProps {
    pub children: Children,
}

/// Acceso al store desde cualquier componente descendiente.
///
/// Usarlo fuera del provider es un error de programación, no una condición
/// recuperable: falla inmediatamente con un diagnóstico claro en lugar de
/// devolver datos vacíos.
#[hook]
pub fn use_city_context() -> UseCitiesHandle {
    use_context::<UseCitiesHandle>()
        .expect("use_city_context must be called under <CityProvider>")
}
