use yew::prelude::*;

use super::{CountryItem, Message, Spinner};
use crate::hooks::use_city_context;
use crate::models::countries_from_cities;

/// Read-only projection of the city list, one row per country.
#[function_component(CountryList)]
pub fn country_list() -> Html {
    let cities_ctx = use_city_context();
    let store = &cities_ctx.store;

    if store.is_loading {
        return html! { <Spinner /> };
    }

    if store.cities.is_empty() {
        return html! {
            <Message text="Add your first city by clicking on a city on the map" />
        };
    }

    let countries = countries_from_cities(&store.cities);

    html! {
        <ul class="country-list">
            { for countries.into_iter().map(|country| html! {
                <CountryItem key={country.country.clone()} country={country.clone()} />
            }) }
        </ul>
    }
}
