use yew::prelude::*;

use super::{CityItem, Message, Spinner};
use crate::hooks::use_city_context;
use crate::models::Position;

#[derive(Properties, PartialEq)]
pub struct CityListProps {
    pub on_select: Callback<(String, Position)>,
}

#[function_component(CityList)]
pub fn city_list(props: &CityListProps) -> Html {
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

    html! {
        <ul class="city-list">
            { for store.cities.iter().map(|city| html! {
                <CityItem
                    key={city.id.clone()}
                    city={city.clone()}
                    on_select={props.on_select.clone()}
                />
            }) }
        </ul>
    }
}
