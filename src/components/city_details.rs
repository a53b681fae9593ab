use yew::prelude::*;

use super::{Message, Spinner};
use crate::hooks::use_city_context;
use crate::utils::{flag_png_url, format_visit_date};

#[derive(Properties, PartialEq)]
pub struct CityDetailsProps {
    pub city_id: String,
    pub on_back: Callback<()>,
}

#[function_component(CityDetails)]
pub fn city_details(props: &CityDetailsProps) -> Html {
    let cities_ctx = use_city_context();

    // Cargar la ciudad al montar o al cambiar de id (idempotente si ya es
    // la ciudad actual)
    {
        let load_city = cities_ctx.load_city.clone();
        let id = props.city_id.clone();
        use_effect_with(id.clone(), move |_| {
            load_city.emit(id);
            || ()
        });
    }

    let store = &cities_ctx.store;

    if store.is_loading {
        return html! { <Spinner /> };
    }

    let Some(city) = store.current_city.clone() else {
        return html! { <Message text="No city selected yet" /> };
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="city-details">
            <div class="city-details__row">
                <h6>{ "City name" }</h6>
                <h3>
                    <img src={flag_png_url(&city.emoji)} alt={city.country.clone()} />
                    { " " }
                    { &city.city_name }
                </h3>
            </div>

            <div class="city-details__row">
                <h6>{ format!("You went to {} on", city.city_name) }</h6>
                <p>{ format_visit_date(&city.date) }</p>
            </div>

            if !city.notes.is_empty() {
                <div class="city-details__row">
                    <h6>{ "Your notes" }</h6>
                    <p>{ &city.notes }</p>
                </div>
            }

            <button class="btn btn--back" onclick={on_back}>{ "← Back" }</button>
        </div>
    }
}
