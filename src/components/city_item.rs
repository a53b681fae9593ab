use yew::prelude::*;

use crate::hooks::use_city_context;
use crate::models::{City, Position};
use crate::utils::{flag_png_url, format_visit_date};

#[derive(Properties, PartialEq)]
pub struct CityItemProps {
    pub city: City,
    /// Emitted with (id, position) when the row is clicked.
    pub on_select: Callback<(String, Position)>,
}

#[function_component(CityItem)]
pub fn city_item(props: &CityItemProps) -> Html {
    let cities_ctx = use_city_context();
    let city = &props.city;

    let is_current = cities_ctx
        .store
        .current_city
        .as_ref()
        .is_some_and(|c| c.id == city.id);

    let on_click = {
        let on_select = props.on_select.clone();
        let id = city.id.clone();
        let position = city.position.clone();
        Callback::from(move |_: MouseEvent| on_select.emit((id.clone(), position.clone())))
    };

    let on_delete = {
        let delete_city = cities_ctx.delete_city.clone();
        let id = city.id.clone();
        Callback::from(move |e: MouseEvent| {
            // Borrar no debe navegar al detalle
            e.stop_propagation();
            delete_city.emit(id.clone());
        })
    };

    let class = if is_current {
        "city-item city-item--active"
    } else {
        "city-item"
    };

    html! {
        <li class={class} onclick={on_click}>
            <img
                class="city-item__flag"
                src={flag_png_url(&city.emoji)}
                alt={city.country.clone()}
            />
            <h3 class="city-item__name">{ &city.city_name }</h3>
            <time class="city-item__date">{ format_visit_date(&city.date) }</time>
            <button class="city-item__delete" onclick={on_delete}>{ "×" }</button>
        </li>
    }
}
