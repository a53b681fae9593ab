use yew::prelude::*;

use crate::models::Country;
use crate::utils::flag_png_url;

#[derive(Properties, PartialEq)]
pub struct CountryItemProps {
    pub country: Country,
}

#[function_component(CountryItem)]
pub fn country_item(props: &CountryItemProps) -> Html {
    html! {
        <li class="country-item">
            <img
                class="country-item__flag"
                src={flag_png_url(&props.country.emoji)}
                alt={props.country.country.clone()}
            />
            <span>{ &props.country.country }</span>
        </li>
    }
}
