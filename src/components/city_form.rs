use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::Message;
use crate::hooks::{use_city_context, use_url_position};
use crate::models::{CityDraft, Position};

#[derive(Properties, PartialEq)]
pub struct CityFormProps {
    /// Emitted after submit so the shell can return to the city list.
    pub on_done: Callback<()>,
}

/// Creation form reached from a map click; the position comes from the
/// `?lat=&lng=` query the click navigation pushed.
#[function_component(CityForm)]
pub fn city_form(props: &CityFormProps) -> Html {
    let cities_ctx = use_city_context();
    let url_position = use_url_position();

    let city_name = use_state(String::new);
    let country = use_state(String::new);
    let emoji = use_state(String::new);
    let date = use_state(|| Utc::now().format("%Y-%m-%d").to_string());
    let notes = use_state(String::new);

    let Some((lat, lng)) = url_position else {
        return html! {
            <Message text="Start by clicking somewhere on the map" />
        };
    };

    let on_city_name = input_setter(city_name.clone());
    let on_country = input_setter(country.clone());
    let on_emoji = input_setter(emoji.clone());
    let on_date = input_setter(date.clone());

    let on_notes = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(area.value());
        })
    };

    let on_submit = {
        let create_city = cities_ctx.create_city.clone();
        let on_done = props.on_done.clone();
        let city_name = city_name.clone();
        let country = country.clone();
        let emoji = emoji.clone();
        let date = date.clone();
        let notes = notes.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if city_name.is_empty() || date.is_empty() {
                return;
            }

            create_city.emit(CityDraft {
                city_name: (*city_name).clone(),
                country: (*country).clone(),
                emoji: (*emoji).clone(),
                date: (*date).clone(),
                notes: (*notes).clone(),
                position: Position { lat, lng },
            });

            on_done.emit(());
        })
    };

    html! {
        <form class="city-form" onsubmit={on_submit}>
            <div class="city-form__row">
                <label for="cityName">{ "City name" }</label>
                <input id="cityName" value={(*city_name).clone()} oninput={on_city_name} />
            </div>

            <div class="city-form__row">
                <label for="country">{ "Country" }</label>
                <input id="country" value={(*country).clone()} oninput={on_country} />
            </div>

            <div class="city-form__row">
                <label for="emoji">{ "Flag emoji" }</label>
                <input id="emoji" placeholder="🇫🇷" value={(*emoji).clone()} oninput={on_emoji} />
            </div>

            <div class="city-form__row">
                <label for="date">{ format!("When did you go to {}?", *city_name) }</label>
                <input id="date" type="date" value={(*date).clone()} oninput={on_date} />
            </div>

            <div class="city-form__row">
                <label for="notes">{ format!("Notes about your trip to {}", *city_name) }</label>
                <textarea id="notes" value={(*notes).clone()} oninput={on_notes} />
            </div>

            <button class="btn btn--primary" type="submit">{ "Add" }</button>
        </form>
    }
}

fn input_setter(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
