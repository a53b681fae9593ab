use yew::prelude::*;

use super::{CityDetails, CityForm, CityList, CountryList, MapView};
use crate::hooks::{push_position_query, CityProvider};
use crate::models::Position;

/// Sidebar screens. Navigation is in-app state; coordinates travel through
/// the `?lat=&lng=` query so the map can follow.
#[derive(Clone, PartialEq)]
pub enum AppView {
    Cities,
    Countries,
    CityDetail(String),
    AddCity,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <CityProvider>
            <TrackerShell />
        </CityProvider>
    }
}

#[function_component(TrackerShell)]
fn tracker_shell() -> Html {
    let view = use_state(|| AppView::Cities);

    // Click en una ciudad de la lista → detalle + recentrar mapa
    let on_select_city = {
        let view = view.clone();
        Callback::from(move |(id, position): (String, Position)| {
            push_position_query(position.lat, position.lng);
            view.set(AppView::CityDetail(id));
        })
    };

    // Click en el mapa → formulario de creación con las coordenadas
    let on_map_click = {
        let view = view.clone();
        Callback::from(move |(lat, lng): (f64, f64)| {
            push_position_query(lat, lng);
            view.set(AppView::AddCity);
        })
    };

    let on_back_to_list = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(AppView::Cities))
    };

    let show_cities = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(AppView::Cities))
    };

    let show_countries = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(AppView::Countries))
    };

    let (cities_tab_class, countries_tab_class) = match *view {
        AppView::Countries => ("tab", "tab tab--active"),
        _ => ("tab tab--active", "tab"),
    };

    let sidebar = match (*view).clone() {
        AppView::Cities => html! { <CityList on_select={on_select_city} /> },
        AppView::Countries => html! { <CountryList /> },
        AppView::CityDetail(id) => html! {
            <CityDetails city_id={id} on_back={on_back_to_list.clone()} />
        },
        AppView::AddCity => html! { <CityForm on_done={on_back_to_list.clone()} /> },
    };

    html! {
        <div class="app">
            <div class="sidebar">
                <header class="app-header">
                    <h1>{ "🌍 City Tracker" }</h1>
                </header>
                <nav class="app-nav">
                    <button class={cities_tab_class} onclick={show_cities}>{ "Cities" }</button>
                    <button class={countries_tab_class} onclick={show_countries}>{ "Countries" }</button>
                </nav>
                { sidebar }
            </div>
            <MapView on_map_click={on_map_click} />
        </div>
    }
}
