use yew::prelude::*;

/// Loading indicator shown while a store request is in flight.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-container">
            <div class="spinner"></div>
        </div>
    }
}
