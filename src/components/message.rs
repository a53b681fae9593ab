use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub text: String,
}

/// Empty-state / hint message for the sidebar views.
#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    html! {
        <p class="message">
            <span role="img">{ "👋" }</span>
            { " " }
            { &props.text }
        </p>
    }
}
