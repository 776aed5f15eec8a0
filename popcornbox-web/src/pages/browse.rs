use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct BrowsePageProps {
    pub title: AttrValue,
}

/// Placeholder for the movie listings; shows who is browsing.
#[function_component(BrowsePage)]
pub fn browse_page(props: &BrowsePageProps) -> Html {
    let greeting = use_selector(|state: &AppState| {
        state
            .user
            .as_ref()
            .and_then(|user| user.display_name().map(str::to_string))
    });

    html! {
        <section class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">{ props.title.clone() }</h1>
            if let Some(name) = &*greeting {
                <p class="text-base-content/70">{ format!("Welcome back, {name}.") }</p>
            }
        </section>
    }
}
