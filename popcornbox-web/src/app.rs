use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    use_effect_with((), move |()| {
        dispatch.set(AppState::load());
        || ()
    });

    html! {
        <BrowserRouter basename={FrontendConfig::shared().router_basename()}>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
