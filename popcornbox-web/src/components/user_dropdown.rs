use crate::{models::app_state::AppState, routes::MainRoute, stores::auth_store};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AppState>();
    let display_name = state
        .user
        .as_ref()
        .and_then(|user| user.display_name().map(str::to_string))
        .unwrap_or_else(|| "Signed in".to_string());
    let email = state
        .user
        .as_ref()
        .and_then(|user| user.email().map(str::to_string))
        .unwrap_or_default();

    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        auth_store().clear_auth_state();
        dispatch.set(AppState::load());
        if let Some(nav) = navigator.as_ref() {
            nav.push(&MainRoute::SignIn);
        }
    });

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ display_name }</div>
                    <div class="text-xs text-base-content/70">{ email }</div>
                </li>
                <div class="divider my-0"></div>
                <li><a {onclick}>{"Sign out"}</a></li>
            </ul>
        </div>
    }
}
