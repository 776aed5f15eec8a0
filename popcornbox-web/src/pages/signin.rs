use crate::{models::app_state::AppState, routes::MainRoute, stores::auth_store};
use serde_json::Value;
use shared::{RecordFields, UserProfile};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Credential fields carried by the session and the remembered user.
///
/// The password never reaches storage.
fn credentials(email: &str) -> RecordFields {
    let mut fields = RecordFields::new();
    fields.insert("email".to_string(), Value::from(email));
    fields
}

#[function_component(SignInPage)]
pub fn signin_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let email_handle = email.clone();
        let remember_handle = remember.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = email_handle.trim().to_string();
            if email_value.is_empty() {
                return;
            }

            let auth = auth_store();
            auth.save_user(&UserProfile::with_email(email_value.as_str()));
            auth.save_session(credentials(&email_value));
            if *remember_handle {
                let mut remembered = credentials(&email_value);
                remembered.insert("autoLogin".to_string(), Value::Bool(true));
                auth.remember_user(remembered);
            }
            tracing::info!(remember = *remember_handle, "Signed in");

            dispatch.set(AppState::load());
            if let Some(nav) = navigator.as_ref() {
                nav.push(&MainRoute::Home);
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_remember_change = {
        let remember = remember.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                remember.set(input.checked());
            }
        })
    };

    let disable_submit = email.trim().is_empty() || password.is_empty();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                checked={*remember}
                                onchange={on_remember_change}
                            />
                            <span class="label-text">{"Remember me"}</span>
                        </label>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {"Sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
