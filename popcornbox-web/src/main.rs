mod app;
mod components;
mod config;
mod containers;
mod logging;
mod models;
mod pages;
mod routes;
mod storage;
mod stores;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let level = FrontendConfig::shared()
        .client()
        .level()
        .unwrap_or(tracing::Level::INFO);
    logging::init(level);
    tracing::info!("Starting PopcornBox");

    if stores::resume_remembered_session() {
        tracing::debug!("Resumed remembered session before first render");
    }

    Renderer::<Root>::new().render();
}
