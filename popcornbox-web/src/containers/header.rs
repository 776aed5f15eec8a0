use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::app_state::AppState,
    routes::{MainRoute, header_routes},
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let authenticated = use_selector(|state: &AppState| state.authenticated);
    let liked = use_selector(|state: &AppState| state.wishlist.len());

    let render_routes = || -> Html {
        html! {
            { for header_routes().into_iter().map(|route| html! {
                <HeaderNavItem current_route={props.current_route} {route} />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {"PopcornBox"}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_routes() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_routes() }
            </ul>
            <div class="flex items-center gap-2">
                <span class="badge badge-secondary" title="Wishlist">
                    <i class="fa-solid fa-heart mr-1"></i>{ liked.to_string() }
                </span>
                {
                    if *authenticated {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::SignIn} classes="btn btn-primary btn-sm">
                                {MainRoute::SignIn.label()}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
