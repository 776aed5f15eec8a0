use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::{components::WishlistButton, models::app_state::AppState};

#[function_component(WishlistPage)]
pub fn wishlist_page() -> Html {
    let wishlist = use_selector(|state: &AppState| state.wishlist.clone());

    html! {
        <section class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">{"Wishlist"}</h1>
            if wishlist.is_empty() {
                <p class="text-base-content/70">{"Nothing saved yet."}</p>
            } else {
                <ul class="list bg-base-200 rounded-box">
                    { for wishlist.iter().map(|item| {
                        let title = item
                            .title()
                            .map(str::to_string)
                            .or_else(|| item.identity().map(ToString::to_string))
                            .unwrap_or_default();
                        html! {
                            <li class="list-row items-center">
                                <span class="flex-grow">{ title }</span>
                                <WishlistButton item={item.clone()} />
                            </li>
                        }
                    }) }
                </ul>
            }
        </section>
    }
}
