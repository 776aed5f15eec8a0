use shared::WishlistItem;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::{models::app_state::AppState, stores::wishlist_store};

#[derive(Properties, PartialEq)]
pub struct WishlistButtonProps {
    pub item: WishlistItem,
}

/// Heart button adding or removing a movie from the wishlist.
#[function_component(WishlistButton)]
pub fn wishlist_button(props: &WishlistButtonProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let liked = props
        .item
        .identity()
        .is_some_and(|id| state.is_liked(id));

    let onclick = {
        let item = props.item.clone();
        Callback::from(move |_: MouseEvent| {
            let wishlist = wishlist_store().toggle_wishlist(Some(item.clone()));
            dispatch.reduce_mut(|state| state.wishlist = wishlist);
        })
    };

    let (icon, label) = if liked {
        ("fa-solid fa-heart text-error", "Remove from wishlist")
    } else {
        ("fa-regular fa-heart", "Add to wishlist")
    };

    html! {
        <button class="btn btn-ghost btn-circle" aria-label={label} title={label} {onclick}>
            <i class={icon}></i>
        </button>
    }
}
