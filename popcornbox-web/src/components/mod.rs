pub(crate) mod header_nav_item;
pub(crate) mod user_dropdown;
pub(crate) mod wishlist_button;

pub use wishlist_button::WishlistButton;
