mod browse;
mod signin;
mod wishlist;

pub use browse::BrowsePage;
pub use signin::SignInPage;
pub use wishlist::WishlistPage;
