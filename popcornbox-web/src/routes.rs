use crate::{containers::layout::Layout, pages::*, stores::navigation_guard};
use shared::{NavigationDecision, RouteName};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/popular")]
    Popular,
    #[at("/search")]
    Search,
    #[at("/wishlist")]
    Wishlist,
    #[at("/signin")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// The named route behind this variant; `None` for the fallback.
    pub const fn route_name(self) -> Option<RouteName> {
        match self {
            Self::Home => Some(RouteName::Home),
            Self::Popular => Some(RouteName::Popular),
            Self::Search => Some(RouteName::Search),
            Self::Wishlist => Some(RouteName::Wishlist),
            Self::SignIn => Some(RouteName::Signin),
            Self::NotFound => None,
        }
    }

    /// Label shown in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Popular => "Popular",
            Self::Search => "Search",
            Self::Wishlist => "Wishlist",
            Self::SignIn => "Sign in",
            Self::NotFound => "Not found",
        }
    }
}

impl From<RouteName> for MainRoute {
    fn from(name: RouteName) -> Self {
        match name {
            RouteName::Home => Self::Home,
            RouteName::Popular => Self::Popular,
            RouteName::Search => Self::Search,
            RouteName::Wishlist => Self::Wishlist,
            RouteName::Signin => Self::SignIn,
        }
    }
}

/// Routes listed in the navigation bar.
pub fn header_routes() -> Vec<MainRoute> {
    MainRoute::iter()
        .filter(|route| !matches!(route, MainRoute::SignIn | MainRoute::NotFound))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: MainRoute,
}

/// Runs the navigation guard before anything of the target page renders.
#[function_component(GuardedRoute)]
fn guarded_route(props: &GuardedRouteProps) -> Html {
    let Some(name) = props.route.route_name() else {
        return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
    };

    match navigation_guard().check_route(name) {
        NavigationDecision::Redirect(target) => {
            html! { <Redirect<MainRoute> to={MainRoute::from(target)} /> }
        }
        NavigationDecision::Proceed => render_page(props.route),
    }
}

fn render_page(route: MainRoute) -> Html {
    match route {
        MainRoute::SignIn => html! { <SignInPage /> },
        MainRoute::Home => html! {
            <Layout current_route={route}>
                <BrowsePage title="Featured" />
            </Layout>
        },
        MainRoute::Popular => html! {
            <Layout current_route={route}>
                <BrowsePage title="Popular" />
            </Layout>
        },
        MainRoute::Search => html! {
            <Layout current_route={route}>
                <BrowsePage title="Search" />
            </Layout>
        },
        MainRoute::Wishlist => html! {
            <Layout current_route={route}>
                <WishlistPage />
            </Layout>
        },
        MainRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    tracing::debug!(?route, "Switching to main route");
    html! { <GuardedRoute {route} /> }
}
