use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route == Some(props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              {props.route.label()}
          </Link<MainRoute>>
      </li>
    }
}
