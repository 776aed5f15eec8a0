//! Tests for the route table and the navigation guard.

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::str::FromStr;

    use serde_json::Map;
    use test_case::test_case;

    use crate::navigation::*;
    use crate::auth::AuthStore;
    use crate::storage::MemoryStorage;

    struct FakeAuth(Cell<bool>);

    impl AuthProbe for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_route_table() {
        let routes: Vec<_> = route_table()
            .map(|route| (route.name.to_string(), route.path, route.requires_auth))
            .collect();
        assert_eq!(
            routes,
            vec![
                ("home".to_string(), "/", true),
                ("popular".to_string(), "/popular", true),
                ("search".to_string(), "/search", true),
                ("wishlist".to_string(), "/wishlist", true),
                ("signin".to_string(), "/signin", false),
            ]
        );
    }

    #[test]
    fn test_route_names_are_unique() {
        let names: HashSet<_> = route_table().map(|route| route.name).collect();
        let paths: HashSet<_> = route_table().map(|route| route.path).collect();
        assert_eq!(names.len(), RouteName::iter().count());
        assert_eq!(paths.len(), names.len());
    }

    #[test]
    fn test_route_name_parsing() {
        assert_eq!(RouteName::from_str("signin").unwrap(), RouteName::Signin);
        assert_eq!(RouteName::Wishlist.as_ref(), "wishlist");
        assert!(RouteName::from_str("admin").is_err());
        assert_eq!(
            serde_json::to_string(&RouteName::Popular).unwrap(),
            "\"popular\""
        );
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            RouteDescriptor::from_path("/search").map(|route| route.name),
            Some(RouteName::Search)
        );
        assert_eq!(RouteDescriptor::from_path("/nowhere"), None);
        assert_eq!(RouteName::Signin.path(), "/signin");
    }

    #[test_case(RouteName::Home ; "home")]
    #[test_case(RouteName::Popular ; "popular")]
    #[test_case(RouteName::Search ; "search")]
    #[test_case(RouteName::Wishlist ; "wishlist")]
    fn test_guarded_route(name: RouteName) {
        let route = name.descriptor();
        assert_eq!(
            resolve(&route, false),
            NavigationDecision::Redirect(RouteName::Signin)
        );
        assert_eq!(resolve(&route, true), NavigationDecision::Proceed);
    }

    #[test]
    fn test_signin_route() {
        let route = RouteName::Signin.descriptor();
        assert_eq!(
            resolve(&route, true),
            NavigationDecision::Redirect(RouteName::Home)
        );
        assert_eq!(resolve(&route, false), NavigationDecision::Proceed);
    }

    #[test]
    fn test_requires_auth_wins_over_signin_rule() {
        let route = RouteDescriptor::guarded(RouteName::Signin, "/signin");
        assert_eq!(
            resolve(&route, false),
            NavigationDecision::Redirect(RouteName::Signin)
        );
        assert_eq!(
            resolve(&route, true),
            NavigationDecision::Redirect(RouteName::Home)
        );
    }

    #[test]
    fn test_decision_helpers() {
        assert!(NavigationDecision::Proceed.is_proceed());
        assert_eq!(NavigationDecision::Proceed.redirect_target(), None);
        let redirect = NavigationDecision::Redirect(RouteName::Home);
        assert!(!redirect.is_proceed());
        assert_eq!(redirect.redirect_target(), Some(RouteName::Home));
    }

    #[test]
    fn test_guard_reads_auth_on_every_check() {
        let auth = FakeAuth(Cell::new(false));
        let guard = NavigationGuard::new(&auth);

        assert_eq!(
            guard.check_route(RouteName::Popular),
            NavigationDecision::Redirect(RouteName::Signin)
        );
        auth.0.set(true);
        assert!(guard.check_route(RouteName::Popular).is_proceed());
        assert_eq!(
            guard.check_route(RouteName::Signin),
            NavigationDecision::Redirect(RouteName::Home)
        );
    }

    #[test]
    fn test_guard_over_auth_store() {
        let storage = MemoryStorage::new();
        let auth = AuthStore::new(&storage);
        let guard = NavigationGuard::new(AuthStore::new(&storage));

        assert_eq!(
            guard.check_route(RouteName::Wishlist),
            NavigationDecision::Redirect(RouteName::Signin)
        );
        assert!(guard.check_route(RouteName::Signin).is_proceed());

        auth.save_session(Map::new());
        assert!(guard.check_route(RouteName::Wishlist).is_proceed());

        auth.clear_auth_state();
        assert_eq!(
            guard.check_route(RouteName::Home),
            NavigationDecision::Redirect(RouteName::Signin)
        );
    }

    #[test]
    fn test_guard_does_not_touch_storage() {
        let storage = MemoryStorage::new();
        let guard = NavigationGuard::new(AuthStore::new(&storage));
        for route in route_table() {
            let _ = guard.check(&route);
        }
        assert!(storage.is_empty());
    }
}
