//! # Navigation
//!
//! The named routes of the app and the guard every navigation goes through.
//!
//! The guard only reads auth state; it never signs anyone in or out.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Source of the "is someone signed in" answer.
pub trait AuthProbe {
    /// Whether a session exists at this moment.
    fn is_authenticated(&self) -> bool;
}

impl<A: AuthProbe + ?Sized> AuthProbe for &A {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// The named routes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouteName {
    /// Landing page with featured movies.
    Home,
    /// Popular movies.
    Popular,
    /// Movie search.
    Search,
    /// The user's liked movies.
    Wishlist,
    /// The sign-in form.
    Signin,
}

impl RouteName {
    /// The route table entry for this name.
    #[must_use]
    pub const fn descriptor(self) -> RouteDescriptor {
        match self {
            Self::Home => RouteDescriptor::guarded(self, "/"),
            Self::Popular => RouteDescriptor::guarded(self, "/popular"),
            Self::Search => RouteDescriptor::guarded(self, "/search"),
            Self::Wishlist => RouteDescriptor::guarded(self, "/wishlist"),
            Self::Signin => RouteDescriptor::public(self, "/signin"),
        }
    }

    /// The path this route is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.descriptor().path
    }
}

/// A navigation target as the guard sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    /// Route name.
    pub name: RouteName,
    /// URL path.
    pub path: &'static str,
    /// Whether only signed-in users may see it.
    pub requires_auth: bool,
}

impl RouteDescriptor {
    /// A route only signed-in users may see.
    #[must_use]
    pub const fn guarded(name: RouteName, path: &'static str) -> Self {
        Self {
            name,
            path,
            requires_auth: true,
        }
    }

    /// A route anyone may see.
    #[must_use]
    pub const fn public(name: RouteName, path: &'static str) -> Self {
        Self {
            name,
            path,
            requires_auth: false,
        }
    }

    /// Look a route up by its exact path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        route_table().find(|route| route.path == path)
    }
}

/// Every route, in declaration order.
pub fn route_table() -> impl Iterator<Item = RouteDescriptor> {
    RouteName::iter().map(RouteName::descriptor)
}

/// What to do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Go where asked.
    Proceed,
    /// Go to this route instead.
    Redirect(RouteName),
}

impl NavigationDecision {
    /// Whether the navigation may continue unchanged.
    #[must_use]
    pub const fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// The redirect target, if any.
    #[must_use]
    pub const fn redirect_target(self) -> Option<RouteName> {
        match self {
            Self::Proceed => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

/// The guard rule.
///
/// Guarded routes send anonymous visitors to sign-in; the sign-in page sends
/// signed-in users home. The first rule is checked first.
#[must_use]
pub fn resolve(target: &RouteDescriptor, authenticated: bool) -> NavigationDecision {
    if target.requires_auth && !authenticated {
        return NavigationDecision::Redirect(RouteName::Signin);
    }
    if target.name == RouteName::Signin && authenticated {
        return NavigationDecision::Redirect(RouteName::Home);
    }
    NavigationDecision::Proceed
}

/// Applies [`resolve`] with auth state read fresh on every check.
#[derive(Debug, Clone)]
pub struct NavigationGuard<A> {
    auth: A,
}

impl<A: AuthProbe> NavigationGuard<A> {
    /// A guard consulting `auth`.
    pub const fn new(auth: A) -> Self {
        Self { auth }
    }

    /// Decide on a navigation to `target`.
    pub fn check(&self, target: &RouteDescriptor) -> NavigationDecision {
        let decision = resolve(target, self.auth.is_authenticated());
        if let NavigationDecision::Redirect(to) = decision {
            debug!(from = %target.name, %to, "Navigation redirected");
        }
        decision
    }

    /// Decide on a navigation to the named route.
    pub fn check_route(&self, name: RouteName) -> NavigationDecision {
        self.check(&name.descriptor())
    }
}
