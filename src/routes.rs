use crate::store::{AuthState, AuthStore};

/// Every view the app can show. `Route::parse` accepts the paths for `:go <path>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Landing,
    Auth,
    Dashboard,
    Expenses,
    Goals,
    Business,
    Product(u32),
    Profile,
    Challenges,
    News,
    Chat,
    NotFound,
}

impl Route {
    pub(crate) fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["auth"] => Self::Auth,
            ["dashboard"] => Self::Dashboard,
            ["expenses"] => Self::Expenses,
            ["goals"] => Self::Goals,
            ["business"] => Self::Business,
            ["business", "product", id] => id
                .parse()
                .map(Self::Product)
                .unwrap_or(Self::NotFound),
            ["profile"] => Self::Profile,
            ["challenges"] => Self::Challenges,
            ["news"] => Self::News,
            ["chat"] => Self::Chat,
            _ => Self::NotFound,
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Self::Landing => "/".into(),
            Self::Auth => "/auth".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::Expenses => "/expenses".into(),
            Self::Goals => "/goals".into(),
            Self::Business => "/business".into(),
            Self::Product(id) => format!("/business/product/{id}"),
            Self::Profile => "/profile".into(),
            Self::Challenges => "/challenges".into(),
            Self::News => "/news".into(),
            Self::Chat => "/chat".into(),
            Self::NotFound => "/404".into(),
        }
    }

    pub(crate) fn is_protected(&self) -> bool {
        !matches!(self, Self::Landing | Self::Auth | Self::NotFound)
    }
}

/// Resolve the route to actually show: protected routes send anonymous sessions
/// to the login view.
pub(crate) fn guard(requested: Route, auth: &AuthStore) -> Route {
    match auth.state() {
        AuthState::Anonymous if requested.is_protected() => {
            tracing::debug!(path = %requested.path(), "anonymous session redirected to /auth");
            Route::Auth
        }
        _ => requested,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/auth"), Route::Auth);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/goals/"), Route::Goals);
        assert_eq!(Route::parse("chat"), Route::Chat);
        assert_eq!(Route::parse("/business/product/4"), Route::Product(4));
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/business/product/abc"), Route::NotFound);
        assert_eq!(Route::parse("/business/product"), Route::NotFound);
        assert_eq!(Route::parse("/dashboard/extra"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips_for_views() {
        for route in [
            Route::Landing,
            Route::Auth,
            Route::Dashboard,
            Route::Expenses,
            Route::Goals,
            Route::Business,
            Route::Product(2),
            Route::Profile,
            Route::Challenges,
            Route::News,
            Route::Chat,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_anonymous() {
        let auth = AuthStore::new();
        assert_eq!(guard(Route::Dashboard, &auth), Route::Auth);
        assert_eq!(guard(Route::Product(1), &auth), Route::Auth);
        assert_eq!(guard(Route::Chat, &auth), Route::Auth);
    }

    #[test]
    fn test_guard_lets_public_routes_through() {
        let auth = AuthStore::new();
        assert_eq!(guard(Route::Landing, &auth), Route::Landing);
        assert_eq!(guard(Route::Auth, &auth), Route::Auth);
        assert_eq!(guard(Route::NotFound, &auth), Route::NotFound);
    }

    #[test]
    fn test_guard_passes_authenticated() {
        let mut auth = AuthStore::new();
        auth.login("kid@example.com", "pw");
        assert_eq!(guard(Route::Goals, &auth), Route::Goals);
        auth.logout();
        assert_eq!(guard(Route::Goals, &auth), Route::Auth);
    }
}
