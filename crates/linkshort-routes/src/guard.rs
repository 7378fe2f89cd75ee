//! Navigation guard

use linkshort_session::SessionStore;

use crate::route::Route;

/// Redirects unauthenticated navigation away from protected destinations.
pub struct NavigationGuard {
    session: SessionStore,
}

impl NavigationGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Decide the committed destination for a navigation attempt.
    ///
    /// A protected target without an active session commits the auth
    /// destination instead; everything else commits unchanged. The
    /// redirect is a policy decision, not an error.
    pub fn resolve(&self, target: Route) -> Route {
        if target.is_protected() && !self.session.is_authenticated() {
            tracing::debug!(target = %target.name(), "Redirecting unauthenticated navigation");
            return Route::Auth;
        }
        target
    }
}

impl Clone for NavigationGuard {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkshort_storage::Database;

    fn guard_with_session() -> (NavigationGuard, SessionStore) {
        let session = SessionStore::new(Database::open_in_memory().unwrap());
        (NavigationGuard::new(session.clone()), session)
    }

    #[test]
    fn test_admin_without_session_redirects_to_auth() {
        let (guard, _session) = guard_with_session();
        assert_eq!(guard.resolve(Route::Admin), Route::Auth);
    }

    #[test]
    fn test_admin_with_session_commits() {
        let (guard, session) = guard_with_session();
        session.set_auth("tok", "a@x.com").unwrap();
        assert_eq!(guard.resolve(Route::Admin), Route::Admin);
    }

    #[test]
    fn test_unprotected_routes_never_redirect() {
        let (guard, session) = guard_with_session();

        for route in [
            Route::Home,
            Route::Auth,
            Route::Go {
                code: "abc".to_string(),
            },
        ] {
            assert_eq!(guard.resolve(route.clone()), route);
        }

        session.set_auth("tok", "a@x.com").unwrap();
        for route in [
            Route::Home,
            Route::Auth,
            Route::Go {
                code: "abc".to_string(),
            },
        ] {
            assert_eq!(guard.resolve(route.clone()), route);
        }
    }

    #[test]
    fn test_guard_follows_session_changes() {
        let (guard, session) = guard_with_session();

        assert_eq!(guard.resolve(Route::Admin), Route::Auth);

        session.set_auth("tok", "a@x.com").unwrap();
        assert_eq!(guard.resolve(Route::Admin), Route::Admin);

        session.clear_auth().unwrap();
        assert_eq!(guard.resolve(Route::Admin), Route::Auth);
    }
}
