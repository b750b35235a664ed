//! Client routes, one per form. Shared by the frontend (menu and history
//! handling) and the host (deep-link fallback).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Teacher,
    Student,
    Video,
    NotFound,
}

impl Route {
    /// Menu order.
    pub const ALL: [Route; 4] = [Route::Login, Route::Teacher, Route::Student, Route::Video];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Teacher => "/teacher",
            Route::Student => "/student",
            Route::Video => "/video",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Teacher => "Register Teacher",
            Route::Student => "Register Student",
            Route::Video => "Upload Video",
            Route::NotFound => "Not Found",
        }
    }

    /// Resolves a location pathname. `/` lands on the login form.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Login;
        }
        Route::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_from_its_own_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn root_and_trailing_slashes() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/student/"), Route::Student);
        assert_eq!(Route::from_path("/video?id=3"), Route::Video);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/flow"), Route::NotFound);
        assert_eq!(Route::from_path("/teacher/extra"), Route::NotFound);
    }
}
