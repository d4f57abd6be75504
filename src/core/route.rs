//! # Routes
//!
//! Client-side paths. There is no server behind them; a route only decides
//! which screen is mounted and which country the detail loader is keyed on.
//!
//! ```text
//! /                        Landing
//! /countries               Directory (prompt to pick a country)
//! /countries/{identifier}  Directory + Detail
//! ```

use std::fmt;
use std::str::FromStr;

use super::country::CountryCode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Landing,
    Directory,
    Country(CountryCode),
}

/// A path that matches no route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no route matches {:?}", self.0)
    }
}

impl std::error::Error for UnknownRoute {}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Directory => "/countries".to_string(),
            Route::Country(code) => format!("/countries/{code}"),
        }
    }

    /// True for every route that mounts the directory screen.
    pub fn in_directory(&self) -> bool {
        matches!(self, Route::Directory | Route::Country(_))
    }

    pub fn country(&self) -> Option<&CountryCode> {
        match self {
            Route::Country(code) => Some(code),
            _ => None,
        }
    }

    /// One level up: detail → directory → landing.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Landing => None,
            Route::Directory => Some(Route::Landing),
            Route::Country(_) => Some(Route::Directory),
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["countries"] => Ok(Route::Directory),
            ["countries", id] => id
                .parse::<CountryCode>()
                .map(Route::Country)
                .map_err(|_| UnknownRoute(path.to_string())),
            _ => Err(UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::code;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Landing));
        assert_eq!("".parse::<Route>(), Ok(Route::Landing));
        assert_eq!("/countries".parse::<Route>(), Ok(Route::Directory));
        assert_eq!("/countries/".parse::<Route>(), Ok(Route::Directory));
        assert_eq!("/countries/deu".parse::<Route>(), Ok(Route::Country(code("DEU"))));
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!("/cities".parse::<Route>().is_err());
        assert!("/countries/DE".parse::<Route>().is_err());
        assert!("/countries/DEU/extra".parse::<Route>().is_err());
    }

    #[test]
    fn test_path_round_trips() {
        for route in [Route::Landing, Route::Directory, Route::Country(code("GHA"))] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_parent_walks_up() {
        assert_eq!(Route::Country(code("FRA")).parent(), Some(Route::Directory));
        assert_eq!(Route::Directory.parent(), Some(Route::Landing));
        assert_eq!(Route::Landing.parent(), None);
    }
}
