/// Navigation targets of the client
///
/// Every page the shell can show is a variant here, so a link to a
/// route that does not exist cannot be written.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// Landing page, also where the composer returns after closing
    #[default]
    Home,
    Login,
    Join,
    Search,
    Bookmark,
    Notice,
    /// Hosts the post composer
    Post,
}

impl Route {
    /// Entries of the left sidebar, top to bottom
    pub const SIDEBAR: [Route; 4] = [Route::Search, Route::Bookmark, Route::Notice, Route::Post];

    /// Links in the top bar next to the brand
    pub const ACCOUNT: [Route; 2] = [Route::Login, Route::Join];

    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Login,
        Route::Join,
        Route::Search,
        Route::Bookmark,
        Route::Notice,
        Route::Post,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Join => "/join",
            Route::Search => "/search",
            Route::Bookmark => "/bookmark",
            Route::Notice => "/notice",
            Route::Post => "/post",
        }
    }

    /// Human readable name used for links and page headings
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Log in",
            Route::Join => "Sign up",
            Route::Search => "Search",
            Route::Bookmark => "Bookmarks",
            Route::Notice => "Notifications",
            Route::Post => "Create",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == s)
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Route {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}
