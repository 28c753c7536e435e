//! Bridge between router routes and the location URLs the quiz reads and
//! writes its position through.

use dioxus_router::Navigator;
use services::LocationHistory;
use url::Url;

use crate::routes::Route;
use crate::views::ViewError;

/// Origin the router's path-and-query is resolved against.
pub const LOCATION_ORIGIN: &str = "https://quiz.local/";

/// Full location URL for a route.
///
/// # Errors
///
/// Returns `ViewError::InvalidLocation` if the route does not form a valid URL.
pub fn route_location(route: &Route) -> Result<Url, ViewError> {
    Url::parse(LOCATION_ORIGIN)
        .and_then(|origin| origin.join(&route.to_string()))
        .map_err(|_| ViewError::InvalidLocation)
}

/// Route addressed by a location URL, if any.
#[must_use]
pub fn route_from_location(location: &Url) -> Option<Route> {
    let mut target = location.path().to_string();
    if let Some(query) = location.query() {
        target.push('?');
        target.push_str(query);
    }
    target.parse::<Route>().ok()
}

/// Router-backed history: quiz writes replace the current route.
pub struct RouterHistory {
    navigator: Navigator,
}

impl RouterHistory {
    #[must_use]
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl LocationHistory for RouterHistory {
    fn replace(&mut self, url: &Url) {
        match route_from_location(url) {
            Some(route) => {
                let _ = self.navigator.replace(route);
            }
            None => log::warn!("no route for location {url}"),
        }
    }
}
