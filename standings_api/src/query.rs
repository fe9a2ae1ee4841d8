//! Query parameters for the standings endpoint.

use url::Url;

/// Trait implemented by query builders that serialize themselves onto a URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Standings for one league in one season.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandingsQuery {
    pub league: i64,
    pub season: i32,
}

impl StandingsQuery {
    pub fn new(league: i64, season: i32) -> Self {
        Self { league, season }
    }
}

impl Query for StandingsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("season", &self.season.to_string())
            .append_pair("league", &self.league.to_string());
        url
    }
}
