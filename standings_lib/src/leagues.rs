//! Leagues processed by a batch run, in processing order.

/// An api-sports.io league id paired with the name stored in the standings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub id: i64,
    pub name: &'static str,
}

pub const LEAGUES: &[League] = &[
    League {
        id: 39,
        name: "Premier League",
    },
    League {
        id: 140,
        name: "La Liga",
    },
    League {
        id: 135,
        name: "Serie A",
    },
    League {
        id: 78,
        name: "Bundesliga",
    },
    League {
        id: 61,
        name: "Ligue 1",
    },
];

pub fn league_by_id(id: i64) -> Option<&'static League> {
    LEAGUES.iter().find(|l| l.id == id)
}

/// Case-insensitive lookup by display name.
pub fn league_by_name(name: &str) -> Option<&'static League> {
    let name = name.trim();
    LEAGUES.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}
