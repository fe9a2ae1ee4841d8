use serde::Serialize;
use standings_lib::{BatchReport, LeagueOutcome, RankedStanding};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct StandingRow {
    #[tabled(rename = "Pos")]
    #[serde(rename = "Pos")]
    position: i64,
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    team: String,
    #[tabled(rename = "P")]
    #[serde(rename = "P")]
    played: i64,
    #[tabled(rename = "W")]
    #[serde(rename = "W")]
    wins: i64,
    #[tabled(rename = "D")]
    #[serde(rename = "D")]
    draws: i64,
    #[tabled(rename = "L")]
    #[serde(rename = "L")]
    losses: i64,
    #[tabled(rename = "GF")]
    #[serde(rename = "GF")]
    goals_for: i64,
    #[tabled(rename = "GA")]
    #[serde(rename = "GA")]
    goals_against: i64,
    #[tabled(rename = "GD")]
    #[serde(rename = "GD")]
    goal_difference: String,
    #[tabled(rename = "Pts")]
    #[serde(rename = "Pts")]
    points: i64,
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "ID")]
    league_id: i64,
    #[tabled(rename = "Result")]
    result: String,
}

// -- Row builders --

fn build_standing_rows(standings: &[RankedStanding]) -> Vec<StandingRow> {
    standings
        .iter()
        .map(|s| StandingRow {
            position: s.position,
            team: s.team_name.clone(),
            played: s.games_played,
            wins: s.wins,
            draws: s.draws,
            losses: s.losses,
            goals_for: s.goals_for,
            goals_against: s.goals_against,
            goal_difference: format_goal_difference(s.goal_difference),
            points: s.points,
        })
        .collect()
}

fn build_report_rows(report: &BatchReport) -> Vec<ReportRow> {
    report
        .leagues
        .iter()
        .map(|l| ReportRow {
            league: l.league_name.clone(),
            league_id: l.league_id,
            result: match &l.outcome {
                LeagueOutcome::Updated { rows } => format!("updated ({} rows)", rows),
                LeagueOutcome::NoData => "no data".to_string(),
                LeagueOutcome::Skipped { reason } => format!("skipped: {}", reason),
            },
        })
        .collect()
}

pub fn print_standings(standings: &[RankedStanding], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&standings),
        OutputFormat::Table => println!("{}", Table::new(build_standing_rows(standings))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_standing_rows(standings));
            table.with(Style::markdown());
            println!("{}", table);
        }
    }
}

pub fn print_report(report: &BatchReport, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => println!("{}", Table::new(build_report_rows(report))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_report_rows(report));
            table.with(Style::markdown());
            println!("{}", table);
        }
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_goal_difference(diff: i64) -> String {
    if diff > 0 {
        format!("+{}", diff)
    } else {
        diff.to_string()
    }
}
