//! The `show` subcommand: print the ranked table for one league.

use anyhow::{anyhow, Result};
use clap::Args;
use standings_lib::{league_by_id, league_by_name, Config, Db, League};

use crate::output::{print_standings, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// League name (e.g. "Serie A") or api-sports league id (e.g. 135)
    pub league: String,
}

pub fn run(args: &ShowArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let league = resolve_league(&args.league)?;
    let db = Db::open(config.db.database_path())?;
    db.init()?;

    let standings = db.ranked_standings(league.name)?;
    db.close()?;

    if standings.is_empty() {
        eprintln!(
            "No standings stored for {}. Run 'standings sync' first.",
            league.name
        );
        return Ok(());
    }
    if *format != OutputFormat::Json {
        println!("{} standings for the {} season:", league.name, config.season);
    }
    print_standings(&standings, format);
    Ok(())
}

fn resolve_league(input: &str) -> Result<&'static League> {
    let found = match input.trim().parse::<i64>() {
        Ok(id) => league_by_id(id),
        Err(_) => league_by_name(input),
    };
    found.ok_or_else(|| anyhow!("unknown league {:?}", input))
}
