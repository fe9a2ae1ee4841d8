//! The `sync` subcommand: fetch every league and rebuild the standings table.

use anyhow::{anyhow, Result};
use clap::Args;
use standings_lib::{
    league_by_id, run_batch, BatchOptions, CachedFetcher, Config, Db, League, ResponseCache,
    LEAGUES,
};

use crate::output::{print_report, OutputFormat};

#[derive(Args)]
pub struct SyncArgs {
    /// Only sync these league ids (repeatable). Defaults to every known league.
    #[arg(long = "league")]
    pub leagues: Vec<i64>,

    /// Keep existing rows instead of dropping the table first. Leagues
    /// that fail keep their previous standings.
    #[arg(long)]
    pub keep_existing: bool,
}

pub async fn run(args: &SyncArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let leagues = select_leagues(&args.leagues)?;

    let cache = ResponseCache::open(&config.cache_path)?;
    let mut db = Db::open(config.db.database_path())?;
    tracing::info!(
        "Connected to standings database at {}",
        config.db.database_path().display()
    );

    let report = {
        let fetcher = CachedFetcher::new(config, &cache)?;
        let options = BatchOptions {
            reset_table: !args.keep_existing,
        };
        run_batch(&fetcher, &mut db, &leagues, options).await?
    };

    db.close()?;
    cache.close()?;

    print_report(&report, format);
    if report.all_updated() {
        eprintln!("Standings data for all leagues has been successfully updated!");
    } else {
        eprintln!(
            "Standings updated for {} of {} leagues",
            report.updated(),
            report.leagues.len()
        );
    }
    Ok(())
}

fn select_leagues(ids: &[i64]) -> Result<Vec<League>> {
    if ids.is_empty() {
        return Ok(LEAGUES.to_vec());
    }
    ids.iter()
        .map(|id| {
            league_by_id(*id)
                .copied()
                .ok_or_else(|| anyhow!("unknown league id {}", id))
        })
        .collect()
}
