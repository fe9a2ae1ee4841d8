//! The `leagues` subcommand: list the leagues a sync processes.

use standings_lib::LEAGUES;

pub fn run() {
    for league in LEAGUES {
        println!("{:>4}  {}", league.id, league.name);
    }
}
