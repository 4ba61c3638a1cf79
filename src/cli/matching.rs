use anyhow::Result;

use super::args::MatchCliArgs;
use crate::config::Config;
use crate::matcher::{find_best_match, MatchResult};
use crate::workout::default_catalog;

pub fn handle_match_command(args: MatchCliArgs) -> Result<()> {
    let config = Config::load()?;
    let threshold = args.threshold.unwrap_or(config.matcher.accept_threshold);
    let candidate = args.name.join(" ");

    let catalog = default_catalog();
    let names = catalog.iter().map(|e| e.name.as_str());

    match find_best_match(&candidate, names, threshold) {
        MatchResult::Resolved(matched) => {
            let muscle_group = catalog
                .iter()
                .find(|e| e.name == matched)
                .map(|e| e.muscle_group.as_str())
                .unwrap_or("other");
            println!("{} ({})", matched, muscle_group);
        }
        MatchResult::Unmatched => {
            println!("No catalog exercise matches '{}'.", candidate);
        }
    }

    Ok(())
}
