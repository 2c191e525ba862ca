pub mod args;
pub mod attack;
pub mod cluster;
pub mod crit;
pub mod location;
pub mod roll;
pub mod tn;

use std::fs;
use std::path::Path;

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tracing::debug;

use gator_mechanics::{Engine, EngineConfig, TargetNumber, Tier};

/// Engine plus output settings shared by every subcommand.
pub struct Session {
    pub engine: Engine,
    json: bool,
}

impl Session {
    /// Build the engine from an optional config file; `--seed` wins over the file.
    pub fn new(seed: Option<u64>, config: Option<&Path>, json: bool) -> Result<Self, String> {
        let mut cfg = match config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                let cfg = EngineConfig::from_json(&text)
                    .map_err(|e| format!("{}: {e}", path.display()))?;
                debug!(path = %path.display(), "config loaded");
                cfg
            }
            None => EngineConfig::default(),
        };
        if let Some(seed) = seed {
            cfg = cfg.with_seed(seed);
        }
        Ok(Self {
            engine: Engine::new(&cfg),
            json,
        })
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<(), String> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| format!("cannot serialize result: {e}"))?;
        println!("{text}");
        Ok(())
    }
}

/// The target number colored by tier.
fn tn_label(tn: &TargetNumber) -> ColoredString {
    if !tn.is_possible() {
        return format!("{tn} (impossible)").red().bold();
    }
    let label = tn.to_string();
    match tn.tier {
        Tier::Automatic => label.green().bold(),
        Tier::Standard => label.yellow().bold(),
        Tier::Hard => label.red().bold(),
    }
}

fn hit_label(hit: bool) -> ColoredString {
    if hit {
        "HIT".green().bold()
    } else {
        "MISS".red().bold()
    }
}
