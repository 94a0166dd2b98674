//! Usage: volley-app [config.json] [seed] [max_frames]

use volley_app::exhibition::{self, ExhibitionConfig};
use volley_core::config::{CourtLayout, RallyConfig};
use volley_core::enums::Controller;

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match RallyConfig::from_json_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Invalid rally configuration in {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => RallyConfig::default(),
    };

    let defaults = ExhibitionConfig::default();
    let exhibition = ExhibitionConfig {
        seed: args.next().and_then(|s| s.parse().ok()).unwrap_or(defaults.seed),
        max_frames: args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_frames),
    };

    let layout = CourtLayout::with_controllers([Controller::Human; 4]);
    match exhibition::run(config, &layout, &exhibition) {
        Ok(result) => {
            println!(
                "Final score {}-{} after {} frames ({} hits), winner: {}",
                result.score.left,
                result.score.right,
                result.frames,
                result.hits,
                result
                    .winner
                    .map_or_else(|| "none".to_string(), |side| format!("{side:?}")),
            );
            if let Ok(json) = serde_json::to_string(&result.score) {
                println!("{json}");
            }
        }
        Err(e) => {
            eprintln!("Exhibition failed: {}", e);
            std::process::exit(1);
        }
    }
}
