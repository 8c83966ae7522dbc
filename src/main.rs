//! Perfect Circle entry point
//!
//! Native harness: replays a seeded demo trace through the game and prints
//! the outcome. Usage: `perfect-circle [seed]`

use perfect_circle::demo::DemoTrace;
use perfect_circle::hud::format_percentage;
use perfect_circle::settings::SETTINGS_FILE;
use perfect_circle::sim::SessionEvent;
use perfect_circle::{Game, Settings};

/// Logical size of the play area
const VIEW_SIZE: (f64, f64) = (390.0, 844.0);

fn main() {
    env_logger::init();
    log::info!("Perfect Circle (native) starting...");

    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("invalid seed: {e}");
            std::process::exit(2);
        }
        None => 1,
    };

    let settings = Settings::load_or_default(SETTINGS_FILE);
    let mut game = Game::new(&settings, Game::view_center(VIEW_SIZE.0, VIEW_SIZE.1));
    log::info!("Replaying demo trace with seed: {seed}");

    let trace = DemoTrace::new(seed);
    for event in trace.events(game.center(), 0.0) {
        match game.handle(&event) {
            Some(SessionEvent::Quality(update)) => log::debug!(
                "{} (color {:.1}, {})",
                format_percentage(update.quality),
                update.color_percentage,
                update.color.to_hex()
            ),
            Some(SessionEvent::Failed(failure)) => println!("Game Over: {failure}"),
            Some(SessionEvent::Finished(result)) => {
                println!("Best: {}", format_percentage(result.best_quality));
            }
            _ => {}
        }
    }

    if !game.session().phase().is_terminal() {
        log::warn!("Trace ended without finishing the attempt");
    }

    match serde_json::to_string_pretty(game.hud()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Failed to serialize HUD: {e}"),
    }
}
