//! Generates test transcript JSON files for the replay host.
//!
//! Usage:
//!   cargo run -p gooduel-core --example gen-transcript -- [volley|rapid|idle] > transcript.json

use gooduel_core::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "volley".to_string());

    let config = default_config(42);

    let transcript: Vec<TickInput> = match mode.as_str() {
        "volley" => {
            // Turn-based duel: through the menus, then a commit every 37
            // ticks. Commits land as angle locks, fires, or no-ops depending
            // on whose turn it is — the sweep timing decides the shots.
            (0..6000u32)
                .map(|t| {
                    let buttons = match t {
                        0 => button::BEGIN,
                        1 => button::MODE_TURN_BASED,
                        2 => button::BEGIN,
                        _ if t % 37 == 0 => button::COMMIT,
                        _ => 0,
                    };
                    TickInput { buttons }
                })
                .collect()
        }
        "rapid" => {
            // Rapid fire: both players hammer their commit keys on different
            // cadences; the in-flight cap drops the excess.
            (0..6000u32)
                .map(|t| {
                    let mut buttons = match t {
                        0 => button::BEGIN,
                        1 => button::MODE_RAPID_FIRE,
                        2 => button::BEGIN,
                        _ => 0,
                    };
                    if t > 2 {
                        if t % 23 == 0 {
                            buttons |= button::COMMIT_P1;
                        }
                        if t % 31 == 0 {
                            buttons |= button::COMMIT_P2;
                        }
                    }
                    TickInput { buttons }
                })
                .collect()
        }
        "idle" => {
            // Nobody presses anything; the session idles on the splash.
            vec![NULL_INPUT; 600]
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'volley', 'rapid', or 'idle'", mode);
            std::process::exit(1);
        }
    };

    // Verify by running the sim
    let mut state = create_initial_state(&config);
    for tick_input in &transcript {
        state = step(&state, tick_input, &config).state;
        if state.phase == Phase::GameOver {
            break;
        }
    }

    eprintln!("=== Sim result ({} mode) ===", mode);
    eprintln!("Final tick: {}", state.tick);
    eprintln!("Phase: {:?}", state.phase);
    eprintln!("Scores: P0={}, P1={}", state.scores[0], state.scores[1]);
    eprintln!(
        "Projectiles in flight: {}, buildings damaged: {}",
        state.projectiles.len(),
        state
            .buildings
            .iter()
            .filter(|b| !b.destroyed_chunks.is_empty())
            .count()
    );

    let input = ReplayInput { config, transcript };

    println!("{}", serde_json::to_string(&input).unwrap());
}
