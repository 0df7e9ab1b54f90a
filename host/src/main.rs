use std::io::Read;

use gooduel_core::{run_replay, ReplayInput};

fn load_input() -> ReplayInput {
    let args: Vec<String> = std::env::args().collect();

    let json_str = if args.len() > 1 && !args[1].starts_with("--") {
        std::fs::read_to_string(&args[1]).expect("Failed to read transcript file")
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read from stdin");
        buf
    };

    serde_json::from_str(&json_str).expect("Failed to parse ReplayInput JSON")
}

fn main() {
    eprintln!("Loading transcript...");
    let input = load_input();
    eprintln!(
        "Transcript loaded: {} ticks, seed={}",
        input.transcript.len(),
        input.config.seed
    );

    let output = run_replay(&input);

    println!("=== Replay Result ===");
    println!("Winner: {}", output.winner);
    println!("Scores: P0={}, P1={}", output.scores[0], output.scores[1]);
    println!("Final tick: {}", output.final_tick);
    println!("Final phase: {:?}", output.final_phase);
    println!("Transcript hash: {}", hex::encode(output.transcript_hash));
    println!("Seed commit: {}", hex::encode(output.seed_commit));
}
