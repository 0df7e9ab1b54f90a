use crate::constants::*;
use crate::scale::{neutral_scale, select_map_scale};
use crate::skyline::{generate_buildings, position_players};
use crate::types::*;

/// Default 800×600, first-to-five config.
pub fn default_config(seed: Seed) -> GameConfig {
    GameConfig {
        seed,
        screen_width: SCREEN_WIDTH,
        screen_height: SCREEN_HEIGHT,
        wins_needed: WINS_NEEDED,
        tick_rate: TICK_RATE,
    }
}

/// Fresh session on the splash screen. No skyline exists until a mode is
/// chosen.
pub fn create_initial_state(config: &GameConfig) -> GameState {
    GameState {
        tick: 0,
        phase: Phase::Splash,
        mode: Mode::TurnBased,
        rng_state: config.seed,
        current_player: 0,
        scores: [0, 0],
        scale: neutral_scale(),
        buildings: Vec::new(),
        players: Vec::new(),
        aim: [AimState::default(); 2],
        projectiles: Vec::new(),
        pending_feedback: None,
        feedback: None,
        last_twinkle_tick: 0,
    }
}

/// Regenerate the round: new scale, new skyline, players repositioned, all
/// round-local state cleared. Scores, mode and the active turn persist.
pub fn reset_round(state: &mut GameState, config: &GameConfig) {
    let (scale, rng_state) = select_map_scale(state.rng_state, config.screen_width);
    let (buildings, rng_state) =
        generate_buildings(&scale, config.screen_width, config.screen_height, rng_state);

    state.players = position_players(&buildings);
    state.scale = scale;
    state.buildings = buildings;
    state.rng_state = rng_state;
    state.aim = [AimState::default(); 2];
    state.projectiles.clear();
    state.pending_feedback = None;
    state.feedback = None;
    state.last_twinkle_tick = state.tick;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_blank_splash() {
        let config = default_config(42);
        let state = create_initial_state(&config);
        assert_eq!(state.tick, 0);
        assert_eq!(state.phase, Phase::Splash);
        assert_eq!(state.rng_state, 42);
        assert_eq!(state.scores, [0, 0]);
        assert!(state.buildings.is_empty());
        assert!(state.players.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.aim[0].selecting_angle);
        assert_eq!(state.aim[0].angle, INITIAL_ANGLE);
        assert_eq!(state.aim[0].force, INITIAL_FORCE);
    }

    #[test]
    fn reset_round_builds_the_world_and_keeps_scores() {
        let config = default_config(7);
        let mut state = create_initial_state(&config);
        state.scores = [3, 1];
        state.current_player = 1;
        state.projectiles.push(Projectile {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            owner: 0,
        });

        reset_round(&mut state, &config);

        assert_eq!(state.buildings.len(), NUM_BUILDINGS);
        assert_eq!(state.players.len(), 2);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.scores, [3, 1]);
        assert_eq!(state.current_player, 1);
        assert!(state.pending_feedback.is_none());
        assert!(state.feedback.is_none());
        assert_eq!(state.aim[0], AimState::default());
        assert_eq!(state.aim[1], AimState::default());
    }

    #[test]
    fn consecutive_rounds_differ() {
        let config = default_config(9);
        let mut state = create_initial_state(&config);
        reset_round(&mut state, &config);
        let first = state.clone();
        reset_round(&mut state, &config);
        // Each reset consumes PRNG draws, so the stream position must move.
        assert_ne!(first.rng_state, state.rng_state);
    }
}
