use crate::aim::{commit_aim, next_aim, CommitOutcome};
use crate::constants::*;
use crate::destruction::destroy_chunk;
use crate::init::reset_round;
use crate::projectiles::{in_flight, launch, resolve_projectile, Resolution};
use crate::skyline::twinkle_windows;
use crate::types::*;

/// Core deterministic transition function.
///
/// Sub-step order:
///  1. Phase logic — menu input, aim oscillation and commits, projectile
///     simulation, feedback countdowns
///  2. Window twinkle on its cadence
///
/// Input a state does not recognize is silently ignored; a rapid-fire commit
/// at the in-flight cap is dropped, not queued.
pub fn step(prev: &GameState, input: &TickInput, config: &GameConfig) -> StepResult {
    let mut state = prev.clone();
    let mut effects: Vec<Effect> = Vec::new();
    state.tick = prev.tick + 1;

    match prev.phase {
        Phase::Splash => update_splash(&mut state, input, &mut effects),
        Phase::ModeSelect => update_mode_select(&mut state, input, config, &mut effects),
        Phase::Start => update_start(&mut state, input, config),
        Phase::PlayerTurn | Phase::Playing => match state.mode {
            Mode::TurnBased => update_turn_based(&mut state, input, config, &mut effects),
            Mode::RapidFire => update_rapid_fire(&mut state, input, config, &mut effects),
        },
        Phase::HitFeedback => update_feedback(&mut state, config, &mut effects),
        Phase::GameOver => update_game_over(&mut state, input, config, &mut effects),
    }

    if !state.buildings.is_empty()
        && state.tick.saturating_sub(state.last_twinkle_tick) > TWINKLE_INTERVAL_TICKS
    {
        state.rng_state = twinkle_windows(&mut state.buildings, state.rng_state);
        state.last_twinkle_tick = state.tick;
    }

    StepResult { state, effects }
}

fn update_splash(state: &mut GameState, input: &TickInput, effects: &mut Vec<Effect>) {
    if input.buttons & button::BEGIN != 0 {
        effects.push(Effect::Audio(AudioCue::MenuSelect));
        state.phase = Phase::ModeSelect;
    }
}

fn update_mode_select(
    state: &mut GameState,
    input: &TickInput,
    config: &GameConfig,
    effects: &mut Vec<Effect>,
) {
    let chosen = if input.buttons & button::MODE_TURN_BASED != 0 {
        Some(Mode::TurnBased)
    } else if input.buttons & button::MODE_RAPID_FIRE != 0 {
        Some(Mode::RapidFire)
    } else {
        None
    };

    if let Some(mode) = chosen {
        effects.push(Effect::Audio(AudioCue::MenuSelect));
        state.mode = mode;
        // Generate a skyline now so the start overlay has a scene behind it.
        reset_round(state, config);
        state.phase = Phase::Start;
    }
}

fn update_start(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    if input.buttons & button::BEGIN != 0 {
        reset_round(state, config);
        state.phase = Phase::PlayerTurn;
    }
}

fn update_turn_based(
    state: &mut GameState,
    input: &TickInput,
    config: &GameConfig,
    effects: &mut Vec<Effect>,
) {
    match state.phase {
        Phase::PlayerTurn => {
            let cur = state.current_player as usize;
            state.aim[cur] = next_aim(&state.aim[cur]);
            if input.buttons & button::COMMIT != 0 {
                let (aim, outcome) = commit_aim(&state.aim[cur]);
                state.aim[cur] = aim;
                if let CommitOutcome::Fired { angle, force } = outcome {
                    let proj = launch(&state.players[cur], state.current_player, angle, force);
                    state.projectiles.push(proj);
                    effects.push(Effect::Audio(AudioCue::Throw));
                    state.phase = Phase::Playing;
                }
            }
        }
        Phase::Playing => {
            let summary = advance_projectiles(state, config, effects);
            if summary.hits == 0 && summary.misses > 0 {
                // The throw resolved without scoring: control passes straight
                // back, no feedback delay.
                state.current_player = 1 - state.current_player;
                let next = state.current_player as usize;
                state.aim[next].selecting_angle = true;
                state.phase = Phase::PlayerTurn;
            }
            tick_pending_feedback(state);
        }
        _ => {}
    }
}

fn update_rapid_fire(
    state: &mut GameState,
    input: &TickInput,
    config: &GameConfig,
    effects: &mut Vec<Effect>,
) {
    // Both meters sweep every tick, whether or not anything is in the air.
    for aim in state.aim.iter_mut() {
        *aim = next_aim(aim);
    }

    advance_projectiles(state, config, effects);

    for (pid, bit) in [(0 as PlayerId, button::COMMIT_P1), (1, button::COMMIT_P2)] {
        if input.buttons & bit == 0 {
            continue;
        }
        if in_flight(&state.projectiles, pid) >= MAX_INFLIGHT_PER_PLAYER {
            continue; // at the cap the whole press is dropped
        }
        let idx = pid as usize;
        let (aim, outcome) = commit_aim(&state.aim[idx]);
        state.aim[idx] = aim;
        if let CommitOutcome::Fired { angle, force } = outcome {
            state
                .projectiles
                .push(launch(&state.players[idx], pid, angle, force));
            effects.push(Effect::Audio(AudioCue::Throw));
        }
    }

    tick_pending_feedback(state);

    if state.phase != Phase::HitFeedback {
        state.phase = if state.projectiles.is_empty() {
            Phase::PlayerTurn
        } else {
            Phase::Playing
        };
    }
}

struct AdvanceSummary {
    hits: u32,
    misses: u32,
}

/// Simulate every in-flight projectile one tick. Resolution order per
/// projectile: opposing player, then bounds, then buildings left to right.
/// Same-tick multiple hits each score independently; only the first arms the
/// feedback delay.
fn advance_projectiles(
    state: &mut GameState,
    config: &GameConfig,
    effects: &mut Vec<Effect>,
) -> AdvanceSummary {
    let mut summary = AdvanceSummary { hits: 0, misses: 0 };
    if state.projectiles.is_empty() {
        return summary;
    }

    let previous = std::mem::take(&mut state.projectiles);
    for proj in &previous {
        effects.push(Effect::TrailMarker { x: proj.x, y: proj.y });

        match resolve_projectile(
            proj,
            &state.players,
            &state.buildings,
            config.screen_width,
            config.screen_height,
        ) {
            Resolution::InFlight(moved) => state.projectiles.push(moved),
            Resolution::HitPlayer { victim, x, y } => {
                summary.hits += 1;
                state.scores[proj.owner as usize] += 1;
                effects.push(Effect::ScoreChanged {
                    scores: state.scores,
                });
                effects.push(Effect::Audio(AudioCue::PlayerHit));
                effects.push(Effect::Impact {
                    x,
                    y,
                    kind: ImpactKind::Player,
                });
                if state.pending_feedback.is_none() {
                    state.pending_feedback = Some(PendingFeedback {
                        hit_player: victim,
                        delay_ticks: HIT_FEEDBACK_DELAY_TICKS,
                    });
                }
            }
            Resolution::OutOfBounds => {
                summary.misses += 1;
            }
            Resolution::HitBuilding { building, x, y } => {
                summary.misses += 1;
                state.rng_state =
                    destroy_chunk(&mut state.buildings[building], x, y, state.rng_state);
                effects.push(Effect::Audio(AudioCue::BuildingHit));
                effects.push(Effect::Impact {
                    x,
                    y,
                    kind: ImpactKind::Building,
                });
            }
        }
    }
    summary
}

fn tick_pending_feedback(state: &mut GameState) {
    let mut activate = None;
    if let Some(pending) = &mut state.pending_feedback {
        pending.delay_ticks -= 1;
        if pending.delay_ticks == 0 {
            activate = Some(pending.hit_player);
        }
    }
    if let Some(hit_player) = activate {
        state.feedback = Some(FeedbackScreen {
            hit_player,
            fade_progress: 0.0,
            display_ticks: 0,
            // Scores as of activation — later same-window hits are included.
            scores: state.scores,
        });
        state.pending_feedback = None;
        state.phase = Phase::HitFeedback;
    }
}

fn update_feedback(state: &mut GameState, config: &GameConfig, effects: &mut Vec<Effect>) {
    let mut finished = false;
    if let Some(feedback) = &mut state.feedback {
        if feedback.fade_progress < 1.0 {
            feedback.fade_progress = (feedback.fade_progress + HIT_FEEDBACK_FADE_STEP).min(1.0);
        }
        feedback.display_ticks += 1;
        finished = feedback.display_ticks > HIT_FEEDBACK_DISPLAY_TICKS;
    }

    if finished {
        state.feedback = None;
        if state.scores.iter().any(|&s| s >= config.wins_needed) {
            effects.push(Effect::Audio(AudioCue::RoundWin));
            state.phase = Phase::GameOver;
        } else {
            reset_round(state, config);
            state.phase = Phase::PlayerTurn;
        }
    }
}

fn update_game_over(
    state: &mut GameState,
    input: &TickInput,
    config: &GameConfig,
    effects: &mut Vec<Effect>,
) {
    if input.buttons & button::RESTART != 0 {
        state.scores = [0, 0];
        state.current_player = 0;
        effects.push(Effect::ScoreChanged {
            scores: state.scores,
        });
        reset_round(state, config);
        state.phase = Phase::PlayerTurn;
    }
}
