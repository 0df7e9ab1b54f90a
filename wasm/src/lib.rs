use gooduel_core::{
    create_initial_state, default_config, step, Building, Effect, GameConfig, GameState,
    PlayerRect, Projectile, TickInput,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in browser console instead of
/// silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

// ── JS mirror types (camelCase for the render layer) ────────

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsWindow {
    x: f64,
    y: f64,
    lit: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsChunk {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsBuilding {
    x: f64,
    y: f64,
    width: f64,
    visual_width: f64,
    height: f64,
    windows: Vec<JsWindow>,
    destroyed_chunks: Vec<JsChunk>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsPlayer {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsAim {
    angle: f64,
    force: f64,
    selecting_angle: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsProjectile {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    owner: i32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsFeedback {
    hit_player: i32,
    fade_progress: f64,
    display_ticks: u32,
    scores: [u32; 2],
}

/// Everything the canvas renderer needs each frame.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsState {
    tick: u32,
    phase: String,
    mode: String,
    current_player: i32,
    scores: [u32; 2],
    scale_factor: f64,
    buildings: Vec<JsBuilding>,
    players: Vec<JsPlayer>,
    aim: Vec<JsAim>,
    projectiles: Vec<JsProjectile>,
    feedback: Option<JsFeedback>,
}

fn building_to_js(b: &Building) -> JsBuilding {
    JsBuilding {
        x: b.x,
        y: b.y,
        width: b.width,
        visual_width: b.visual_width,
        height: b.height,
        windows: b
            .windows
            .iter()
            .map(|w| JsWindow {
                x: w.x,
                y: w.y,
                lit: w.lit,
            })
            .collect(),
        destroyed_chunks: b
            .destroyed_chunks
            .iter()
            .map(|c| JsChunk {
                x: c.x,
                y: c.y,
                width: c.width,
                height: c.height,
            })
            .collect(),
    }
}

fn player_to_js(p: &PlayerRect) -> JsPlayer {
    JsPlayer {
        x: p.x,
        y: p.y,
        width: p.width,
        height: p.height,
    }
}

fn projectile_to_js(p: &Projectile) -> JsProjectile {
    JsProjectile {
        x: p.x,
        y: p.y,
        vx: p.vx,
        vy: p.vy,
        owner: p.owner,
    }
}

fn state_to_js(s: &GameState) -> JsState {
    JsState {
        tick: s.tick,
        phase: format!("{:?}", s.phase),
        mode: format!("{:?}", s.mode),
        current_player: s.current_player,
        scores: s.scores,
        scale_factor: s.scale.factor,
        buildings: s.buildings.iter().map(building_to_js).collect(),
        players: s.players.iter().map(player_to_js).collect(),
        aim: s
            .aim
            .iter()
            .map(|a| JsAim {
                angle: a.angle,
                force: a.force,
                selecting_angle: a.selecting_angle,
            })
            .collect(),
        projectiles: s.projectiles.iter().map(projectile_to_js).collect(),
        feedback: s.feedback.map(|f| JsFeedback {
            hit_player: f.hit_player,
            fade_progress: f.fade_progress,
            display_ticks: f.display_ticks,
            scores: f.scores,
        }),
    }
}

// ── Session ─────────────────────────────────────────────────

#[wasm_bindgen]
pub struct WasmSession {
    state: GameState,
    config: GameConfig,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a new session from a seed. The JS side drives it with input
    /// bits each animation frame and renders the exported state.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> WasmSession {
        let config = default_config(seed);
        let state = create_initial_state(&config);
        WasmSession { state, config }
    }

    /// Step the simulation by one tick. Returns the tick's effect intents
    /// (audio cues, score changes, trail markers, impacts) for the JS sinks.
    pub fn step(&mut self, buttons: u8) -> JsValue {
        let result = step(&self.state, &TickInput { buttons }, &self.config);
        self.state = result.state;
        effects_to_js(&result.effects)
    }

    /// Export render state (camelCase JS object).
    pub fn export_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&state_to_js(&self.state)).unwrap_or(JsValue::NULL)
    }

    /// Export a full snapshot of the session for later restore.
    pub fn export_snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.state).unwrap_or(JsValue::NULL)
    }

    /// Restore a snapshot produced by `export_snapshot`. Invalid snapshots
    /// are ignored with a console warning.
    pub fn import_snapshot(&mut self, snapshot: JsValue) {
        // JSON.stringify → serde_json is the robust path for nested structs.
        let json_str = match js_sys::JSON::stringify(&snapshot) {
            Ok(s) => String::from(s),
            Err(_) => return,
        };
        match serde_json::from_str::<GameState>(&json_str) {
            Ok(state) => self.state = state,
            Err(err) => {
                web_sys::console::warn_1(&format!("snapshot rejected: {err}").into());
            }
        }
    }

    // Quick accessors
    pub fn tick(&self) -> u32 {
        self.state.tick
    }
    pub fn phase(&self) -> String {
        format!("{:?}", self.state.phase)
    }
    pub fn score(&self, player: usize) -> u32 {
        self.state.scores[player.min(1)]
    }
}

fn effects_to_js(effects: &[Effect]) -> JsValue {
    serde_wasm_bindgen::to_value(effects).unwrap_or(JsValue::NULL)
}
