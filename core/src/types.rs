use serde::{Deserialize, Serialize};

use crate::constants::*;

// ── Primitives ──────────────────────────────────────────────

pub type PlayerId = i32;
pub type Tick = u32;
pub type Seed = u32;

// ── Input ───────────────────────────────────────────────────

/// Button bitmask constants.
pub mod button {
    pub const BEGIN: u8 = 1;
    /// Turn-based commit — applies to the active player.
    pub const COMMIT: u8 = 2;
    pub const COMMIT_P1: u8 = 4;
    pub const COMMIT_P2: u8 = 8;
    pub const MODE_TURN_BASED: u8 = 16;
    pub const MODE_RAPID_FIRE: u8 = 32;
    pub const RESTART: u8 = 64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub buttons: u8,
}

pub const NULL_INPUT: TickInput = TickInput { buttons: 0 };

// ── Modes & phases ──────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    TurnBased,
    RapidFire,
}

impl Mode {
    /// Menu choice 1 or 2; anything else is not a mode.
    pub fn from_choice(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::TurnBased),
            2 => Some(Self::RapidFire),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Splash,
    ModeSelect,
    Start,
    PlayerTurn,
    Playing,
    HitFeedback,
    GameOver,
}

// ── Skyline ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub x: f64,
    pub y: f64,
    pub lit: bool,
}

/// Destroyed rectangle in building-local coordinates. Never clipped to the
/// building's bounds and never merged with earlier chunks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f64,
    pub y: f64,
    /// Positioning width (slot width); buildings sit at x = i · width.
    pub width: f64,
    /// Scale-adjusted width used for rendering and collision.
    pub visual_width: f64,
    pub height: f64,
    pub windows: Vec<Window>,
    pub destroyed_chunks: Vec<Chunk>,
}

/// Platform atop a home building. `x` is the horizontal center, `y` the top.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapScale {
    pub factor: f64,
    pub building_height_min: f64,
    pub building_height_max: f64,
    pub building_width: f64,
    pub player_distance: f64,
}

// ── Aiming ──────────────────────────────────────────────────

/// Two-phase sweep meter: the angle oscillates until the first commit locks
/// it, then the force oscillates until the second commit fires.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AimState {
    pub angle: f64,
    pub force: f64,
    pub angle_direction: f64,
    pub force_direction: f64,
    pub selecting_angle: bool,
}

impl Default for AimState {
    fn default() -> Self {
        AimState {
            angle: INITIAL_ANGLE,
            force: INITIAL_FORCE,
            angle_direction: 1.0,
            force_direction: 1.0,
            selecting_angle: true,
        }
    }
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub owner: PlayerId,
}

// ── Hit feedback ────────────────────────────────────────────

/// Armed when a throw connects; counts down in simulation ticks before the
/// interstitial appears.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingFeedback {
    pub hit_player: PlayerId,
    pub delay_ticks: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackScreen {
    pub hit_player: PlayerId,
    pub fade_progress: f64,
    pub display_ticks: u32,
    /// Scores as they stood when the screen activated.
    pub scores: [u32; 2],
}

// ── Game state ──────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick: Tick,
    pub phase: Phase,
    pub mode: Mode,
    pub rng_state: u32,
    /// Active thrower in turn-based mode.
    pub current_player: PlayerId,
    pub scores: [u32; 2],
    pub scale: MapScale,
    pub buildings: Vec<Building>,
    /// Empty until the first round is generated; then always two entries.
    pub players: Vec<PlayerRect>,
    pub aim: [AimState; 2],
    pub projectiles: Vec<Projectile>,
    pub pending_feedback: Option<PendingFeedback>,
    pub feedback: Option<FeedbackScreen>,
    pub last_twinkle_tick: Tick,
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: Seed,
    pub screen_width: f64,
    pub screen_height: f64,
    pub wins_needed: u32,
    pub tick_rate: u32,
}

// ── Effects ─────────────────────────────────────────────────

/// Discrete cues for the audio sink. Fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    MenuSelect,
    Throw,
    PlayerHit,
    BuildingHit,
    RoundWin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    Player,
    Building,
}

/// Per-tick intents for the external sinks; the core never reads anything
/// back from them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Audio(AudioCue),
    ScoreChanged { scores: [u32; 2] },
    /// Pre-integration projectile position, recorded for the render trail.
    TrailMarker { x: f64, y: f64 },
    /// Particle/shake intent at an impact point.
    Impact { x: f64, y: f64, kind: ImpactKind },
}

/// Output of one simulation tick.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub state: GameState,
    pub effects: Vec<Effect>,
}
