// All values are per-tick at 60 Hz unless noted.

// Physics
pub const GRAVITY: f64 = 0.3;
/// Global launch-speed multiplier applied to both velocity components.
pub const GOO_SPEED: f64 = 1.5;
/// Launch speed at 100% force, before the multiplier.
pub const MAX_POWER: f64 = 15.0;
pub const GOO_RADIUS: f64 = 8.0;

// Logical screen the simulation runs on
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Map scale (rolled once per round)
pub const SCALE_FACTOR_MIN: f64 = 0.5;
pub const SCALE_FACTOR_MAX: f64 = 1.5;
pub const BASE_HEIGHT_MIN: f64 = 100.0;
pub const BASE_HEIGHT_MAX: f64 = 300.0;

// Skyline
pub const NUM_BUILDINGS: usize = 8;
/// Safety factor applied when a neighbour is capped to keep the 45° lane open.
pub const CLEARANCE_MARGIN: f64 = 0.9;

// Window grid (building-local)
pub const WINDOW_STEP_X: f64 = 25.0;
pub const WINDOW_STEP_Y: f64 = 30.0;
pub const WINDOW_INSET_X: f64 = 15.0;
pub const WINDOW_INSET_TOP: f64 = 20.0;
pub const WINDOW_INSET_BOTTOM: f64 = 20.0;
pub const WINDOW_LIT_CHANCE: f64 = 0.3;
pub const TWINKLE_INTERVAL_TICKS: u32 = 180;
pub const TWINKLE_FLIP_CHANCE: f64 = 0.05;

// Destruction
pub const CHUNK_SIZE_MIN: f64 = 30.0;
pub const CHUNK_SIZE_MAX: f64 = 50.0;

// Player platforms
pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 40.0;
/// Platform top sits this far above the home building's roof.
pub const PLAYER_STAND_OFFSET: f64 = 30.0;

// Aim meters
pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 90.0;
pub const ANGLE_STEP: f64 = 2.0;
pub const FORCE_MIN: f64 = 0.0;
pub const FORCE_MAX: f64 = 100.0;
pub const FORCE_STEP: f64 = 3.0;
pub const INITIAL_ANGLE: f64 = 45.0;
pub const INITIAL_FORCE: f64 = 50.0;

// Match rules
pub const WINS_NEEDED: u32 = 5;
pub const MAX_INFLIGHT_PER_PLAYER: usize = 2;

// Hit feedback — delay before the interstitial, then its display window
pub const HIT_FEEDBACK_DELAY_TICKS: u32 = 180;
pub const HIT_FEEDBACK_DISPLAY_TICKS: u32 = 120;
pub const HIT_FEEDBACK_FADE_STEP: f64 = 0.033;

// Tick rate
pub const TICK_RATE: u32 = 60;
