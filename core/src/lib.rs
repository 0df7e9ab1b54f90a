pub mod aim;
pub mod constants;
pub mod destruction;
pub mod hash;
pub mod init;
pub mod prng;
pub mod projectiles;
pub mod replay;
pub mod scale;
pub mod skyline;
pub mod step;
pub mod types;

pub use aim::{commit_aim, next_aim, CommitOutcome};
pub use constants::*;
pub use destruction::{collides, destroy_chunk};
pub use hash::*;
pub use init::{create_initial_state, default_config, reset_round};
pub use prng::*;
pub use projectiles::{
    hits_player, in_flight, integrate, is_out_of_bounds, launch, resolve_projectile,
    throw_direction, Resolution,
};
pub use replay::{run_replay, ReplayInput, ReplayOutput};
pub use scale::{neutral_scale, select_map_scale};
pub use skyline::{generate_buildings, position_players, twinkle_windows};
pub use step::step;
pub use types::*;
