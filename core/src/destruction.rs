use crate::constants::*;
use crate::prng::prng_range;
use crate::types::{Building, Chunk};

/// Carve a chunk out of a building, centered on the impact point. Size is
/// random in [30, 50) px per axis; coordinates are converted to
/// building-local space. Chunks may overlap or extend past the building.
pub fn destroy_chunk(
    building: &mut Building,
    impact_x: f64,
    impact_y: f64,
    rng_state: u32,
) -> u32 {
    let (chunk_width, rng_state) = prng_range(rng_state, CHUNK_SIZE_MIN, CHUNK_SIZE_MAX);
    let (chunk_height, rng_state) = prng_range(rng_state, CHUNK_SIZE_MIN, CHUNK_SIZE_MAX);

    building.destroyed_chunks.push(Chunk {
        x: impact_x - building.x - chunk_width / 2.0,
        y: impact_y - building.y - chunk_height / 2.0,
        width: chunk_width,
        height: chunk_height,
    });
    rng_state
}

/// Point-vs-building collision. Destroyed chunks read as air.
pub fn collides(x: f64, y: f64, building: &Building) -> bool {
    if x < building.x
        || x > building.x + building.visual_width
        || y < building.y
        || y > building.y + building.height
    {
        return false;
    }

    let relative_x = x - building.x;
    let relative_y = y - building.y;
    for chunk in &building.destroyed_chunks {
        if relative_x >= chunk.x
            && relative_x <= chunk.x + chunk.width
            && relative_y >= chunk.y
            && relative_y <= chunk.y + chunk.height
        {
            return false;
        }
    }
    true
}
