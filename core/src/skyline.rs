use crate::constants::*;
use crate::prng::{prng_chance, prng_range};
use crate::types::{Building, MapScale, PlayerRect, Window};

/// Tile the window grid for a building of the given size. Each window is lit
/// independently with probability `WINDOW_LIT_CHANCE`.
fn tile_windows(height: f64, visual_width: f64, mut rng_state: u32) -> (Vec<Window>, u32) {
    let mut windows = Vec::new();
    let mut y = WINDOW_INSET_TOP;
    while y < height - WINDOW_INSET_BOTTOM {
        let mut x = WINDOW_INSET_X;
        while x < visual_width - WINDOW_INSET_X {
            let (lit, next) = prng_chance(rng_state, WINDOW_LIT_CHANCE);
            rng_state = next;
            windows.push(Window { x, y, lit });
            x += WINDOW_STEP_X;
        }
        y += WINDOW_STEP_Y;
    }
    (windows, rng_state)
}

fn center_x(building: &Building) -> f64 {
    building.x + building.width / 2.0
}

/// Cap the two buildings next to each home so a 45° shot from the home roof
/// keeps a clear lane. Capped buildings get the safety margin and a fresh
/// window grid.
fn clear_firing_lanes(
    buildings: &mut [Building],
    screen_height: f64,
    mut rng_state: u32,
) -> u32 {
    let n = buildings.len();
    if n < 3 {
        return rng_state;
    }

    let lanes = [(0usize, [1usize, 2usize]), (n - 1, [n - 2, n - 3])];
    for (home, neighbours) in lanes {
        let home_height = buildings[home].height;
        let home_cx = center_x(&buildings[home]);
        for nb in neighbours {
            let distance = (center_x(&buildings[nb]) - home_cx).abs();
            let max_allowed = home_height - distance;
            if buildings[nb].height > max_allowed {
                let capped = (max_allowed * CLEARANCE_MARGIN).max(0.0);
                buildings[nb].height = capped;
                buildings[nb].y = screen_height - capped;
                let (windows, next) =
                    tile_windows(capped, buildings[nb].visual_width, rng_state);
                rng_state = next;
                buildings[nb].windows = windows;
            }
        }
    }
    rng_state
}

/// Build the skyline: `NUM_BUILDINGS` buildings left to right, random heights
/// within the scaled range, then the firing-lane clearance pass.
pub fn generate_buildings(
    scale: &MapScale,
    screen_width: f64,
    screen_height: f64,
    mut rng_state: u32,
) -> (Vec<Building>, u32) {
    let slot_width = screen_width / NUM_BUILDINGS as f64;
    let mut buildings = Vec::with_capacity(NUM_BUILDINGS);

    for i in 0..NUM_BUILDINGS {
        let (height, next) = prng_range(
            rng_state,
            scale.building_height_min,
            scale.building_height_max,
        );
        rng_state = next;

        let visual_width = slot_width * scale.factor;
        let (windows, next) = tile_windows(height, visual_width, rng_state);
        rng_state = next;

        buildings.push(Building {
            x: i as f64 * slot_width,
            y: screen_height - height,
            width: slot_width,
            visual_width,
            height,
            windows,
            destroyed_chunks: Vec::new(),
        });
    }

    rng_state = clear_firing_lanes(&mut buildings, screen_height, rng_state);
    (buildings, rng_state)
}

/// Place both player platforms on the outermost buildings. `x` is the
/// platform center, `y` its top.
pub fn position_players(buildings: &[Building]) -> Vec<PlayerRect> {
    let first = &buildings[0];
    let last = &buildings[buildings.len() - 1];
    vec![
        PlayerRect {
            x: first.x + first.width / 2.0,
            y: first.y - PLAYER_STAND_OFFSET,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        },
        PlayerRect {
            x: last.x + last.width / 2.0,
            y: last.y - PLAYER_STAND_OFFSET,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        },
    ]
}

/// Flip each window's lit state with a small probability. Runs on the
/// twinkle cadence; purely cosmetic but part of the deterministic stream.
pub fn twinkle_windows(buildings: &mut [Building], mut rng_state: u32) -> u32 {
    for building in buildings.iter_mut() {
        for window in building.windows.iter_mut() {
            let (flip, next) = prng_chance(rng_state, TWINKLE_FLIP_CHANCE);
            rng_state = next;
            if flip {
                window.lit = !window.lit;
            }
        }
    }
    rng_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::select_map_scale;

    fn skyline(seed: u32) -> (MapScale, Vec<Building>) {
        let (scale, rng) = select_map_scale(seed, SCREEN_WIDTH);
        let (buildings, _) = generate_buildings(&scale, SCREEN_WIDTH, SCREEN_HEIGHT, rng);
        (scale, buildings)
    }

    #[test]
    fn eight_buildings_left_to_right() {
        let (_, buildings) = skyline(42);
        assert_eq!(buildings.len(), NUM_BUILDINGS);
        let slot = SCREEN_WIDTH / NUM_BUILDINGS as f64;
        for (i, b) in buildings.iter().enumerate() {
            assert_eq!(b.x, i as f64 * slot);
            assert_eq!(b.width, slot);
            assert_eq!(b.y, SCREEN_HEIGHT - b.height);
            assert!(b.destroyed_chunks.is_empty());
        }
    }

    #[test]
    fn heights_within_scaled_range() {
        for seed in 0..50u32 {
            let (scale, buildings) = skyline(seed);
            for b in &buildings {
                assert!(b.height >= 0.0);
                assert!(
                    b.height < scale.building_height_max,
                    "seed {}: height {} above max {}",
                    seed,
                    b.height,
                    scale.building_height_max
                );
            }
        }
    }

    #[test]
    fn windows_fit_building_bounds() {
        let (_, buildings) = skyline(7);
        for b in &buildings {
            for w in &b.windows {
                assert!(w.x >= WINDOW_INSET_X);
                assert!(w.x < b.visual_width - WINDOW_INSET_X);
                assert!(w.y >= WINDOW_INSET_TOP);
                assert!(w.y < b.height - WINDOW_INSET_BOTTOM);
            }
        }
    }

    #[test]
    fn firing_lanes_are_clear() {
        // Both homes' two nearest neighbours must sit under the 45° lane for
        // every scale the selector can roll.
        for seed in 0..200u32 {
            let (_, buildings) = skyline(seed);
            let n = buildings.len();
            for (home, neighbours) in [(0usize, [1usize, 2usize]), (n - 1, [n - 2, n - 3])] {
                let home_height = buildings[home].height;
                let home_cx = buildings[home].x + buildings[home].width / 2.0;
                for nb in neighbours {
                    let d = (buildings[nb].x + buildings[nb].width / 2.0 - home_cx).abs();
                    let limit = (home_height - d).max(0.0);
                    assert!(
                        buildings[nb].height <= limit + 1e-9,
                        "seed {}: neighbour {} height {} over limit {}",
                        seed,
                        nb,
                        buildings[nb].height,
                        limit
                    );
                }
            }
        }
    }

    #[test]
    fn capped_neighbour_gets_retiled_windows() {
        for seed in 0..100u32 {
            let (_, buildings) = skyline(seed);
            for b in &buildings {
                for w in &b.windows {
                    // A stale grid from the pre-cap height would leave windows
                    // below the new roof line.
                    assert!(w.y < b.height - WINDOW_INSET_BOTTOM);
                }
            }
        }
    }

    #[test]
    fn players_stand_on_outer_buildings() {
        let (_, buildings) = skyline(3);
        let players = position_players(&buildings);
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].x, buildings[0].x + buildings[0].width / 2.0);
        assert_eq!(players[0].y, buildings[0].y - PLAYER_STAND_OFFSET);
        let last = &buildings[buildings.len() - 1];
        assert_eq!(players[1].x, last.x + last.width / 2.0);
        assert_eq!(players[1].y, last.y - PLAYER_STAND_OFFSET);
    }

    #[test]
    fn twinkle_preserves_grid() {
        let (_, mut buildings) = skyline(11);
        let counts: Vec<usize> = buildings.iter().map(|b| b.windows.len()).collect();
        let positions: Vec<(f64, f64)> = buildings
            .iter()
            .flat_map(|b| b.windows.iter().map(|w| (w.x, w.y)))
            .collect();
        twinkle_windows(&mut buildings, 99);
        let counts_after: Vec<usize> = buildings.iter().map(|b| b.windows.len()).collect();
        let positions_after: Vec<(f64, f64)> = buildings
            .iter()
            .flat_map(|b| b.windows.iter().map(|w| (w.x, w.y)))
            .collect();
        assert_eq!(counts, counts_after);
        assert_eq!(positions, positions_after);
    }

    #[test]
    fn generation_is_deterministic() {
        let (a, _) = skyline(123);
        let (b, _) = skyline(123);
        assert_eq!(a, b);
        let (_, ba) = skyline(123);
        let (_, bb) = skyline(123);
        assert_eq!(ba, bb);
    }
}
