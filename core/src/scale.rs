use crate::constants::*;
use crate::prng::prng_range;
use crate::types::MapScale;

/// Roll the per-round map scale. Factor is uniform in [0.5, 1.5); the height
/// range, building width and player distance all derive from it.
pub fn select_map_scale(rng_state: u32, screen_width: f64) -> (MapScale, u32) {
    let (factor, rng_state) = prng_range(rng_state, SCALE_FACTOR_MIN, SCALE_FACTOR_MAX);

    let scale = MapScale {
        factor,
        building_height_min: BASE_HEIGHT_MIN * factor,
        building_height_max: BASE_HEIGHT_MAX * factor,
        building_width: (screen_width / NUM_BUILDINGS as f64) * factor,
        player_distance: screen_width * factor,
    };
    (scale, rng_state)
}

/// Scale record used before any round has been generated.
pub fn neutral_scale() -> MapScale {
    MapScale {
        factor: 1.0,
        building_height_min: BASE_HEIGHT_MIN,
        building_height_max: BASE_HEIGHT_MAX,
        building_width: 0.0,
        player_distance: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_stays_in_range() {
        let mut rng = 1u32;
        for _ in 0..1000 {
            let (scale, next) = select_map_scale(rng, SCREEN_WIDTH);
            assert!((SCALE_FACTOR_MIN..SCALE_FACTOR_MAX).contains(&scale.factor));
            rng = next;
        }
    }

    #[test]
    fn derived_fields_track_factor() {
        let (scale, _) = select_map_scale(42, SCREEN_WIDTH);
        assert_eq!(scale.building_height_min, BASE_HEIGHT_MIN * scale.factor);
        assert_eq!(scale.building_height_max, BASE_HEIGHT_MAX * scale.factor);
        assert_eq!(
            scale.building_width,
            SCREEN_WIDTH / NUM_BUILDINGS as f64 * scale.factor
        );
        assert_eq!(scale.player_distance, SCREEN_WIDTH * scale.factor);
    }

    #[test]
    fn same_state_same_scale() {
        let (a, sa) = select_map_scale(777, SCREEN_WIDTH);
        let (b, sb) = select_map_scale(777, SCREEN_WIDTH);
        assert_eq!(a, b);
        assert_eq!(sa, sb);
    }
}
