use crate::constants::*;
use crate::destruction::collides;
use crate::types::{Building, PlayerId, PlayerRect, Projectile};

/// Player 0 throws rightward, player 1 leftward.
pub fn throw_direction(owner: PlayerId) -> f64 {
    if owner == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Launch a goo blob from a player's platform with the committed angle and
/// force. Force maps linearly onto launch speed.
pub fn launch(player: &PlayerRect, owner: PlayerId, angle: f64, force: f64) -> Projectile {
    let angle_rad = angle.to_radians();
    let power = (force / 100.0) * MAX_POWER;
    let direction = throw_direction(owner);

    Projectile {
        x: player.x,
        y: player.y + player.height / 2.0,
        vx: angle_rad.cos() * power * direction * GOO_SPEED,
        vy: -angle_rad.sin() * power * GOO_SPEED,
        owner,
    }
}

/// Advance one tick: gravity first, then the new velocity moves the blob.
pub fn integrate(proj: &Projectile) -> Projectile {
    let vy = proj.vy + GRAVITY;
    Projectile {
        x: proj.x + proj.vx,
        y: proj.y + vy,
        vy,
        ..*proj
    }
}

/// AABB test between the blob's radius-expanded box and a player rectangle.
pub fn hits_player(proj: &Projectile, rect: &PlayerRect) -> bool {
    proj.x + GOO_RADIUS > rect.x - rect.width / 2.0
        && proj.x - GOO_RADIUS < rect.x + rect.width / 2.0
        && proj.y + GOO_RADIUS > rect.y
        && proj.y - GOO_RADIUS < rect.y + rect.height
}

/// Off either side or below the screen; the sky above stays open.
pub fn is_out_of_bounds(proj: &Projectile, screen_width: f64, screen_height: f64) -> bool {
    proj.x < 0.0 || proj.x > screen_width || proj.y > screen_height
}

/// Number of blobs a player currently has in the air.
pub fn in_flight(projectiles: &[Projectile], owner: PlayerId) -> usize {
    projectiles.iter().filter(|p| p.owner == owner).count()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    InFlight(Projectile),
    HitPlayer { victim: PlayerId, x: f64, y: f64 },
    OutOfBounds,
    HitBuilding { building: usize, x: f64, y: f64 },
}

/// Advance one projectile a tick and classify the outcome. Check order:
/// opposing player first, then bounds, then buildings left to right — so a
/// blob that overlaps a player on its exit tick still counts as a hit.
pub fn resolve_projectile(
    proj: &Projectile,
    players: &[PlayerRect],
    buildings: &[Building],
    screen_width: f64,
    screen_height: f64,
) -> Resolution {
    let moved = integrate(proj);

    for (idx, rect) in players.iter().enumerate() {
        if idx as PlayerId == moved.owner {
            continue;
        }
        if hits_player(&moved, rect) {
            return Resolution::HitPlayer {
                victim: idx as PlayerId,
                x: moved.x,
                y: moved.y,
            };
        }
    }

    if is_out_of_bounds(&moved, screen_width, screen_height) {
        return Resolution::OutOfBounds;
    }

    for (idx, building) in buildings.iter().enumerate() {
        if collides(moved.x, moved.y, building) {
            return Resolution::HitBuilding {
                building: idx,
                x: moved.x,
                y: moved.y,
            };
        }
    }

    Resolution::InFlight(moved)
}
