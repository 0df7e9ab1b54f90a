use crate::constants::*;
use crate::types::AimState;

/// One tick of meter oscillation. While the angle is being selected it sweeps
/// ±2°/tick; once locked, the force sweeps ±3/tick. Both reflect at their
/// bounds and clamp onto the bound on the flip tick.
pub fn next_aim(aim: &AimState) -> AimState {
    let mut next = *aim;
    if next.selecting_angle {
        next.angle += next.angle_direction * ANGLE_STEP;
        if next.angle >= ANGLE_MAX || next.angle <= ANGLE_MIN {
            next.angle_direction = -next.angle_direction;
            next.angle = next.angle.clamp(ANGLE_MIN, ANGLE_MAX);
        }
    } else {
        next.force += next.force_direction * FORCE_STEP;
        if next.force >= FORCE_MAX || next.force <= FORCE_MIN {
            next.force_direction = -next.force_direction;
            next.force = next.force.clamp(FORCE_MIN, FORCE_MAX);
        }
    }
    next
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommitOutcome {
    AngleLocked,
    Fired { angle: f64, force: f64 },
}

/// Two-phase commit: the first press locks the angle, the second fires and
/// re-arms angle selection for the next throw.
pub fn commit_aim(aim: &AimState) -> (AimState, CommitOutcome) {
    let mut next = *aim;
    if next.selecting_angle {
        next.selecting_angle = false;
        (next, CommitOutcome::AngleLocked)
    } else {
        let outcome = CommitOutcome::Fired {
            angle: next.angle,
            force: next.force,
        };
        next.selecting_angle = true;
        (next, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_sweeps_within_bounds() {
        let mut aim = AimState::default();
        for _ in 0..1000 {
            aim = next_aim(&aim);
            assert!((ANGLE_MIN..=ANGLE_MAX).contains(&aim.angle));
        }
    }

    #[test]
    fn angle_reflects_and_clamps_at_top() {
        let mut aim = AimState {
            angle: 89.0,
            angle_direction: 1.0,
            ..AimState::default()
        };
        aim = next_aim(&aim);
        assert_eq!(aim.angle, 90.0);
        assert_eq!(aim.angle_direction, -1.0);
        aim = next_aim(&aim);
        assert_eq!(aim.angle, 88.0);
    }

    #[test]
    fn angle_reflects_and_clamps_at_zero() {
        let mut aim = AimState {
            angle: 1.0,
            angle_direction: -1.0,
            ..AimState::default()
        };
        aim = next_aim(&aim);
        assert_eq!(aim.angle, 0.0);
        assert_eq!(aim.angle_direction, 1.0);
    }

    #[test]
    fn force_sweeps_within_bounds() {
        let mut aim = AimState {
            selecting_angle: false,
            ..AimState::default()
        };
        for _ in 0..1000 {
            aim = next_aim(&aim);
            assert!((FORCE_MIN..=FORCE_MAX).contains(&aim.force));
        }
    }

    #[test]
    fn force_reflects_and_clamps() {
        let mut aim = AimState {
            selecting_angle: false,
            force: 99.0,
            force_direction: 1.0,
            ..AimState::default()
        };
        aim = next_aim(&aim);
        assert_eq!(aim.force, 100.0);
        assert_eq!(aim.force_direction, -1.0);
        aim = next_aim(&aim);
        assert_eq!(aim.force, 97.0);
    }

    #[test]
    fn locked_angle_freezes_while_force_sweeps() {
        let mut aim = AimState::default();
        let (locked, outcome) = commit_aim(&aim);
        assert_eq!(outcome, CommitOutcome::AngleLocked);
        aim = locked;
        let frozen = aim.angle;
        for _ in 0..50 {
            aim = next_aim(&aim);
            assert_eq!(aim.angle, frozen);
        }
    }

    #[test]
    fn second_commit_fires_with_current_values() {
        let aim = AimState {
            selecting_angle: false,
            angle: 60.0,
            force: 80.0,
            ..AimState::default()
        };
        let (after, outcome) = commit_aim(&aim);
        assert_eq!(
            outcome,
            CommitOutcome::Fired {
                angle: 60.0,
                force: 80.0
            }
        );
        // Re-armed for the next turn.
        assert!(after.selecting_angle);
    }
}
