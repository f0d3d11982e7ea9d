use glam::DVec3;
use tracing::debug;

use surftimer_core::PlayerSlot;

use crate::map::MapZones;

/// Evaluate and apply a push-volume boost for one player for one tick.
///
/// Native engine trigger_push physics never fire for bot pawns, so this
/// recreates the effect: if the player stands in a push volume and is slower
/// than its target speed, add the volume's direction scaled by the deficit.
/// The boost is purely additive per component; it never slows the player
/// down and does not renormalize the configured direction.
pub fn check_player_push(
    slot: PlayerSlot,
    position: Option<DVec3>,
    velocity: &mut DVec3,
    zones: &MapZones,
) {
    if zones.push_volumes.is_empty() {
        return;
    }

    let position = match position {
        Some(position) => position,
        None => return,
    };

    let (direction, push_speed) = match zones.resolve_push(position) {
        Some(data) => data,
        None => return,
    };

    let current_speed = velocity.length();
    let deficit = push_speed - current_speed;

    if deficit > 0.0 {
        velocity.x += direction.x * deficit;
        velocity.y += direction.y * deficit;
        velocity.z += direction.z * deficit;

        debug!(slot, deficit, "trigger push fix: adjusted player velocity");
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::map::{MapZones, PushVolumeEntry, Volume};
    use crate::push::check_player_push;

    fn zones_with_push(direction: DVec3, push_speed: f64) -> MapZones {
        MapZones {
            push_volumes: vec![PushVolumeEntry {
                volume: Volume::new(DVec3::new(-50.0, -50.0, -50.0), DVec3::new(50.0, 50.0, 50.0)),
                direction,
                push_speed,
            }],
            ..MapZones::default()
        }
    }

    #[test]
    fn test_push_never_reduces_speed() {
        let zones = zones_with_push(DVec3::X, 400.0);
        let mut velocity = DVec3::new(450.0, 0.0, 0.0);
        check_player_push(0, Some(DVec3::ZERO), &mut velocity, &zones);
        assert_eq!(velocity, DVec3::new(450.0, 0.0, 0.0));
    }

    #[test]
    fn test_push_boosts_by_speed_deficit() {
        let direction = DVec3::new(0.0, 0.6, 0.8);
        let zones = zones_with_push(direction, 400.0);
        let mut velocity = DVec3::new(100.0, 0.0, 0.0);
        check_player_push(0, Some(DVec3::ZERO), &mut velocity, &zones);

        // deficit is 300; the added vector is direction * 300, component-wise
        let added = velocity - DVec3::new(100.0, 0.0, 0.0);
        assert!(added.abs_diff_eq(direction * 300.0, 1e-9));
        assert!((added.length() - 300.0 * direction.length()).abs() < 1e-9);
    }

    #[test]
    fn test_no_effect_outside_volume() {
        let zones = zones_with_push(DVec3::X, 400.0);
        let mut velocity = DVec3::new(10.0, 0.0, 0.0);
        check_player_push(0, Some(DVec3::new(500.0, 0.0, 0.0)), &mut velocity, &zones);
        assert_eq!(velocity, DVec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_effect_without_position() {
        let zones = zones_with_push(DVec3::X, 400.0);
        let mut velocity = DVec3::ZERO;
        check_player_push(0, None, &mut velocity, &zones);
        assert_eq!(velocity, DVec3::ZERO);
    }
}
