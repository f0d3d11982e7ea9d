use glam::DVec3;
use thiserror::Error;
use tracing::error;

use surftimer_core::course::{BonusId, CourseId, MAX_BONUS_COURSES};
use surftimer_core::player_timer::PlayerTimerInfo;
use surftimer_core::{PlayerSlot, Settings};

use crate::map::MapZones;

/// Receiver for timer transitions. The real implementation lives with the
/// timer bookkeeping; the zone machine only decides *when* to fire.
pub trait TimerSink {
    fn on_timer_start(&mut self, slot: PlayerSlot, bonus: Option<BonusId>);
    fn on_timer_stop(&mut self, slot: PlayerSlot);
    fn on_bonus_timer_stop(&mut self, slot: PlayerSlot, bonus: BonusId);
    fn on_recording_start(&mut self, slot: PlayerSlot, bonus: Option<BonusId>);
    fn on_recording_stop(&mut self, slot: PlayerSlot);
}

/// Velocity-mutation primitive supplied by the host; `adjust` caps full 3D
/// speed, `adjust_2d` caps horizontal speed only.
pub trait VelocityAdjuster {
    fn adjust(&mut self, slot: PlayerSlot, cap: f64, clamp_on_entry: bool);
    fn adjust_2d(&mut self, slot: PlayerSlot, cap: f64, clamp_on_entry: bool);
}

#[derive(Error, Debug)]
pub enum ZoneCheckError {
    #[error("player slot {0} has no session")]
    SessionNotFound(PlayerSlot),
    #[error("player slot {0} is not tracked by the timer")]
    TimerNotTracked(PlayerSlot),
}

/// Evaluate zone transitions for one player for one tick.
///
/// The caller has already applied the eligibility predicate. An unresolvable
/// position or an unconfigured main course skips the whole evaluation.
/// Note the asymmetry around `use_triggers_and_fake_zones`: the flag
/// suppresses only the main-course box checks (those maps time the main
/// course with native engine triggers), while bonus courses are always
/// evaluated from boxes. Unifying the two paths would change observable
/// server behavior, so don't.
pub fn check_player_coords(
    slot: PlayerSlot,
    timer: &mut PlayerTimerInfo,
    position: Option<DVec3>,
    velocity: DVec3,
    zones: &MapZones,
    settings: &Settings,
    sink: &mut dyn TimerSink,
    adjuster: &mut dyn VelocityAdjuster,
) {
    let position = match position {
        Some(position) => position,
        None => return,
    };

    if !zones.main_course_configured() {
        return;
    }

    if !settings.use_triggers_and_fake_zones {
        let inside_start = zones.main_start.contains(position);
        let inside_end = zones.main_end.contains(position);
        run_course_transitions(
            slot,
            CourseId::Main,
            inside_start,
            inside_end,
            timer,
            velocity,
            settings,
            sink,
            adjuster,
        );
    }

    for &bonus in &zones.bonuses {
        if bonus == 0 {
            // reserved index
            continue;
        }
        let index = bonus as usize;
        if index > MAX_BONUS_COURSES
            || zones.bonus_start.len() <= index
            || zones.bonus_end.len() <= index
        {
            error!(bonus, "invalid bonus zone coordinates, skipping bonus");
            continue;
        }

        let start = zones.bonus_start[index];
        let end = zones.bonus_end[index];
        if start.is_unset() || end.is_unset() {
            continue;
        }

        run_course_transitions(
            slot,
            CourseId::Bonus(bonus),
            start.contains(position),
            end.contains(position),
            timer,
            velocity,
            settings,
            sink,
            adjuster,
        );
    }
}

/// One course's transition policy for one tick, in priority order: stop
/// beats start, start beats the flag-clearing fall-through. Stop only fires
/// for a run this machine has actually started, so standing in an end box
/// cold emits nothing.
fn run_course_transitions(
    slot: PlayerSlot,
    course: CourseId,
    inside_start: bool,
    inside_end: bool,
    timer: &mut PlayerTimerInfo,
    velocity: DVec3,
    settings: &Settings,
    sink: &mut dyn TimerSink,
    adjuster: &mut dyn VelocityAdjuster,
) {
    if !inside_start && inside_end {
        if timer.run_started(course) {
            timer.set_run_started(course, false);
            match course.bonus() {
                None => sink.on_timer_stop(slot),
                Some(bonus) => sink.on_bonus_timer_stop(slot, bonus),
            }
            if settings.enable_replays {
                sink.on_recording_stop(slot);
            }
        }
    } else if inside_start {
        timer.set_in_start_zone(course, true);
        timer.set_run_started(course, true);

        sink.on_timer_start(slot, course.bonus());
        if settings.enable_replays {
            sink.on_recording_start(slot, course.bonus());
        }

        enforce_max_starting_speed(slot, velocity, settings, adjuster);
    } else {
        timer.set_in_start_zone(course, false);
    }
}

/// Clamp-on-entry speed check. Compares the rounded 3D (or horizontal-only
/// 2D) speed against the configured cap and hands the actual mutation to the
/// matching adjuster variant. Stateless.
pub fn enforce_max_starting_speed(
    slot: PlayerSlot,
    velocity: DVec3,
    settings: &Settings,
    adjuster: &mut dyn VelocityAdjuster,
) {
    if !settings.max_starting_speed_enabled {
        return;
    }

    let speed = if settings.use_2d_speed {
        velocity.truncate().length()
    } else {
        velocity.length()
    };

    if speed.round() > settings.max_starting_speed {
        if settings.use_2d_speed {
            adjuster.adjust_2d(slot, settings.max_starting_speed, true);
        } else {
            adjuster.adjust(slot, settings.max_starting_speed, true);
        }
    }
}
