use crate::course::{CourseId, MAX_BONUS_COURSES};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Team {
    Unassigned,
    Spectator,
    Terrorist,
    CounterTerrorist,
}

impl Team {
    pub fn is_playing(self) -> bool {
        matches!(self, Team::Terrorist | Team::CounterTerrorist)
    }
}

/// Per-player timer state the zone machine reads and writes each tick.
///
/// Occupancy and run flags are tracked per course: one slot for the main
/// course and one per bonus number (index 0 of the arrays is reserved).
#[derive(Clone, Debug, Default)]
pub struct PlayerTimerInfo {
    pub is_noclip: bool,

    in_start_zone_main: bool,
    in_start_zone_bonus: [bool; MAX_BONUS_COURSES + 1],

    run_started_main: bool,
    run_started_bonus: [bool; MAX_BONUS_COURSES + 1],
}

impl PlayerTimerInfo {
    pub fn new() -> Self {
        PlayerTimerInfo::default()
    }

    pub fn in_start_zone(&self, course: CourseId) -> bool {
        match course {
            CourseId::Main => self.in_start_zone_main,
            CourseId::Bonus(bonus) => self.in_start_zone_bonus[bonus as usize],
        }
    }

    pub fn set_in_start_zone(&mut self, course: CourseId, inside: bool) {
        match course {
            CourseId::Main => self.in_start_zone_main = inside,
            CourseId::Bonus(bonus) => self.in_start_zone_bonus[bonus as usize] = inside,
        }
    }

    /// Whether a Start has been emitted for this course since the last Stop.
    /// Gates Stop emission so an end box reached without ever entering the
    /// start box stays silent.
    pub fn run_started(&self, course: CourseId) -> bool {
        match course {
            CourseId::Main => self.run_started_main,
            CourseId::Bonus(bonus) => self.run_started_bonus[bonus as usize],
        }
    }

    pub fn set_run_started(&mut self, course: CourseId, started: bool) {
        match course {
            CourseId::Main => self.run_started_main = started,
            CourseId::Bonus(bonus) => self.run_started_bonus[bonus as usize] = started,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_zone_flags_are_per_course() {
        let mut timer = PlayerTimerInfo::new();

        timer.set_in_start_zone(CourseId::Main, true);
        timer.set_in_start_zone(CourseId::Bonus(3), true);
        timer.set_in_start_zone(CourseId::Bonus(7), false);

        assert!(timer.in_start_zone(CourseId::Main));
        assert!(timer.in_start_zone(CourseId::Bonus(3)));
        assert!(!timer.in_start_zone(CourseId::Bonus(7)));

        // clearing one bonus leaves the others alone
        timer.set_in_start_zone(CourseId::Bonus(3), false);
        assert!(timer.in_start_zone(CourseId::Main));
        assert!(!timer.in_start_zone(CourseId::Bonus(3)));
    }

    #[test]
    fn test_playing_teams() {
        assert!(Team::Terrorist.is_playing());
        assert!(Team::CounterTerrorist.is_playing());
        assert!(!Team::Spectator.is_playing());
        assert!(!Team::Unassigned.is_playing());
    }
}
