use std::collections::{HashMap, HashSet};
use std::thread;
use std::time::{Duration, Instant};

use glam::DVec3;
use tracing::{debug, error, info, warn};

use surftimer_core::course::BonusId;
use surftimer_core::player_timer::{PlayerTimerInfo, Team};
use surftimer_core::{PlayerSlot, Settings};

use crate::map::MapZones;
use crate::push;
use crate::zones::{self, TimerSink, VelocityAdjuster, ZoneCheckError};

/// What the host game knows about a connected player this tick.
pub struct PlayerSession {
    pub name: String,
    pub team: Team,
    pub is_alive: bool,
    pub is_bot: bool,
    pub position: Option<DVec3>,
    pub velocity: DVec3,
    pub observer_target: Option<PlayerSlot>,
}

/// Owns the per-player state and drives the zone machine and push simulator
/// once per eligible player per server tick. Timer bookkeeping and velocity
/// mutation stay behind the `TimerSink` / `VelocityAdjuster` seams.
pub struct TimerServer {
    sessions: HashMap<PlayerSlot, PlayerSession>,
    timers: HashMap<PlayerSlot, PlayerTimerInfo>,
    // slots whose jump-stat state finished initializing
    jump_stats: HashSet<PlayerSlot>,
    sink: Box<dyn TimerSink>,
    adjuster: Box<dyn VelocityAdjuster>,
}

impl TimerServer {
    pub fn new(sink: Box<dyn TimerSink>, adjuster: Box<dyn VelocityAdjuster>) -> TimerServer {
        TimerServer {
            sessions: HashMap::new(),
            timers: HashMap::new(),
            jump_stats: HashSet::new(),
            sink,
            adjuster,
        }
    }

    pub fn player_connected(&mut self, slot: PlayerSlot, session: PlayerSession) {
        info!(slot, name = %session.name, "player connected");
        self.sessions.insert(slot, session);
        self.timers.insert(slot, PlayerTimerInfo::new());
        self.jump_stats.insert(slot);
    }

    pub fn player_disconnected(&mut self, slot: PlayerSlot) {
        info!(slot, "player disconnected");
        self.sessions.remove(&slot);
        self.timers.remove(&slot);
        self.jump_stats.remove(&slot);
    }

    pub fn session_mut(&mut self, slot: PlayerSlot) -> Option<&mut PlayerSession> {
        self.sessions.get_mut(&slot)
    }

    pub fn timer(&self, slot: PlayerSlot) -> Option<&PlayerTimerInfo> {
        self.timers.get(&slot)
    }

    /// A spectator counts only if they are a human on the spectator team
    /// watching somebody we track.
    pub fn is_eligible_spectator(&self, slot: PlayerSlot) -> bool {
        match self.sessions.get(&slot) {
            Some(session) => {
                session.team == Team::Spectator
                    && !session.is_bot
                    && self.timers.contains_key(&slot)
                    && session
                        .observer_target
                        .map_or(false, |target| self.sessions.contains_key(&target))
            }
            None => false,
        }
    }

    /// Run one server tick: evaluate zones and push volumes for every
    /// connected player. A failure for one player is logged and must not
    /// affect the rest of the tick.
    pub fn tick(&mut self, zones: &MapZones, settings: &Settings) {
        let slots: Vec<PlayerSlot> = self.sessions.keys().copied().collect();
        for slot in slots {
            if let Err(err) = self.check_player(slot, zones, settings) {
                error!(slot, %err, "player tick evaluation failed, continuing");
            }
        }
    }

    /// Per-player tick evaluation. Ineligible players are a silent `Ok`;
    /// a connected session without timer state is a real error and bubbles
    /// up to `tick` for logging.
    pub fn check_player(
        &mut self,
        slot: PlayerSlot,
        zones: &MapZones,
        settings: &Settings,
    ) -> Result<(), ZoneCheckError> {
        let session = self
            .sessions
            .get(&slot)
            .ok_or(ZoneCheckError::SessionNotFound(slot))?;

        if !session.is_alive || !session.team.is_playing() {
            return Ok(());
        }
        if settings.jump_stats_enabled && !self.jump_stats.contains(&slot) {
            return Ok(());
        }

        let position = session.position;
        let velocity = session.velocity;

        let timer = self
            .timers
            .get_mut(&slot)
            .ok_or(ZoneCheckError::TimerNotTracked(slot))?;
        if timer.is_noclip {
            return Ok(());
        }

        zones::check_player_coords(
            slot,
            timer,
            position,
            velocity,
            zones,
            settings,
            self.sink.as_mut(),
            self.adjuster.as_mut(),
        );

        if let Some(session) = self.sessions.get_mut(&slot) {
            push::check_player_push(slot, position, &mut session.velocity, zones);
        }

        Ok(())
    }

    // WARNING: this function never returns
    pub fn start_loop(&mut self, zones: &MapZones, settings: &Settings) {
        let max_server_tick_duration = Duration::from_millis(settings.server_tick_ms);
        info!(tick_ms = settings.server_tick_ms, "timer server loop running");

        loop {
            let start_time = Instant::now();

            self.tick(zones, settings);

            // an overrun tick just rolls straight into the next one
            match max_server_tick_duration.checked_sub(start_time.elapsed()) {
                Some(remaining) => thread::sleep(remaining),
                None => warn!("server tick took longer than configured length"),
            }
        }
    }
}

/// Dispatcher stand-in: logs every transition it is handed. The production
/// timer replaces this with its real start/stop bookkeeping.
pub struct LogTimerSink;

impl TimerSink for LogTimerSink {
    fn on_timer_start(&mut self, slot: PlayerSlot, bonus: Option<BonusId>) {
        debug!(slot, ?bonus, "timer start");
    }

    fn on_timer_stop(&mut self, slot: PlayerSlot) {
        info!(slot, "timer stop");
    }

    fn on_bonus_timer_stop(&mut self, slot: PlayerSlot, bonus: BonusId) {
        info!(slot, bonus, "bonus timer stop");
    }

    fn on_recording_start(&mut self, slot: PlayerSlot, bonus: Option<BonusId>) {
        debug!(slot, ?bonus, "recording start");
    }

    fn on_recording_stop(&mut self, slot: PlayerSlot) {
        debug!(slot, "recording stop");
    }
}

/// Adjuster stand-in for running without the engine's velocity primitives.
pub struct LogVelocityAdjuster;

impl VelocityAdjuster for LogVelocityAdjuster {
    fn adjust(&mut self, slot: PlayerSlot, cap: f64, clamp_on_entry: bool) {
        debug!(slot, cap, clamp_on_entry, "capping 3d start speed");
    }

    fn adjust_2d(&mut self, slot: PlayerSlot, cap: f64, clamp_on_entry: bool) {
        debug!(slot, cap, clamp_on_entry, "capping 2d start speed");
    }
}
