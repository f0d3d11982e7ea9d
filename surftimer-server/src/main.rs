use tracing::info;

use surftimer_core::GLOBAL_CONFIG;

mod game;
mod map;
mod physics;
mod push;
mod zones;

use game::{LogTimerSink, LogVelocityAdjuster, TimerServer};

fn main() {
    tracing_subscriber::fmt::init();

    let zones =
        map::MapZones::load(&GLOBAL_CONFIG.zone_file).expect("could not load configured zone file");
    info!(
        zone_file = %GLOBAL_CONFIG.zone_file,
        bonuses = zones.bonuses.len(),
        push_volumes = zones.push_volumes.len(),
        "map zones loaded"
    );

    // kick off the tick loop
    let mut server = TimerServer::new(Box::new(LogTimerSink), Box::new(LogVelocityAdjuster));
    server.start_loop(&zones, &GLOBAL_CONFIG);
}
