use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub server_tick_ms: u64,
    pub zone_file: String,

    // when true the map relies on native engine triggers for the main
    // course; only the main-course box checks are skipped by this flag
    pub use_triggers_and_fake_zones: bool,
    pub enable_replays: bool,
    pub jump_stats_enabled: bool,

    pub max_starting_speed_enabled: bool,
    pub max_starting_speed: f64,
    pub use_2d_speed: bool,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("server_tick_ms", 15)?
            .set_default("zone_file", "zones.json")?
            .set_default("use_triggers_and_fake_zones", false)?
            .set_default("enable_replays", true)?
            .set_default("jump_stats_enabled", true)?
            .set_default("max_starting_speed_enabled", true)?
            .set_default("max_starting_speed", 320.0)?
            .set_default("use_2d_speed", false)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
