pub mod course;
pub mod player_timer;
mod settings;

pub use settings::{Settings, GLOBAL_CONFIG};

pub type PlayerSlot = usize;
