use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::Deserialize;
use thiserror::Error;

use crate::physics::bounding_box::BoundingBox;

/// A zone volume as it appears in map data: two opposite corners in
/// arbitrary order. A zero vector on either corner means the volume was
/// never configured and everything depending on it is disabled.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Volume {
    pub corner_a: DVec3,
    pub corner_b: DVec3,
}

impl Volume {
    pub const UNSET: Volume = Volume {
        corner_a: DVec3::ZERO,
        corner_b: DVec3::ZERO,
    };

    pub fn new(corner_a: DVec3, corner_b: DVec3) -> Volume {
        Volume { corner_a, corner_b }
    }

    pub fn is_unset(&self) -> bool {
        self.corner_a == DVec3::ZERO || self.corner_b == DVec3::ZERO
    }

    pub fn contains(&self, point: DVec3) -> bool {
        BoundingBox::from_corners(self.corner_a, self.corner_b).contains(point)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PushVolumeEntry {
    pub volume: Volume,
    /// Entity-space push direction; applied as-is, never renormalized.
    pub direction: DVec3,
    pub push_speed: f64,
}

/// Everything position-dependent we know about the loaded map: course zone
/// volumes and the push volume registry. Built once when a map's zone data
/// loads, replaced wholesale on map change, and read-only during ticks.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MapZones {
    #[serde(default)]
    pub main_start: Volume,
    #[serde(default)]
    pub main_end: Volume,

    /// Bonus course volumes, indexed by bonus number; index 0 is reserved.
    #[serde(default)]
    pub bonus_start: Vec<Volume>,
    #[serde(default)]
    pub bonus_end: Vec<Volume>,
    /// The bonus numbers this map advertises. Entries are validated against
    /// the corner vectors at check time, not load time, so a bad bonus only
    /// takes down itself.
    #[serde(default)]
    pub bonuses: Vec<u8>,

    #[serde(default)]
    pub push_volumes: Vec<PushVolumeEntry>,
}

impl Default for Volume {
    fn default() -> Volume {
        Volume::UNSET
    }
}

#[derive(Error, Debug)]
pub enum MapLoadError {
    #[error("could not read zone file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse zone file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MapZones {
    pub fn load(path: impl AsRef<Path>) -> Result<MapZones, MapLoadError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Both main-course volumes have real corners.
    pub fn main_course_configured(&self) -> bool {
        !self.main_start.is_unset() && !self.main_end.is_unset()
    }

    /// Resolve a point against the push registry: first matching entry wins.
    pub fn resolve_push(&self, point: DVec3) -> Option<(DVec3, f64)> {
        self.push_volumes
            .iter()
            .find(|entry| !entry.volume.is_unset() && entry.volume.contains(point))
            .map(|entry| (entry.direction, entry.push_speed))
    }
}
