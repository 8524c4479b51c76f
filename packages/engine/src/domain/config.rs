//! Sandbox configuration, loaded from JSON by the host page.
//!
//! Every field has a default, so `{}` is a valid config and a host only
//! spells out what it wants to change.

use serde::{Deserialize, Serialize};

use crate::rigid_body::Vec3;
use crate::rigid_body_system::DEFAULT_GRAVITY;

use super::orientation::DEG_TO_PHYSIC;

/// Spawn RNG seed used when the config does not name one
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SandboxConfig {
    /// Visible world width in simulation units
    pub world_width: f32,
    pub spawn: SpawnConfig,
    pub enclosure: EnclosureConfig,
    pub gravity: GravityConfig,
    pub physics: PhysicsConfig,
    /// RNG seed for spawn positions; [`DEFAULT_SEED`] when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnConfig {
    pub target_count: u32,
    pub interval_ms: u32,
    /// Start the scheduler as soon as the scene is set up
    pub auto_start: bool,
    pub diameter: f32,
    /// Sphere tessellation hint for the renderer
    pub segments: u32,
    pub mass: f32,
    pub restitution: f32,
    /// Half-width of the horizontal drop band
    pub x_spread: f32,
    /// Height of the drop band above the visible top edge
    pub y_jitter: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnclosureConfig {
    pub ceiling: bool,
    pub back_wall: bool,
    pub wall_restitution: f32,
    pub back_wall_restitution: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GravityConfig {
    /// Sensor degrees per m/s² (signed, device calibration)
    pub deg_to_physic: f32,
    /// Multiplier applied to accelerometer readings
    pub motion_scale: f32,
    /// Gravity before the first sensor sample arrives
    pub initial: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    /// Speed cap for dynamic bodies (m/s)
    pub max_speed: f32,
    /// Integration substeps per frame
    pub substeps: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            world_width: 100.0,
            spawn: SpawnConfig::default(),
            enclosure: EnclosureConfig::default(),
            gravity: GravityConfig::default(),
            physics: PhysicsConfig::default(),
            seed: None,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            target_count: 200,
            interval_ms: 100,
            auto_start: true,
            diameter: 2.0,
            segments: 2,
            mass: 1.0,
            restitution: 0.2,
            x_spread: 4.0,
            y_jitter: 10.0,
        }
    }
}

impl Default for EnclosureConfig {
    fn default() -> Self {
        Self {
            ceiling: true,
            back_wall: true,
            wall_restitution: 0.3,
            back_wall_restitution: 0.9,
        }
    }
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            deg_to_physic: DEG_TO_PHYSIC,
            motion_scale: 1.0,
            initial: DEFAULT_GRAVITY,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { max_speed: 60.0, substeps: 2 }
    }
}

impl SandboxConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SandboxConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Closer camera, fewer bodies: a 37-unit wide world with 100 spheres.
    pub fn compact() -> Self {
        Self {
            world_width: 37.0,
            spawn: SpawnConfig { target_count: 100, ..SpawnConfig::default() },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.world_width > 0.0) || !self.world_width.is_finite() {
            return Err(format!("worldWidth must be positive, got {}", self.world_width));
        }
        if self.spawn.interval_ms == 0 {
            return Err("spawn.intervalMs must be at least 1".to_string());
        }
        if !(self.spawn.diameter > 0.0) {
            return Err(format!("spawn.diameter must be positive, got {}", self.spawn.diameter));
        }
        if !(self.spawn.mass > 0.0) {
            return Err(format!("spawn.mass must be positive, got {}", self.spawn.mass));
        }
        if self.spawn.x_spread < 0.0 || self.spawn.y_jitter < 0.0 {
            return Err("spawn.xSpread and spawn.yJitter must not be negative".to_string());
        }
        if self.gravity.deg_to_physic == 0.0 || !self.gravity.deg_to_physic.is_finite() {
            return Err("gravity.degToPhysic must be a finite, non-zero number".to_string());
        }
        if !self.gravity.initial.is_finite() {
            return Err("gravity.initial must be finite".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = SandboxConfig::from_json("{}").expect("empty config parses");
        assert_eq!(config, SandboxConfig::default());
        assert_eq!(config.spawn.target_count, 200);
        assert_eq!(config.spawn.interval_ms, 100);
        assert_eq!(config.gravity.deg_to_physic, DEG_TO_PHYSIC);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = SandboxConfig::from_json(
            r#"{"worldWidth": 37, "spawn": {"targetCount": 100}, "enclosure": {"ceiling": false}, "seed": 9}"#,
        )
        .expect("parses");
        assert_eq!(config.world_width, 37.0);
        assert_eq!(config.spawn.target_count, 100);
        assert_eq!(config.spawn.interval_ms, 100);
        assert!(!config.enclosure.ceiling);
        assert!(config.enclosure.back_wall);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(SandboxConfig::from_json(r#"{"worldWidth": 0}"#).is_err());
        assert!(SandboxConfig::from_json(r#"{"spawn": {"intervalMs": 0}}"#).is_err());
        assert!(SandboxConfig::from_json(r#"{"gravity": {"degToPhysic": 0}}"#).is_err());
        assert!(SandboxConfig::from_json("not json").is_err());
    }

    #[test]
    fn compact_preset_matches_small_variant() {
        let config = SandboxConfig::compact();
        assert_eq!(config.world_width, 37.0);
        assert_eq!(config.spawn.target_count, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_round_trip_keeps_config() {
        let config = SandboxConfig::compact();
        let back = SandboxConfig::from_json(&config.to_json()).expect("round trip");
        assert_eq!(back, config);
    }
}
