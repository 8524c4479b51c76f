//! EnclosureBuilder - static walls around the visible camera frame
//!
//! Layout (front view, z toward the camera):
//!
//! ```text
//!            ceiling   y = |bottom| + 15
//!   +-------------------------------+
//!   |  .........visible.........    |
//! L |  :                       :    | R    x = ±(|left| + 1)
//!   |  :.......................:    |
//!   +-------------------------------+
//!            floor     y = bottom - 1
//! ```
//!
//! The back wall sits behind the visible plane at z = -2.5 and keeps bodies
//! from drifting out of camera depth. Walls are named by where they are:
//! `Left` is the wall at negative x.

use serde::Serialize;

use crate::domain::config::EnclosureConfig;
use crate::domain::spawn::SpawnBounds;
use crate::domain::viewport::OrthoFrame;
use crate::rigid_body::{BodyShape, Vec3};

/// Gap between the visible bottom edge and the floor center
pub const FLOOR_MARGIN: f32 = 1.0;
/// Ceiling height above the visible top edge
pub const CEILING_OFFSET: f32 = 15.0;
/// Extra side-wall height beyond the visible extent
pub const WALL_HEIGHT_MARGIN: f32 = 30.0;
pub const SLAB_THICKNESS: f32 = 2.0;
pub const WALL_THICKNESS: f32 = 1.0;
pub const ENCLOSURE_DEPTH: f32 = 5.0;
pub const BACK_WALL_Z: f32 = -2.5;
pub const BACK_WALL_THICKNESS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WallKind {
    Floor,
    Ceiling,
    Left,
    Right,
    Back,
}

/// One static box of the enclosure
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub kind: WallKind,
    pub center: Vec3,
    /// Full width / height / depth
    pub size: Vec3,
    pub restitution: f32,
}

impl Wall {
    pub fn shape(&self) -> BodyShape {
        BodyShape::cuboid(self.size)
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enclosure {
    frame: OrthoFrame,
    walls: Vec<Wall>,
}

impl Enclosure {
    pub fn frame(&self) -> &OrthoFrame {
        &self.frame
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn wall(&self, kind: WallKind) -> Option<&Wall> {
        self.walls.iter().find(|w| w.kind == kind)
    }

    /// Visible bottom edge (negative)
    pub fn bottom(&self) -> f32 {
        self.frame.bottom
    }

    /// Free space between the wall faces as (min, max) in x/y
    pub fn interior(&self) -> (Vec3, Vec3) {
        let half_w = self.frame.left.abs();
        let half_h = self.frame.bottom.abs();

        let x_min = self.wall(WallKind::Left).map_or(-half_w, |w| w.max().x);
        let x_max = self.wall(WallKind::Right).map_or(half_w, |w| w.min().x);
        let y_min = self.wall(WallKind::Floor).map_or(-half_h, |w| w.max().y);
        let y_max = match self.wall(WallKind::Ceiling) {
            Some(ceiling) => ceiling.min().y,
            None => half_h + WALL_HEIGHT_MARGIN * 0.5,
        };
        let z_min = self.wall(WallKind::Back).map_or(-ENCLOSURE_DEPTH * 0.5, |w| w.max().z);

        (
            Vec3::new(x_min, y_min, z_min),
            Vec3::new(x_max, y_max, ENCLOSURE_DEPTH * 0.5),
        )
    }

    /// Drop band just above the visible top edge for bodies of `radius`.
    ///
    /// The band is clipped to the interior so a body never starts inside or
    /// beyond a wall, whatever `spread` and `jitter` ask for.
    pub fn spawn_bounds(&self, spread: f32, jitter: f32, radius: f32) -> SpawnBounds {
        let (min, max) = self.interior();
        let half = spread.min(max.x - radius).min(-min.x - radius).max(0.0);
        let y_min = self.frame.bottom.abs().min(max.y - radius);
        let y_max = (y_min + jitter).min(max.y - radius).max(y_min);
        SpawnBounds {
            x_min: -half,
            x_max: half,
            y_min,
            y_max,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnclosureBuilder {
    config: EnclosureConfig,
}

impl EnclosureBuilder {
    pub fn new(config: EnclosureConfig) -> Self {
        Self { config }
    }

    /// Walls for `frame`. Each call produces a fresh set; registering two sets
    /// stacks duplicate bodies, so call once per session.
    pub fn build(&self, frame: &OrthoFrame) -> Enclosure {
        let half_w = frame.left.abs();
        let half_h = frame.bottom.abs();
        let wall_height = half_h * 2.0 + WALL_HEIGHT_MARGIN;
        let slab = Vec3::new(half_w * 2.0, SLAB_THICKNESS, ENCLOSURE_DEPTH);
        let side = Vec3::new(WALL_THICKNESS, wall_height, ENCLOSURE_DEPTH);
        let restitution = self.config.wall_restitution;

        let mut walls = Vec::with_capacity(5);
        walls.push(Wall {
            kind: WallKind::Floor,
            center: Vec3::new(0.0, frame.bottom - FLOOR_MARGIN, 0.0),
            size: slab,
            restitution,
        });
        if self.config.ceiling {
            walls.push(Wall {
                kind: WallKind::Ceiling,
                center: Vec3::new(0.0, -frame.bottom + CEILING_OFFSET, 0.0),
                size: slab,
                restitution,
            });
        }
        walls.push(Wall {
            kind: WallKind::Left,
            center: Vec3::new(-(half_w + WALL_THICKNESS), 0.0, 0.0),
            size: side,
            restitution,
        });
        walls.push(Wall {
            kind: WallKind::Right,
            center: Vec3::new(half_w + WALL_THICKNESS, 0.0, 0.0),
            size: side,
            restitution,
        });
        if self.config.back_wall {
            walls.push(Wall {
                kind: WallKind::Back,
                center: Vec3::new(0.0, 0.0, BACK_WALL_Z),
                size: Vec3::new(half_w * 2.0 + 2.0 * WALL_THICKNESS, wall_height, BACK_WALL_THICKNESS),
                restitution: self.config.back_wall_restitution,
            });
        }

        Enclosure { frame: *frame, walls }
    }
}

impl Default for EnclosureBuilder {
    fn default() -> Self {
        Self::new(EnclosureConfig::default())
    }
}
