use serde::Serialize;

use super::vec3::Vec3;

/// Collision shape in body-local space (centered at the body position)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BodyShape {
    Sphere { radius: f32 },
    /// Axis-aligned box given by its half extents
    Cuboid { half_extents: Vec3 },
}

impl BodyShape {
    pub fn sphere(diameter: f32) -> Self {
        BodyShape::Sphere { radius: diameter * 0.5 }
    }

    /// Box from full width/height/depth
    pub fn cuboid(size: Vec3) -> Self {
        BodyShape::Cuboid { half_extents: size * 0.5 }
    }

    /// Half extents of the shape's bounding box
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            BodyShape::Sphere { radius } => Vec3::new(radius, radius, radius),
            BodyShape::Cuboid { half_extents } => half_extents,
        }
    }

    /// Radius of the bounding sphere
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            BodyShape::Sphere { radius } => radius,
            BodyShape::Cuboid { half_extents } => half_extents.length(),
        }
    }
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec3,
    /// Velocity vector (m/s)
    pub velocity: Vec3,
    /// Total mass (0 for static bodies)
    pub mass: f32,
    /// Cached 1/mass (0 for static bodies)
    pub inv_mass: f32,
    /// Is body active (simulated)?
    pub active: bool,
    /// Unique ID for this body within its system
    pub id: u32,

    // === Shape Definition ===
    pub shape: BodyShape,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl RigidBody {
    /// Create a dynamic sphere
    pub fn new_sphere(pos: Vec3, diameter: f32, mass: f32, restitution: f32, id: u32) -> Self {
        let mass = mass.max(0.0001);
        Self {
            pos,
            velocity: Vec3::zero(),
            mass,
            inv_mass: 1.0 / mass,
            active: true,
            id,
            shape: BodyShape::sphere(diameter),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Create an immovable body of any shape
    pub fn new_static(pos: Vec3, shape: BodyShape, restitution: f32, id: u32) -> Self {
        Self {
            pos,
            velocity: Vec3::zero(),
            mass: 0.0,
            inv_mass: 0.0,
            active: true,
            id,
            shape,
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Create a dynamic body of any shape
    pub fn new_dynamic(pos: Vec3, shape: BodyShape, mass: f32, restitution: f32, id: u32) -> Self {
        let mut body = Self::new_static(pos, shape, restitution, id);
        body.mass = mass.max(0.0001);
        body.inv_mass = 1.0 / body.mass;
        body
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Axis-aligned bounds as (min, max)
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let h = self.shape.half_extents();
        (self.pos - h, self.pos + h)
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bodies_ignore_impulses() {
        let mut wall = RigidBody::new_static(
            Vec3::zero(),
            BodyShape::cuboid(Vec3::new(2.0, 2.0, 2.0)),
            0.3,
            0,
        );
        wall.apply_impulse(Vec3::new(100.0, 0.0, 0.0));
        assert!(wall.is_static());
        assert_eq!(wall.velocity, Vec3::ZERO);
    }

    #[test]
    fn sphere_from_diameter() {
        let ball = RigidBody::new_sphere(Vec3::zero(), 2.0, 1.0, 0.2, 7);
        assert_eq!(ball.shape, BodyShape::Sphere { radius: 1.0 });
        assert_eq!(ball.inv_mass, 1.0);
        assert_eq!(ball.aabb().1, Vec3::new(1.0, 1.0, 1.0));
    }
}
