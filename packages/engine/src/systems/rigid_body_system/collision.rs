use crate::rigid_body::{BodyShape, RigidBody, Vec3};

/// Approach speeds below this are resolved without bounce (resting contact).
const RESTING_SPEED: f32 = 0.5;

/// Penetration along `normal`, which points from `b` towards `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Contact {
    pub normal: Vec3,
    pub depth: f32,
}

impl Contact {
    fn flipped(self) -> Self {
        Contact { normal: -self.normal, depth: self.depth }
    }
}

pub(super) fn contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    match (a.shape, b.shape) {
        (BodyShape::Sphere { radius: ra }, BodyShape::Sphere { radius: rb }) => {
            sphere_vs_sphere(a.pos, ra, b.pos, rb)
        }
        (BodyShape::Sphere { radius }, BodyShape::Cuboid { half_extents }) => {
            sphere_vs_cuboid(a.pos, radius, b.pos, half_extents)
        }
        (BodyShape::Cuboid { half_extents }, BodyShape::Sphere { radius }) => {
            sphere_vs_cuboid(b.pos, radius, a.pos, half_extents).map(Contact::flipped)
        }
        (BodyShape::Cuboid { half_extents: ha }, BodyShape::Cuboid { half_extents: hb }) => {
            cuboid_vs_cuboid(a.pos, ha, b.pos, hb)
        }
    }
}

pub(super) fn sphere_vs_sphere(a: Vec3, ra: f32, b: Vec3, rb: f32) -> Option<Contact> {
    let delta = a - b;
    let r = ra + rb;
    let d2 = delta.length_squared();
    if d2 >= r * r {
        return None;
    }
    let d = d2.sqrt();
    // Coincident centers: separate vertically.
    let normal = if d > 1e-6 { delta * (1.0 / d) } else { Vec3::new(0.0, 1.0, 0.0) };
    Some(Contact { normal, depth: r - d })
}

pub(super) fn sphere_vs_cuboid(center: Vec3, radius: f32, box_center: Vec3, half: Vec3) -> Option<Contact> {
    let local = center - box_center;
    let closest = local.clamp(-half, half);
    let delta = local - closest;
    let d2 = delta.length_squared();

    if d2 > 0.0 {
        if d2 >= radius * radius {
            return None;
        }
        let d = d2.sqrt();
        return Some(Contact { normal: delta * (1.0 / d), depth: radius - d });
    }

    // Center inside the box: leave through the nearest face.
    let pen = Vec3::new(half.x - local.x.abs(), half.y - local.y.abs(), half.z - local.z.abs());
    let sign = |v: f32| if v >= 0.0 { 1.0 } else { -1.0 };
    let (normal, depth) = if pen.x <= pen.y && pen.x <= pen.z {
        (Vec3::new(sign(local.x), 0.0, 0.0), pen.x)
    } else if pen.y <= pen.z {
        (Vec3::new(0.0, sign(local.y), 0.0), pen.y)
    } else {
        (Vec3::new(0.0, 0.0, sign(local.z)), pen.z)
    };
    Some(Contact { normal, depth: depth + radius })
}

pub(super) fn cuboid_vs_cuboid(a: Vec3, ha: Vec3, b: Vec3, hb: Vec3) -> Option<Contact> {
    let delta = a - b;
    let overlap = Vec3::new(
        ha.x + hb.x - delta.x.abs(),
        ha.y + hb.y - delta.y.abs(),
        ha.z + hb.z - delta.z.abs(),
    );
    if overlap.x <= 0.0 || overlap.y <= 0.0 || overlap.z <= 0.0 {
        return None;
    }
    let sign = |v: f32| if v >= 0.0 { 1.0 } else { -1.0 };
    let (normal, depth) = if overlap.x <= overlap.y && overlap.x <= overlap.z {
        (Vec3::new(sign(delta.x), 0.0, 0.0), overlap.x)
    } else if overlap.y <= overlap.z {
        (Vec3::new(0.0, sign(delta.y), 0.0), overlap.y)
    } else {
        (Vec3::new(0.0, 0.0, sign(delta.z)), overlap.z)
    };
    Some(Contact { normal, depth })
}

#[inline]
fn bounce(a: &RigidBody, b: &RigidBody, approach_speed: f32) -> f32 {
    if approach_speed < RESTING_SPEED {
        0.0
    } else {
        (a.restitution + b.restitution) * 0.5
    }
}

/// Push two dynamic bodies apart and exchange the normal impulse.
pub(super) fn resolve(a: &mut RigidBody, b: &mut RigidBody, c: &Contact) {
    let inv_sum = a.inv_mass + b.inv_mass;
    if inv_sum == 0.0 {
        return;
    }

    let correction = c.normal * (c.depth / inv_sum);
    a.pos += correction * a.inv_mass;
    b.pos -= correction * b.inv_mass;

    let vn = (a.velocity - b.velocity).dot(c.normal);
    if vn >= 0.0 {
        return;
    }
    let e = bounce(a, b, -vn);
    let j = -(1.0 + e) * vn / inv_sum;
    a.velocity += c.normal * (j * a.inv_mass);
    b.velocity -= c.normal * (j * b.inv_mass);
}

/// Resolve a dynamic body against an immovable one.
pub(super) fn resolve_against_static(body: &mut RigidBody, wall: &RigidBody, c: &Contact) {
    if body.inv_mass == 0.0 {
        return;
    }
    body.pos += c.normal * c.depth;

    let vn = body.velocity.dot(c.normal);
    if vn >= 0.0 {
        return;
    }
    let e = bounce(body, wall, -vn);
    body.velocity -= c.normal * ((1.0 + e) * vn);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_resting_on_box_top_pushes_up() {
        let c = sphere_vs_cuboid(
            Vec3::new(0.0, 1.9, 0.0),
            1.0,
            Vec3::zero(),
            Vec3::new(5.0, 1.0, 2.5),
        )
        .expect("overlapping");
        assert_eq!(c.normal, Vec3::new(0.0, 1.0, 0.0));
        assert!((c.depth - 0.1).abs() < 1e-5);
    }

    #[test]
    fn sphere_inside_box_exits_nearest_face() {
        let c = sphere_vs_cuboid(
            Vec3::new(-4.5, 0.0, 0.0),
            1.0,
            Vec3::zero(),
            Vec3::new(5.0, 5.0, 5.0),
        )
        .expect("inside");
        assert_eq!(c.normal, Vec3::new(-1.0, 0.0, 0.0));
        assert!((c.depth - 1.5).abs() < 1e-5);
    }

    #[test]
    fn separated_spheres_have_no_contact() {
        assert!(sphere_vs_sphere(Vec3::zero(), 1.0, Vec3::new(2.5, 0.0, 0.0), 1.0).is_none());
        let c = sphere_vs_sphere(Vec3::zero(), 1.0, Vec3::new(1.5, 0.0, 0.0), 1.0).expect("touching");
        assert_eq!(c.normal, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn fast_impact_bounces_with_averaged_restitution() {
        let mut ball = RigidBody::new_sphere(Vec3::new(0.0, 1.9, 0.0), 2.0, 1.0, 0.2, 0);
        ball.velocity = Vec3::new(0.0, -10.0, 0.0);
        let floor = RigidBody::new_static(
            Vec3::zero(),
            BodyShape::cuboid(Vec3::new(10.0, 2.0, 5.0)),
            0.4,
            1,
        );
        let c = contact(&ball, &floor).expect("contact");
        resolve_against_static(&mut ball, &floor, &c);
        assert!((ball.velocity.y - 3.0).abs() < 1e-4);
        assert!(ball.pos.y >= 2.0 - 1e-5);
    }

    #[test]
    fn slow_impact_comes_to_rest() {
        let mut ball = RigidBody::new_sphere(Vec3::new(0.0, 1.95, 0.0), 2.0, 1.0, 1.0, 0);
        ball.velocity = Vec3::new(0.0, -0.1, 0.0);
        let floor = RigidBody::new_static(
            Vec3::zero(),
            BodyShape::cuboid(Vec3::new(10.0, 2.0, 5.0)),
            1.0,
            1,
        );
        let c = contact(&ball, &floor).expect("contact");
        resolve_against_static(&mut ball, &floor, &c);
        assert_eq!(ball.velocity.y, 0.0);
    }
}
