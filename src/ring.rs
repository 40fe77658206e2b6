//! Seeded initial conditions: bodies spread on a tilted ring around the center.

use std::f64::consts::TAU;

use palette::{FromColor, Hsv, RgbHue};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::prelude::*;

/// Builds `params.num_bodies` bodies on a unit ring around `params.center`.
///
/// Body `i` sits at angle `-i * 2π / n`, offset by `(sin, sin 2x, cos)` so the
/// ring undulates vertically, and moves tangentially. With
/// `params.random_speed` the tangential speed is drawn from `[0, 1)`,
/// otherwise it is `1`. Each body gets a random hue. The same seed always
/// yields the same set.
pub fn ring(params: &Params) -> Result<BodySet<Tint>> {
    params.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let n = params.num_bodies;
    let mut bodies = BodySet::with_capacity(n as usize);

    for i in 0..n {
        let rad = -(i as f64) * TAU / n as f64;

        let offset = Vec3::new(rad.sin() as Scalar, (rad * 2.0).sin() as Scalar, rad.cos() as Scalar);
        let heading = Vec3::new(rad.cos() as Scalar, 0.0, -rad.sin() as Scalar);
        let speed: Scalar = if params.random_speed { rng.random() } else { 1.0 };

        let tint = tint(rng.random(), params.tint_saturation, params.tint_value);

        bodies.insert(
            Body::new(BodyId(i), params.body_mass, params.center + offset, heading * speed),
            tint,
        )?;
    }

    Ok(bodies)
}

/// HSV to sRGB, `hue` in turns (`[0, 1)`).
pub fn tint(hue: Scalar, saturation: Scalar, value: Scalar) -> Tint {
    let hsv: Hsv = Hsv::new(RgbHue::from_degrees(hue * 360.0), saturation, value);
    Tint::from_color(hsv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small(random_speed: bool) -> Params {
        Params {
            num_bodies: 8,
            random_speed,
            ..Params::default()
        }
    }

    #[test]
    fn same_seed_same_bodies() {
        let a = ring(&small(true)).unwrap();
        let b = ring(&small(true)).unwrap();
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.velocities(), b.velocities());
        assert_eq!(a.visuals(), b.visuals());

        let c = ring(&Params { seed: 7, ..small(true) }).unwrap();
        assert_ne!(a.velocities(), c.velocities());
    }

    #[test]
    fn bodies_lie_on_the_ring() {
        let params = small(false);
        let bodies = ring(&params).unwrap();
        assert_eq!(bodies.len(), 8);

        for (i, (body, _)) in bodies.iter().enumerate() {
            assert_eq!(body.id, BodyId(i as u32));
            assert_eq!(body.mass, params.body_mass);
            let offset = body.pos - params.center;
            // horizontal radius is 1, vertical wobble is sin(2x)
            assert_relative_eq!(offset.xz().norm(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(body.speed(), 1.0, epsilon = 1e-5);
            // tangential: no radial component, no vertical motion
            assert_relative_eq!(body.vel.xz().dot(&offset.xz()), 0.0, epsilon = 1e-5);
            assert_eq!(body.vel.y, 0.0);
        }
    }

    #[test]
    fn first_body_sits_in_front_of_center() {
        let params = small(false);
        let bodies = ring(&params).unwrap();
        let first = bodies.body(0).unwrap();
        assert_relative_eq!(first.pos, params.center + Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(first.vel, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn random_speed_stays_below_one() {
        let bodies = ring(&Params { num_bodies: 64, ..small(true) }).unwrap();
        assert!(bodies.velocities().iter().all(|v| v.norm() < 1.0));
    }

    #[test]
    fn tint_applies_saturation_and_value() {
        let grey = tint(0.3, 0.0, 1.0);
        assert_relative_eq!(grey.red, 1.0, epsilon = 1e-5);
        assert_relative_eq!(grey.green, 1.0, epsilon = 1e-5);
        assert_relative_eq!(grey.blue, 1.0, epsilon = 1e-5);

        let red = tint(0.0, 1.0, 1.0);
        assert_relative_eq!(red.red, 1.0, epsilon = 1e-5);
        assert_relative_eq!(red.green, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rejects_invalid_params() {
        assert!(ring(&Params { body_mass: 0.0, ..small(true) }).is_err());
    }
}
