//! Direct O(N²) gravity.

use crate::prelude::*;

/// Pairwise Newtonian gravity between every body in a [`BodySet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub g: Scalar,
}

impl Gravity {
    pub fn new(g: Scalar) -> Self {
        Gravity { g }
    }

    /// Acceleration on `outer` from a single `inner` body.
    ///
    /// Points from `outer` toward `inner`. Coincident bodies have no defined
    /// direction and contribute exactly zero, as do pairs so close that the
    /// force overflows.
    pub fn pull(&self, outer: (&Point3, Scalar), inner: (&Point3, Scalar)) -> Vec3 {
        let (outer_pos, outer_mass) = outer;
        let (inner_pos, inner_mass) = inner;

        let dir = inner_pos - outer_pos;
        let r2 = dir.norm_squared();
        if r2 == 0.0 {
            return Vec3::zeros();
        }
        let radius = r2.sqrt();

        // F = G * (m1 * m2) / r^2
        // F = m * a
        let force = self.g * outer_mass * inner_mass / r2;
        let a = force / outer_mass;

        let pull = dir / radius * a;
        if pull.iter().all(|c| c.is_finite()) {
            pull
        } else {
            Vec3::zeros()
        }
    }

    /// Writes each body's velocity change over `dt` into `out`.
    ///
    /// Every outer body runs its own loop over every other body, so `out[i]`
    /// depends only on the read-only store and the summation order is fixed
    /// by index.
    pub fn velocity_deltas<V>(&self, bodies: &BodySet<V>, dt: Scalar, out: &mut [Vec3]) {
        let positions = bodies.positions();
        let masses = bodies.masses();
        debug_assert_eq!(out.len(), positions.len());

        for (i, dv) in out.iter_mut().enumerate() {
            let outer = (&positions[i], masses[i]);
            let mut acc = Vec3::zeros();

            for (j, (pos, &mass)) in positions.iter().zip(masses).enumerate() {
                if i == j {
                    continue;
                }
                acc += self.pull(outer, (pos, mass));
            }

            *dv = acc * dt;
        }
    }
}
