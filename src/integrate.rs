//! Per-body velocity and position integration.

use crate::prelude::*;

/// Position and velocity of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Point3,
    pub vel: Vec3,
}

/// Which branch a body took during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Pinned to an external pose; physics suspended.
    Held,
    /// Outside the play area and steered back toward the center.
    Steered,
    Free,
}

/// Soft spherical play area around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Point3,
    pub play_size_sq: Scalar,
    pub velocity_damp: Scalar,
}

impl Bounds {
    /// Velocity that replaces the current one when `pos` is outside the area.
    ///
    /// Applied on every frame the body stays outside, so it behaves as a
    /// steady pull toward the center rather than a single reflection.
    pub fn steer(&self, pos: &Point3) -> Option<Vec3> {
        let offset = pos - self.center;
        if offset.norm_squared() > self.play_size_sq {
            Some(-offset * (1.0 - self.velocity_damp))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    pub drag: Scalar,
    pub bounds: Bounds,
}

impl Integrator {
    pub fn new(params: &Params) -> Self {
        Integrator {
            drag: params.drag,
            bounds: Bounds {
                center: params.center,
                play_size_sq: params.play_size_sq,
                velocity_damp: params.bounds_velocity_damp,
            },
        }
    }

    /// Quadratic drag, `D = Cd * |v|^2 / 2` against the direction of motion.
    pub fn apply_drag(&self, vel: Vec3, dt: Scalar) -> Vec3 {
        // a body at rest has no direction and feels no drag
        let dir = match vel.try_normalize(0.0) {
            Some(dir) => dir,
            None => return vel,
        };
        let fdrag = dir * (self.drag * vel.norm_squared() / 2.0);
        vel - fdrag * dt
    }

    /// Advances one body by `dt`.
    ///
    /// A `target` pose pins the body there at rest and discards `dv`.
    /// Otherwise `dv` is added, drag applied, the play area enforced and the
    /// position integrated with the resulting velocity.
    pub fn advance(&self, motion: Motion, dv: Vec3, target: Option<Point3>, dt: Scalar) -> (Motion, Branch) {
        if let Some(pos) = target {
            let held = Motion { pos, vel: Vec3::zeros() };
            return (held, Branch::Held);
        }

        let mut vel = self.apply_drag(motion.vel + dv, dt);

        let mut branch = Branch::Free;
        if let Some(steered) = self.bounds.steer(&motion.pos) {
            vel = steered;
            branch = Branch::Steered;
        }

        let pos = motion.pos + vel * dt;
        (Motion { pos, vel }, branch)
    }
}
