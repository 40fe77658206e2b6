//! Simulation parameters and their YAML representation.
//!
//! Every field has a default, so a scenario file only lists what it changes:
//!
//! ```yaml
//! num_bodies: 100
//! g: 1.81
//! drag: 0.1
//! play_size_sq: 50.0      # .inf disables boundary steering
//! bounds_velocity_damp: 0.6
//! body_radius: 0.1
//! center: [0.0, -0.8, -5.0]
//! body_mass: 0.15
//! random_speed: true
//! tint_saturation: 0.7
//! tint_value: 1.0
//! seed: 42
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::prelude::*;

/// Parameters fixed for the lifetime of a simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    pub num_bodies: u32,
    /// Gravitational constant.
    pub g: Scalar,
    pub drag: Scalar,
    /// Squared distance from `center` past which boundary steering kicks in.
    pub play_size_sq: Scalar,
    /// Fraction of the outward offset removed when steering a body back.
    pub bounds_velocity_damp: Scalar,
    /// Only used for drawing; bodies are point masses.
    pub body_radius: Scalar,
    pub center: Point3,
    pub body_mass: Scalar,
    /// Scale each initial ring velocity by a uniform sample in `[0, 1)`.
    pub random_speed: bool,
    pub tint_saturation: Scalar,
    pub tint_value: Scalar,
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            num_bodies: 100,
            g: 1.81,
            drag: 0.1,
            play_size_sq: 50.0,
            bounds_velocity_damp: 0.6,
            body_radius: 0.1,
            center: Point3::new(0.0, -0.8, -5.0),
            body_mass: 0.15,
            random_speed: true,
            tint_saturation: 0.7,
            tint_value: 1.0,
            seed: 42,
        }
    }
}

impl Params {
    pub fn from_yaml_str(src: &str) -> Result<Self> {
        let params: Params = serde_yaml::from_str(src)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&src)
    }

    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, msg: impl FnOnce() -> String) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(Error::InvalidParam(msg()))
            }
        }

        check(self.g.is_finite(), || format!("g must be finite, got {}", self.g))?;
        check(self.drag.is_finite() && self.drag >= 0.0, || {
            format!("drag must be finite and >= 0, got {}", self.drag)
        })?;
        // infinity is allowed and disables steering
        check(self.play_size_sq > 0.0, || {
            format!("play_size_sq must be > 0, got {}", self.play_size_sq)
        })?;
        check((0.0..=1.0).contains(&self.bounds_velocity_damp), || {
            format!("bounds_velocity_damp must be in [0, 1], got {}", self.bounds_velocity_damp)
        })?;
        check(self.body_radius.is_finite() && self.body_radius > 0.0, || {
            format!("body_radius must be finite and > 0, got {}", self.body_radius)
        })?;
        check(self.center.iter().all(|c| c.is_finite()), || {
            format!("center must be finite, got {:?}", self.center)
        })?;
        check(self.body_mass.is_finite() && self.body_mass > 0.0, || {
            format!("body_mass must be finite and > 0, got {}", self.body_mass)
        })?;
        check((0.0..=1.0).contains(&self.tint_saturation), || {
            format!("tint_saturation must be in [0, 1], got {}", self.tint_saturation)
        })?;
        check((0.0..=1.0).contains(&self.tint_value), || {
            format!("tint_value must be in [0, 1], got {}", self.tint_value)
        })
    }

    pub fn bounded(&self) -> bool {
        self.play_size_sq.is_finite()
    }
}
