pub use nalgebra as na;

pub type Scalar = f32;

pub type Vec3 = na::Vector3<Scalar>;
pub type Point3 = na::Point3<Scalar>;
pub type Mat4 = na::Matrix4<Scalar>;

/// Per-body tint produced by ring initialization.
pub type Tint = palette::Srgb<Scalar>;

pub use crate::{
    System,
    StepStats,
    body::{Body, BodyId, BodySet},
    clock::FrameClock,
    config::Params,
    draw::{DrawCommand, DrawList, DrawSink},
    error::{Error, Result},
    grab::{Grab, HeldBodies, NoGrab},
};
