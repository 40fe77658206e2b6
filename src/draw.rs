//! Draw output handed to the renderer after every step.

use crate::prelude::*;

/// One body to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand<'a, V> {
    pub id: BodyId,
    /// Pose of the body (translation only, bodies have no orientation).
    pub transform: Mat4,
    /// Sphere diameter, for sinks drawing a unit mesh.
    pub scale: Scalar,
    pub visual: &'a V,
}

impl<'a, V> DrawCommand<'a, V> {
    pub fn new(id: BodyId, pos: &Point3, scale: Scalar, visual: &'a V) -> Self {
        DrawCommand {
            id,
            transform: Mat4::new_translation(&pos.coords),
            scale,
            visual,
        }
    }

    pub fn position(&self) -> Point3 {
        self.transform.transform_point(&Point3::origin())
    }

    /// Pose and scale combined into a single model matrix.
    pub fn model(&self) -> Mat4 {
        self.transform * Mat4::new_scaling(self.scale)
    }
}

/// Receives one command per body after each step.
pub trait DrawSink<V> {
    fn draw(&mut self, cmd: DrawCommand<'_, V>);
}

impl<V, F> DrawSink<V> for F
where
    F: FnMut(DrawCommand<'_, V>),
{
    fn draw(&mut self, cmd: DrawCommand<'_, V>) {
        self(cmd)
    }
}

/// A frame's worth of owned draw commands.
#[derive(Debug, Clone)]
pub struct DrawList<V> {
    pub items: Vec<(BodyId, Mat4, V)>,
    pub scale: Scalar,
}

impl<V> Default for DrawList<V> {
    fn default() -> Self {
        DrawList {
            items: Vec::new(),
            scale: 0.0,
        }
    }
}

impl<V> DrawList<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V: Clone> DrawSink<V> for DrawList<V> {
    fn draw(&mut self, cmd: DrawCommand<'_, V>) {
        self.scale = cmd.scale;
        self.items.push((cmd.id, cmd.transform, cmd.visual.clone()));
    }
}
