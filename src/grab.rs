//! Interactive overrides: an outside hand pinning bodies in place.

use std::collections::HashMap;

use crate::prelude::*;

/// Source of per-frame interactive overrides.
///
/// Queried once per body per frame with the body's current position. Returning
/// `Some(pose)` means the body is held there for the frame.
pub trait Grab {
    fn grab(&mut self, id: BodyId, pos: &Point3) -> Option<Point3>;
}

impl<F> Grab for F
where
    F: FnMut(BodyId, &Point3) -> Option<Point3>,
{
    fn grab(&mut self, id: BodyId, pos: &Point3) -> Option<Point3> {
        self(id, pos)
    }
}

/// Never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGrab;

impl Grab for NoGrab {
    fn grab(&mut self, _id: BodyId, _pos: &Point3) -> Option<Point3> {
        None
    }
}

/// Bodies held at fixed target poses until released.
#[derive(Debug, Clone, Default)]
pub struct HeldBodies {
    held: HashMap<BodyId, Point3>,
}

impl HeldBodies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, id: BodyId, pose: Point3) {
        self.held.insert(id, pose);
    }

    pub fn release(&mut self, id: BodyId) -> Option<Point3> {
        self.held.remove(&id)
    }

    pub fn is_held(&self, id: BodyId) -> bool {
        self.held.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl Grab for HeldBodies {
    fn grab(&mut self, id: BodyId, _pos: &Point3) -> Option<Point3> {
        self.held.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_bodies_report_their_pose_until_released() {
        let mut held = HeldBodies::new();
        let pose = Point3::new(1.0, 2.0, 3.0);
        held.hold(BodyId(4), pose);

        assert_eq!(held.grab(BodyId(4), &Point3::origin()), Some(pose));
        assert_eq!(held.grab(BodyId(5), &Point3::origin()), None);

        assert_eq!(held.release(BodyId(4)), Some(pose));
        assert!(held.is_empty());
        assert_eq!(held.grab(BodyId(4), &Point3::origin()), None);
    }

    #[test]
    fn closures_can_grab() {
        let mut calls = 0;
        let mut lift = |id: BodyId, pos: &Point3| {
            calls += 1;
            (id == BodyId(0)).then(|| pos + Vec3::y())
        };
        assert_eq!(lift.grab(BodyId(0), &Point3::origin()), Some(Point3::new(0.0, 1.0, 0.0)));
        assert_eq!(lift.grab(BodyId(1), &Point3::origin()), None);
        assert_eq!(calls, 2);
    }
}
