use crate::prelude::*;

/// Stable identity of a body, used to correlate grab queries and draw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub mass: Scalar,
    pub pos: Point3,
    pub vel: Vec3,
}

impl Body {
    pub fn new(id: BodyId, mass: Scalar, pos: Point3, vel: Vec3) -> Self {
        Body { id, mass, pos, vel }
    }

    pub fn dist(&self, other: &Self) -> Scalar {
        na::distance(&self.pos, &other.pos)
    }

    pub fn speed(&self) -> Scalar {
        self.vel.norm()
    }

    fn check(&self) -> Result<()> {
        let reason = if !(self.mass.is_finite() && self.mass > 0.0) {
            format!("mass must be finite and > 0, got {}", self.mass)
        } else if !self.pos.iter().all(|c| c.is_finite()) {
            format!("position is not finite: {:?}", self.pos)
        } else if !self.vel.iter().all(|c| c.is_finite()) {
            format!("velocity is not finite: {:?}", self.vel)
        } else {
            return Ok(());
        };
        Err(Error::InvalidBody { id: self.id, reason })
    }
}

/// Columnar store of every body in a simulation.
///
/// Each column is indexed identically; index `i` of every slice describes the
/// same body. The set only grows while it is being built. Once handed to a
/// [`System`] it is reachable read-only, and only the integrator writes
/// positions and velocities back.
#[derive(Debug, Clone)]
pub struct BodySet<V> {
    ids: Vec<BodyId>,
    positions: Vec<Point3>,
    velocities: Vec<Vec3>,
    masses: Vec<Scalar>,
    visuals: Vec<V>,
}

impl<V> Default for BodySet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BodySet<V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        BodySet {
            ids: Vec::with_capacity(n),
            positions: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
            masses: Vec::with_capacity(n),
            visuals: Vec::with_capacity(n),
        }
    }

    /// Builds a set from `(body, visual)` pairs, rejecting the first invalid body.
    pub fn from_bodies<I>(bodies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Body, V)>,
    {
        let bodies = bodies.into_iter();
        let mut set = Self::with_capacity(bodies.size_hint().0);
        for (body, visual) in bodies {
            set.insert(body, visual)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, body: Body, visual: V) -> Result<()> {
        body.check()?;
        if self.ids.contains(&body.id) {
            return Err(Error::InvalidBody {
                id: body.id,
                reason: "duplicate id".to_string(),
            });
        }

        self.ids.push(body.id);
        self.positions.push(body.pos);
        self.velocities.push(body.vel);
        self.masses.push(body.mass);
        self.visuals.push(visual);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[BodyId] {
        &self.ids
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn masses(&self) -> &[Scalar] {
        &self.masses
    }

    pub fn visuals(&self) -> &[V] {
        &self.visuals
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.ids.iter().position(|&other| other == id)
    }

    /// Snapshot of the physical state of the body at `index`.
    pub fn body(&self, index: usize) -> Option<Body> {
        Some(Body {
            id: *self.ids.get(index)?,
            mass: self.masses[index],
            pos: self.positions[index],
            vel: self.velocities[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, &V)> + '_ {
        (0..self.len()).filter_map(move |i| Some((self.body(i)?, &self.visuals[i])))
    }

    pub(crate) fn set_state(&mut self, index: usize, pos: Point3, vel: Vec3) {
        self.positions[index] = pos;
        self.velocities[index] = vel;
    }

    /// Mass-weighted mean position, `None` for an empty set.
    pub fn center_of_mass(&self) -> Option<Point3> {
        let total: Scalar = self.masses.iter().sum();
        if self.is_empty() || total <= 0.0 {
            return None;
        }
        let weighted = self
            .positions
            .iter()
            .zip(&self.masses)
            .fold(Vec3::zeros(), |acc, (p, &m)| acc + p.coords * m);
        Some(Point3::from(weighted / total))
    }

    pub fn kinetic_energy(&self) -> Scalar {
        self.velocities
            .iter()
            .zip(&self.masses)
            .map(|(v, &m)| 0.5 * m * v.norm_squared())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: u32, mass: Scalar, x: Scalar) -> Body {
        Body::new(BodyId(id), mass, Point3::new(x, 0.0, 0.0), Vec3::zeros())
    }

    #[test]
    fn columns_stay_aligned() {
        let set = BodySet::from_bodies(vec![(body(3, 1.0, 1.0), 'a'), (body(9, 2.0, -1.0), 'b')]).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.ids(), &[BodyId(3), BodyId(9)]);
        assert_eq!(set.masses(), &[1.0, 2.0]);
        assert_eq!(set.visuals(), &['a', 'b']);
        assert_eq!(set.index_of(BodyId(9)), Some(1));
        assert_eq!(set.body(1).unwrap().pos, Point3::new(-1.0, 0.0, 0.0));
        assert!(set.body(2).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = BodySet::from_bodies(vec![(body(1, 1.0, 0.0), ()), (body(1, 1.0, 1.0), ())]).unwrap_err();
        assert!(matches!(err, Error::InvalidBody { id: BodyId(1), .. }));
    }

    #[test]
    fn rejects_non_positive_mass() {
        let mut set = BodySet::new();
        assert!(set.insert(body(0, 0.0, 0.0), ()).is_err());
        assert!(set.insert(body(0, -1.0, 0.0), ()).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_non_finite_state() {
        let mut set = BodySet::new();
        let mut b = body(0, 1.0, 0.0);
        b.vel.y = Scalar::NAN;
        assert!(set.insert(b, ()).is_err());
    }

    #[test]
    fn center_of_mass_is_mass_weighted() {
        let set = BodySet::from_bodies(vec![(body(0, 1.0, 0.0), ()), (body(1, 3.0, 4.0), ())]).unwrap();
        let com = set.center_of_mass().unwrap();
        assert_eq!(com, Point3::new(3.0, 0.0, 0.0));
        assert!(BodySet::<()>::new().center_of_mass().is_none());
    }
}
