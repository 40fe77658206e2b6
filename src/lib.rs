use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::gravity::Gravity;
use crate::integrate::{Branch, Integrator, Motion};
use crate::prelude::*;

pub mod body;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod grab;
pub mod gravity;
pub mod integrate;
pub mod prelude;
pub mod ring;

/// What happened during one [`System::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepStats {
	/// Number of completed frames, this one included.
	pub frame: u64,
	pub dt: Scalar,
	pub held: usize,
	pub steered: usize,
	pub elapsed: Duration,
}

/// A fixed set of bodies advanced one frame at a time.
///
/// Each step runs two passes. The gravity pass reads every body and stages a
/// velocity change per body in `pending`; the integration pass then updates
/// each body from its own state and staged change only.
pub struct System<V = Tint> {
	bodies: BodySet<V>,
	gravity: Gravity,
	integrator: Integrator,
	body_radius: Scalar,
	pending: Vec<Vec3>,
	frame: u64,
}

impl System<Tint> {
	/// A system seeded on the default ring, see [`ring::ring`].
	pub fn ring(params: &Params) -> Result<Self> {
		let bodies = ring::ring(params)?;
		Self::new(params, bodies)
	}
}

impl<V> System<V> {
	pub fn new(params: &Params, bodies: BodySet<V>) -> Result<Self> {
		params.validate()?;
		let pending = vec![Vec3::zeros(); bodies.len()];
		Ok(System {
			bodies,
			gravity: Gravity::new(params.g),
			integrator: Integrator::new(params),
			body_radius: params.body_radius,
			pending,
			frame: 0,
		})
	}

	pub fn bodies(&self) -> &BodySet<V> {
		&self.bodies
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bodies.is_empty()
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn body_radius(&self) -> Scalar {
		self.body_radius
	}

	/// Advances every body by `dt` seconds and draws the result.
	///
	/// `grab` is asked once per body whether it is held this frame. A held
	/// body is moved to the returned pose and stopped; a pose that is not
	/// finite is ignored and the body moves freely. A negative or non-finite
	/// `dt` is rejected before anything changes.
	pub fn step<G, S>(&mut self, dt: Scalar, grab: &mut G, sink: &mut S) -> Result<StepStats>
	where
		G: Grab + ?Sized,
		S: DrawSink<V> + ?Sized,
	{
		if !(dt.is_finite() && dt >= 0.0) {
			return Err(Error::InvalidDelta(dt));
		}
		trace!("dt: {}", dt);
		let start = Instant::now();

		self.gravity.velocity_deltas(&self.bodies, dt, &mut self.pending);

		let mut stats = StepStats {
			dt,
			..StepStats::default()
		};
		for i in 0..self.bodies.len() {
			let id = self.bodies.ids()[i];
			let motion = Motion {
				pos: self.bodies.positions()[i],
				vel: self.bodies.velocities()[i],
			};

			let target = grab.grab(id, &motion.pos).filter(|pose| {
				let finite = pose.iter().all(|c| c.is_finite());
				if !finite {
					warn!("ignoring non-finite grab pose {:?} for {:?}", pose, id);
				}
				finite
			});

			let (next, branch) = self.integrator.advance(motion, self.pending[i], target, dt);
			match branch {
				Branch::Held => stats.held += 1,
				Branch::Steered => stats.steered += 1,
				Branch::Free => {}
			}
			self.bodies.set_state(i, next.pos, next.vel);
		}

		self.draw(sink);

		self.frame += 1;
		stats.frame = self.frame;
		stats.elapsed = start.elapsed();
		debug!(
			"step {} took {:.3}ms ({} held, {} steered)",
			self.frame,
			stats.elapsed.as_secs_f64() * 1000.0,
			stats.held,
			stats.steered
		);

		Ok(stats)
	}

	/// Emits one draw command per body from the current state.
	pub fn draw<S>(&self, sink: &mut S)
	where
		S: DrawSink<V> + ?Sized,
	{
		let scale = self.body_radius * 2.0;
		for ((id, pos), visual) in self
			.bodies
			.ids()
			.iter()
			.zip(self.bodies.positions())
			.zip(self.bodies.visuals())
		{
			trace!("draw {:?} at {}", id, pos);
			sink.draw(DrawCommand::new(*id, pos, scale, visual));
		}
	}
}
