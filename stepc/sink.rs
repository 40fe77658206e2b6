use log::trace;

use stepper::prelude::*;

/// Render sink for headless runs: counts draws and tracks how far out bodies
/// are drawn relative to the play area center.
#[derive(Debug, Clone)]
pub struct Tally {
	pub center: Point3,
	pub draws: u64,
	pub furthest: Scalar,
	pub brightest: Scalar,
}

impl Tally {
	pub fn new(center: Point3) -> Self {
		Tally {
			center,
			draws: 0,
			furthest: 0.0,
			brightest: 0.0,
		}
	}

	/// Starts a fresh frame; `furthest` only covers the current frame.
	pub fn begin_frame(&mut self) {
		self.furthest = 0.0;
	}
}

impl DrawSink<Tint> for Tally {
	fn draw(&mut self, cmd: DrawCommand<'_, Tint>) {
		let pos = cmd.position();
		let tint = cmd.visual;
		trace!(
			"draw {:?} at {} scale {} rgb({:.2}, {:.2}, {:.2})",
			cmd.id,
			pos,
			cmd.scale,
			tint.red,
			tint.green,
			tint.blue
		);

		self.draws += 1;
		self.furthest = self.furthest.max(na::distance(&pos, &self.center));
		self.brightest = self.brightest.max(tint.red.max(tint.green).max(tint.blue));
	}
}
