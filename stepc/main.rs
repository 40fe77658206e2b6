use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use stepper::prelude::*;

pub mod sink;

/// Runs the simulation headless, standing in for a renderer's frame loop.
#[derive(Parser, Debug)]
struct Args {
	/// Scenario YAML file; built-in defaults when omitted
	#[arg(short, long)]
	scenario: Option<PathBuf>,

	#[arg(short, long, default_value_t = 600)]
	frames: u64,

	/// Fixed frame delta in seconds; wall-clock deltas when omitted
	#[arg(long)]
	dt: Option<Scalar>,

	/// Target frame time for wall-clock runs
	#[arg(long, default_value_t = 16)]
	frame_ms: u64,

	/// Override the scenario's seed
	#[arg(long)]
	seed: Option<u64>,

	/// Pin a body at its starting position for the whole run (repeatable)
	#[arg(long = "hold", value_name = "ID")]
	hold: Vec<u32>,

	#[arg(long, default_value = "info")]
	log_level: log::LevelFilter,
}

fn setup_logging(level: log::LevelFilter) -> Result<()> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{}[{}][{}] {}",
				chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
				record.target(),
				record.level(),
				message
			))
		})
		.level(level)
		.chain(std::io::stdout())
		.apply()?;
	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	setup_logging(args.log_level)?;
	debug!("Starting");

	let mut params = match &args.scenario {
		Some(path) => Params::load(path)
			.with_context(|| format!("failed to load scenario {}", path.display()))?,
		None => Params::default(),
	};
	if let Some(seed) = args.seed {
		params.seed = seed;
	}
	if let Some(dt) = args.dt {
		anyhow::ensure!(dt.is_finite() && dt >= 0.0, "--dt must be a non-negative number of seconds");
	}

	let mut system = System::ring(&params)?;
	if params.bounded() {
		info!(
			"Built {} bodies (seed {}), play area radius {:.2}",
			system.len(),
			params.seed,
			params.play_size_sq.sqrt()
		);
	} else {
		info!("Built {} bodies (seed {}), unbounded", system.len(), params.seed);
	}

	let mut held = HeldBodies::new();
	for &id in &args.hold {
		let id = BodyId(id);
		match system.bodies().index_of(id) {
			Some(i) => held.hold(id, system.bodies().positions()[i]),
			None => warn!("no body {:?} to hold", id),
		}
	}

	let mut sink = sink::Tally::new(params.center);
	let mut clock = FrameClock::new();
	let mut busy = Duration::ZERO;
	let mut steered = 0;

	debug!("starting main loop");
	for _ in 0..args.frames {
		let dt = match args.dt {
			Some(dt) => dt,
			None => {
				std::thread::sleep(Duration::from_millis(args.frame_ms));
				clock.tick()
			}
		};

		sink.begin_frame();
		let stats = system.step(dt, &mut held, &mut sink)?;
		busy += stats.elapsed;
		steered += stats.steered;

		if stats.frame % 60 == 0 {
			info!(
				"frame {}: dt {:.4}s, furthest body {:.2} from center, {} steered",
				stats.frame, stats.dt, sink.furthest, stats.steered
			);
		}
	}

	let frames = system.frame().max(1);
	let bodies = system.bodies();
	match bodies.center_of_mass() {
		Some(com) => info!("center of mass {} ({:.3} from center)", com, na::distance(&com, &params.center)),
		None => info!("no bodies"),
	}
	info!("kinetic energy {:.4}", bodies.kinetic_energy());
	info!(
		"{} frames, {} draws, {} steering corrections, brightest tint {:.2}, {:.3}ms per step",
		system.frame(),
		sink.draws,
		steered,
		sink.brightest,
		busy.as_secs_f64() * 1000.0 / frames as f64
	);

	Ok(())
}
