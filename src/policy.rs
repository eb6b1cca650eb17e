use tracing::debug;

use crate::command::Command;
use crate::config::PolicyConfig;
use crate::coords::Point;
use crate::drones::{Drone, Side};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Exploring,
	Saving,
}

/// Creatures a drone banks this turn; applied by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCommit {
	pub drone_id: u32,
	pub creatures: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
	pub phase: Phase,
	pub command: Command,
	pub save: Option<SaveCommit>,
}

/// Greedy per-turn decision maker for owned drones. Holds no state between
/// turns: a drone's memory size alone selects its phase.
#[derive(Debug, Clone, Default)]
pub struct Policy {
	config: PolicyConfig,
}

impl Policy {
	pub fn new(config: PolicyConfig) -> Self {
		Self { config }
	}

	pub fn command(&self, world: &World, drone_id: u32) -> Command {
		self.decide(world, drone_id).command
	}

	pub fn decide(&self, world: &World, drone_id: u32) -> Decision {
		let Some(drone) = world.drone(Side::Mine, drone_id) else {
			return Decision { phase: Phase::Exploring, command: Command::Wait { light: false }, save: None };
		};
		let decision = if drone.memory.len() >= self.config.memory_threshold {
			self.surface(drone)
		} else {
			Decision { phase: Phase::Exploring, command: self.explore(world, drone), save: None }
		};
		debug!(drone = %drone.name, phase = ?decision.phase, command = %decision.command, "decided");
		decision
	}

	fn light(&self, drone: &Drone) -> bool {
		drone.battery > self.config.light_battery_threshold
	}

	fn surface(&self, drone: &Drone) -> Decision {
		let light = self.light(drone);
		if drone.pos.y > self.config.surface_y {
			return Decision {
				phase: Phase::Saving,
				command: Command::Move { target: Point::new(drone.pos.x, self.config.surface_y), light },
				save: None,
			};
		}
		Decision {
			phase: Phase::Saving,
			command: Command::Wait { light },
			save: Some(SaveCommit { drone_id: drone.id, creatures: drone.memory.iter().copied().collect() }),
		}
	}

	fn explore(&self, world: &World, drone: &Drone) -> Command {
		let light = self.light(drone);

		// Direct sightings beat radar hints, stale or not.
		let nearest = world
			.creatures()
			.filter(|c| !c.scanned)
			.filter_map(|c| c.position())
			.min_by_key(|p| drone.pos.distance_sq(*p));
		if let Some(target) = nearest {
			return Command::Move { target, light };
		}

		let Some(unscanned) = world.creatures().find(|c| !c.scanned) else {
			return Command::Wait { light };
		};
		let Some(hint) = drone.radar_hint(unscanned.id) else {
			return Command::Wait { light };
		};
		debug!(drone = %drone.name, creature = unscanned.id, hint = hint.code(), "following radar");
		match hint.offset(self.config.step, self.config.radar_vertical) {
			Some((dx, dy)) => Command::Move { target: drone.pos.offset(dx, dy), light },
			None => Command::Wait { light },
		}
	}
}
