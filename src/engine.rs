use std::time::Instant;

use tracing::{info, warn};

use crate::command::Command;
use crate::config::{BotConfig, TimingConfig};
use crate::observation::{InitialObservation, TurnObservation};
use crate::policy::Policy;
use crate::reconcile::{commit_save, reconcile_initial, reconcile_turn};
use crate::world::World;

#[derive(Debug)]
pub struct Engine {
	pub world: World,
	pub policy: Policy,
	timing: TimingConfig,
	turn: u32,
}

impl Engine {
	pub fn new(config: BotConfig) -> Self {
		Self {
			world: World::new(config.timing.max_turns, config.name_seed),
			policy: Policy::new(config.policy),
			timing: config.timing,
			turn: 0,
		}
	}

	pub fn turn(&self) -> u32 {
		self.turn
	}

	pub fn start(&mut self, init: &InitialObservation) {
		reconcile_initial(&mut self.world, init);
		info!(creatures = self.world.creature_count(), turns = self.world.turns_left(), "match started");
	}

	// One turn:
	// - fold the observations into the world
	// - decide for every owned drone against the same snapshot
	// - bank any saves the decisions produced
	pub fn tick(&mut self, obs: &TurnObservation) -> Vec<Command> {
		let started = Instant::now();
		self.turn += 1;

		reconcile_turn(&mut self.world, obs);

		let decisions: Vec<_> = self
			.world
			.my_drone_ids()
			.into_iter()
			.map(|id| self.policy.decide(&self.world, id))
			.collect();

		let mut commands = Vec::with_capacity(decisions.len());
		for decision in decisions {
			if let Some(commit) = &decision.save {
				commit_save(&mut self.world, commit);
			}
			commands.push(decision.command);
		}

		let elapsed = started.elapsed();
		let budget = self.timing.budget_for(self.turn);
		info!(
			turn = self.turn,
			score = self.world.score.mine,
			foe_score = self.world.score.foe,
			lead = self.world.score.lead(),
			elapsed_us = elapsed.as_micros() as u64,
			"turn done"
		);
		if elapsed > budget {
			warn!(
				turn = self.turn,
				elapsed_ms = elapsed.as_millis() as u64,
				budget_ms = budget.as_millis() as u64,
				"turn over budget"
			);
		}
		commands
	}
}
