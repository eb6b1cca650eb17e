use std::collections::BTreeMap;

use crate::creature::Creature;
use crate::drones::{Drone, Side};
use crate::score::Scoreboard;

/// Everything known about the match. Entries are created on first mention
/// and never removed; only the reconciler writes through the `*_mut`
/// accessors.
#[derive(Debug, Clone)]
pub struct World {
    creatures: BTreeMap<u32, Creature>,
    my_drones: BTreeMap<u32, Drone>,
    foe_drones: BTreeMap<u32, Drone>,
    pub score: Scoreboard,
    turns_left: u32,
    name_seed: u64,
}

impl World {
    pub fn new(max_turns: u32, name_seed: u64) -> Self {
        Self {
            creatures: BTreeMap::new(),
            my_drones: BTreeMap::new(),
            foe_drones: BTreeMap::new(),
            score: Scoreboard::default(),
            turns_left: max_turns,
            name_seed,
        }
    }

    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }

    pub fn creature(&self, id: u32) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    /// All creatures in ascending id order.
    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    pub fn drone(&self, side: Side, id: u32) -> Option<&Drone> {
        self.fleet(side).get(&id)
    }

    /// Drones of one side in ascending id order.
    pub fn drones(&self, side: Side) -> impl Iterator<Item = &Drone> {
        self.fleet(side).values()
    }

    pub fn my_drone_ids(&self) -> Vec<u32> {
        self.my_drones.keys().copied().collect()
    }

    pub(crate) fn creature_mut(&mut self, id: u32) -> &mut Creature {
        self.creatures.entry(id).or_insert_with(|| Creature::new(id))
    }

    pub(crate) fn creatures_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.creatures.values_mut()
    }

    pub(crate) fn drone_mut(&mut self, side: Side, id: u32) -> &mut Drone {
        let seed = self.name_seed;
        let fleet = match side {
            Side::Mine => &mut self.my_drones,
            Side::Foe => &mut self.foe_drones,
        };
        fleet.entry(id).or_insert_with(|| Drone::new(id, seed))
    }

    pub(crate) fn count_down_turn(&mut self) {
        self.turns_left = self.turns_left.saturating_sub(1);
    }

    fn fleet(&self, side: Side) -> &BTreeMap<u32, Drone> {
        match side {
            Side::Mine => &self.my_drones,
            Side::Foe => &self.foe_drones,
        }
    }
}
