use std::collections::{BTreeMap, BTreeSet};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::coords::Point;

pub const BATTERY_MAX: i32 = 30;

const CUTE_ADJECTIVES: [&str; 6] = ["Fluffy", "Sparkly", "Cheery", "Bubbly", "Cozy", "Cuddly"];
const CUTE_NOUNS: [&str; 6] = ["Bunny", "Kitten", "Panda", "Butterfly", "Daisy", "Peach"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
	Mine,
	Foe,
}

/// Quadrant of a radar blip relative to the reporting drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarDirection {
	TopLeft,
	TopRight,
	BottomLeft,
	BottomRight,
	Unknown,
}

/// Which way "top" points on the Y axis when turning a blip into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadarVertical {
	#[default]
	TopPositive,
	TopNegative,
}

impl RadarDirection {
	pub fn from_code(code: &str) -> Self {
		match code.trim() {
			"TL" => RadarDirection::TopLeft,
			"TR" => RadarDirection::TopRight,
			"BL" => RadarDirection::BottomLeft,
			"BR" => RadarDirection::BottomRight,
			_ => RadarDirection::Unknown,
		}
	}

	pub fn code(self) -> &'static str {
		match self {
			RadarDirection::TopLeft => "TL",
			RadarDirection::TopRight => "TR",
			RadarDirection::BottomLeft => "BL",
			RadarDirection::BottomRight => "BR",
			RadarDirection::Unknown => "??",
		}
	}

	/// Per-axis offset of `step` toward the quadrant, or `None` when the
	/// quadrant is not known.
	pub fn offset(self, step: i32, vertical: RadarVertical) -> Option<(i32, i32)> {
		let (dx, up) = match self {
			RadarDirection::TopLeft => (-step, true),
			RadarDirection::TopRight => (step, true),
			RadarDirection::BottomLeft => (-step, false),
			RadarDirection::BottomRight => (step, false),
			RadarDirection::Unknown => return None,
		};
		let dy = match (vertical, up) {
			(RadarVertical::TopPositive, true) | (RadarVertical::TopNegative, false) => step,
			(RadarVertical::TopPositive, false) | (RadarVertical::TopNegative, true) => -step,
		};
		Some((dx, dy))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
	pub id: u32,
	pub name: String,
	pub pos: Point,
	pub emergency: bool,
	pub battery: i32,
	/// Scanned but not yet saved.
	pub memory: BTreeSet<u32>,
	pub radar: BTreeMap<u32, RadarDirection>,
}

impl Drone {
	pub fn new(id: u32, name_seed: u64) -> Self {
		Self {
			id,
			name: cute_name(id, name_seed),
			pos: Point::default(),
			emergency: false,
			battery: BATTERY_MAX,
			memory: BTreeSet::new(),
			radar: BTreeMap::new(),
		}
	}

	pub fn radar_hint(&self, creature_id: u32) -> Option<RadarDirection> {
		self.radar.get(&creature_id).copied()
	}
}

fn cute_name(id: u32, seed: u64) -> String {
	let mut rng = StdRng::seed_from_u64(seed ^ u64::from(id).wrapping_mul(0x9E37_79B9_7F4A_7C15));
	let adjective = CUTE_ADJECTIVES[rng.gen_range(0..CUTE_ADJECTIVES.len())];
	let noun = CUTE_NOUNS[rng.gen_range(0..CUTE_NOUNS.len())];
	format!("{}{} (Id:{})", adjective, noun, id)
}
