use serde::{Deserialize, Serialize};

use crate::coords::Point;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureInfo {
	pub id: u32,
	pub color: i32,
	pub kind: i32,
}

/// Roster sent once before the first turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialObservation {
	pub creatures: Vec<CreatureInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneReport {
	pub id: u32,
	pub x: i32,
	pub y: i32,
	#[serde(default)]
	pub emergency: bool,
	pub battery: i32,
}

impl DroneReport {
	pub fn pos(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
	pub drone_id: u32,
	pub creature_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleCreature {
	pub id: u32,
	pub x: i32,
	pub y: i32,
	pub vx: i32,
	pub vy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarBlip {
	pub drone_id: u32,
	pub creature_id: u32,
	/// Raw quadrant token: `TL`, `TR`, `BL` or `BR`.
	pub direction: String,
}

/// One turn's batch, fields in protocol order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnObservation {
	#[serde(default)]
	pub my_score: i32,
	#[serde(default)]
	pub foe_score: i32,
	#[serde(default)]
	pub my_saved: Vec<u32>,
	#[serde(default)]
	pub foe_saved: Vec<u32>,
	#[serde(default)]
	pub my_drones: Vec<DroneReport>,
	#[serde(default)]
	pub foe_drones: Vec<DroneReport>,
	#[serde(default)]
	pub scans: Vec<ScanReport>,
	#[serde(default)]
	pub visible: Vec<VisibleCreature>,
	#[serde(default)]
	pub blips: Vec<RadarBlip>,
}
