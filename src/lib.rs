pub mod command;
pub mod config;
pub mod coords;
pub mod creature;
pub mod drones;
pub mod engine;
pub mod observation;
pub mod policy;
pub mod protocol;
pub mod reconcile;
pub mod score;
pub mod species;
pub mod world;

// Re-exports for convenience in tests and integration users.
pub use command::{Command, format_commands};
pub use config::{BotConfig, ConfigError, PolicyConfig, TimingConfig};
pub use coords::Point;
pub use creature::{Creature, Motion};
pub use drones::{Drone, RadarDirection, RadarVertical, Side};
pub use engine::Engine;
pub use observation::{
	CreatureInfo, DroneReport, InitialObservation, RadarBlip, ScanReport, TurnObservation, VisibleCreature,
};
pub use policy::{Decision, Phase, Policy, SaveCommit};
pub use protocol::{ProtocolError, ProtocolReader};
pub use reconcile::{commit_save, reconcile_initial, reconcile_turn};
pub use score::Scoreboard;
pub use species::{CreatureColor, CreatureType};
pub use world::World;
