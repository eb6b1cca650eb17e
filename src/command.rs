use std::fmt;

use crate::coords::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Move { target: Point, light: bool },
	Wait { light: bool },
}

impl Command {
	pub fn light(&self) -> bool {
		match self {
			Command::Move { light, .. } | Command::Wait { light } => *light,
		}
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let light = if self.light() { 1 } else { 0 };
		match self {
			Command::Move { target, .. } => write!(f, "MOVE {} {} {}", target.x, target.y, light),
			Command::Wait { .. } => write!(f, "WAIT {}", light),
		}
	}
}

/// One protocol line per command, in the given order.
pub fn format_commands(commands: &[Command]) -> String {
	commands.iter().map(|c| c.to_string()).collect::<Vec<_>>().join("\n")
}
