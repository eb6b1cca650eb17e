#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CreatureColor {
	#[default]
	Unknown,
	Pink,
	Yellow,
	Green,
	Blue,
}

impl CreatureColor {
	pub fn from_code(code: i32) -> Self {
		match code {
			0 => CreatureColor::Pink,
			1 => CreatureColor::Yellow,
			2 => CreatureColor::Green,
			3 => CreatureColor::Blue,
			_ => CreatureColor::Unknown,
		}
	}

	pub fn is_known(self) -> bool {
		!matches!(self, CreatureColor::Unknown)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CreatureType {
	#[default]
	Unknown,
	Squid,
	Fish,
	Crab,
}

impl CreatureType {
	pub fn from_code(code: i32) -> Self {
		match code {
			0 => CreatureType::Squid,
			1 => CreatureType::Fish,
			2 => CreatureType::Crab,
			_ => CreatureType::Unknown,
		}
	}

	pub fn is_known(self) -> bool {
		!matches!(self, CreatureType::Unknown)
	}
}
