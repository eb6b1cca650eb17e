use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use seabed::*;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SEABED_CONFIG";

fn load_config() -> Result<BotConfig> {
	match std::env::var_os(CONFIG_ENV) {
		Some(path) => {
			let path = PathBuf::from(path);
			BotConfig::from_path(&path).with_context(|| format!("loading {}", path.display()))
		}
		None => Ok(BotConfig::default()),
	}
}

fn main() -> Result<()> {
	// stdout belongs to the referee
	tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = load_config()?;
	let mut engine = Engine::new(config);

	let stdin = io::stdin();
	let mut reader = ProtocolReader::new(stdin.lock());
	let mut out = BufWriter::new(io::stdout().lock());

	let init = reader.read_initial().context("reading creature roster")?;
	engine.start(&init);

	while let Some(turn) = reader
		.read_turn()
		.with_context(|| format!("reading turn {}", engine.turn() + 1))?
	{
		let commands = engine.tick(&turn);
		writeln!(out, "{}", format_commands(&commands))?;
		out.flush()?;
	}

	tracing::info!(turns = engine.turn(), "input closed, match over");
	Ok(())
}
