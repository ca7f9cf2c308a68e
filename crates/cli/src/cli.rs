use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand};
use wd::ExecutorConfig;

/// Cargo-like help colours, with argument errors in red.
fn help_styles() -> Styles {
	let accent = AnsiColor::Green.on_default().bold();
	let token = AnsiColor::Cyan.on_default();
	Styles::styled()
		.header(accent)
		.usage(accent)
		.literal(token)
		.placeholder(token)
		.valid(token)
		.error(AnsiColor::Red.on_default().bold())
		.invalid(AnsiColor::Yellow.on_default().bold())
}

#[derive(Parser, Debug)]
#[command(name = "wd")]
#[command(about = "Replay driver commands against an in-memory page")]
#[command(version)]
#[command(styles = help_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Run a fixture's commands and print one JSON response per line
	Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
	/// Fixture file describing the page and the commands to run
	#[arg(value_name = "FIXTURE")]
	pub fixture: PathBuf,

	/// Run atoms asynchronously with a bounded wait
	#[arg(long)]
	pub async_scripts: bool,

	/// Give up on an asynchronous atom after this many milliseconds
	#[arg(long, value_name = "MS")]
	pub script_timeout_ms: Option<u64>,
}

impl ReplayArgs {
	/// Layers the flags over the fixture's own settings.
	pub fn apply(&self, mut config: ExecutorConfig) -> ExecutorConfig {
		if self.async_scripts {
			config = config.asynchronous(true);
		}
		if let Some(ms) = self.script_timeout_ms {
			config = config.with_async_script_timeout(std::time::Duration::from_millis(ms));
		}
		config
	}
}
