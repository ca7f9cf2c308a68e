use std::io::Write;

use anyhow::Context;
use clap::Parser;
use wd_cli::cli::{Cli, Commands};
use wd_cli::fixture::Fixture;
use wd_cli::{logging, replay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	match cli.command {
		Commands::Replay(args) => {
			let fixture = Fixture::load(&args.fixture)?;
			let config = args.apply(fixture.config.clone());
			let responses = replay::run(&fixture, config).await?;

			let mut stdout = std::io::stdout().lock();
			for response in responses {
				let line = serde_json::to_string(&response.to_wire())?;
				writeln!(stdout, "{line}").context("failed to write response")?;
			}
		}
	}
	Ok(())
}
