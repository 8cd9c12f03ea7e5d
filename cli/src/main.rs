use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tilesweep_cli::{Command, Flow, Shell};
use tilesweep_core::GameConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Cells per side
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_DIMENSION)]
    dimension: u8,

    /// Number of mines
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = GameConfig::new(args.dimension, args.mines).context("invalid board size")?;
    let mut shell = Shell::new(config, seed).context("could not create the game")?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    shell.show(&mut out)?;
    writeln!(out, "type `help` for commands")?;

    for line in stdin.lock().lines() {
        let line = line.context("could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if shell.execute(command, &mut out)? == Flow::Quit {
                    break;
                }
            }
            Err(err) => writeln!(out, "{err:#}")?,
        }
        out.flush()?;
    }

    Ok(())
}
