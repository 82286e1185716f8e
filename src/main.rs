use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use snake_gate::game::GameConfig;
use snake_gate::modes::HumanMode;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_gate")]
#[command(version, about = "Snake game that unlocks a code at a score of 10")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON file with game settings; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length (overrides the config file)
    #[arg(long)]
    grid_size: Option<usize>,

    /// Milliseconds between ticks (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Where log output goes; the terminal belongs to the game
    #[arg(long, default_value = "snake_gate.log")]
    log_file: PathBuf,

    /// Log verbosity
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard or mouse-drag controls
    Play,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = load_config(&cli)?;
    info!("Loaded configuration: {config:?}");

    match cli.mode {
        Mode::Play => {
            let mut human_mode = HumanMode::new(config, cli.seed);
            human_mode.run().await?;
        }
    }

    Ok(())
}
