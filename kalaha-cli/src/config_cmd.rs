//! Config command and the shared table options

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kalaha_core::GameConfig;

/// Table options shared by `play` and `simulate`
#[derive(Args, Clone, Debug, Default)]
pub struct TableArgs {
    /// Game configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pits per side (overrides the config file)
    #[arg(long)]
    pub pits: Option<usize>,

    /// Initial stones per pit (overrides the config file)
    #[arg(long)]
    pub stones: Option<u32>,
}

impl TableArgs {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve(&self) -> Result<GameConfig> {
        let base = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GameConfig::default(),
        };

        let config = base.with_overrides(self.pits, self.stones);
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = GameConfig::default();

    match args.output {
        Some(path) => {
            config
                .save(&path)
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            tracing::info!("Wrote default config to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}
