pub mod file;

#[cfg(feature = "cli")]
use crate::domain::ports::DriverConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pulse-bar")]
#[command(about = "A small counter-and-progress engine with a terminal demo")]
pub struct CliConfig {
    #[arg(long, default_value = "100")]
    pub tick_millis: u64,

    #[arg(long, default_value = "1")]
    pub step_min: u32,

    #[arg(long, default_value = "5")]
    pub step_max: u32,

    #[arg(long, help = "Seed for a reproducible run")]
    pub seed: Option<u64>,

    #[arg(long, help = "Load engine settings from a TOML file instead")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process stats around the run")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl DriverConfig for CliConfig {
    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    fn step_min(&self) -> u32 {
        self.step_min
    }

    fn step_max(&self) -> u32 {
        self.step_max
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("tick_millis", self.tick_millis, 1)?;
        validation::validate_positive_number("step_min", u64::from(self.step_min), 1)?;
        validation::validate_ordered_bounds("step_min/step_max", self.step_min, self.step_max)?;
        Ok(())
    }
}
