pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::random::{SeededRandom, ThreadRandom};
pub use crate::adapters::render::{ConsoleSink, NullSink};
pub use crate::config::file::FileConfig;
pub use crate::core::{counter::Counter, driver::ProgressDriver, engine::ProgressEngine};
pub use crate::domain::model::{DriverState, ParticleSpec, TickReport, Viewport};
pub use crate::domain::ports::{DriverConfig, ProgressSink, RandomSource};
pub use crate::utils::error::{PulseError, Result};
