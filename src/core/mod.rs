pub mod counter;
pub mod driver;
pub mod effects;
pub mod engine;
pub mod random;

pub use crate::domain::model::{DriverState, ParticleSpec, TickReport, Viewport};
pub use crate::domain::ports::{DriverConfig, ProgressSink, RandomSource};
pub use crate::utils::error::Result;
