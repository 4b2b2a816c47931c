use crate::domain::ports::DriverConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Engine settings loaded from a TOML file.
///
/// ```toml
/// [engine]
/// tick_millis = 100
/// step_min = 1
/// step_max = 5
/// seed = 42
///
/// [demo]
/// viewport_width = 800
/// viewport_height = 600
/// counter_steps = [1, 1, -1, 5]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub engine: EngineSection,
    pub demo: Option<DemoSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSection {
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    #[serde(default = "default_step_min")]
    pub step_min: u32,
    #[serde(default = "default_step_max")]
    pub step_max: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSection {
    pub viewport_width: Option<u32>,
    pub viewport_height: Option<u32>,
    pub counter_steps: Option<Vec<i64>>,
}

fn default_tick_millis() -> u64 {
    100
}

fn default_step_min() -> u32 {
    1
}

fn default_step_max() -> u32 {
    5
}

impl FileConfig {
    /// 從 TOML 檔案載入並驗證配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl DriverConfig for FileConfig {
    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.engine.tick_millis)
    }

    fn step_min(&self) -> u32 {
        self.engine.step_min
    }

    fn step_max(&self) -> u32 {
        self.engine.step_max
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("engine.tick_millis", self.engine.tick_millis, 1)?;
        validation::validate_positive_number("engine.step_min", u64::from(self.engine.step_min), 1)?;
        validation::validate_ordered_bounds(
            "engine.step_min/engine.step_max",
            self.engine.step_min,
            self.engine.step_max,
        )?;
        Ok(())
    }
}
