use serde::{Deserialize, Serialize};

/// Progress saturates here; once reached it only moves again via a reset.
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverState {
    /// Not ticking. Progress holds whatever the last run left behind.
    Idle,
    /// Ticker active, progress below 100.
    Running,
    /// Progress clamped at 100, ticker stopped.
    Complete,
}

/// Snapshot handed back by every driver operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub progress: u8,
    pub state: DriverState,
}

/// Spawn parameters for one particle. Placement and animation happen in the
/// rendering layer; this is only the rolled geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub x: u32,
    pub y: u32,
    pub delay_ms: u32,
}

/// Drawable area a particle burst scatters over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}
